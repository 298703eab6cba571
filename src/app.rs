//! End-to-end run: extract contacts, sweep the search API, write the report

use crate::config::Settings;
use crate::contacts::load_contacts;
use crate::error::{Error, Result};
use crate::lookup::SearchClient;
use crate::report::{Report, ReportRenderer};
use crate::search::Sweep;
use std::path::Path;
use tracing::info;

/// Run one full sweep and write the HTML report to `settings.report.output`
///
/// The search client and renderer are built before the contacts file is
/// read, so a broken setup fails before any request is made.
pub async fn run(contacts: Option<&Path>, settings: &Settings) -> Result<Report> {
    let path = contacts.ok_or(Error::MissingInput)?;

    let client = SearchClient::new(&settings.api)?;
    let renderer = ReportRenderer::new(&settings.report)?;

    info!("Reading LinkedIn contacts from: {}", path.display());
    let contacts = load_contacts(path)?;
    if contacts.is_empty() {
        return Err(Error::NoContacts(path.to_path_buf()));
    }

    let report = Sweep::from_settings(client, &settings.sweep)
        .run(&contacts)
        .await;

    info!("Writing report to: {}", settings.report.output.display());
    renderer.write(&report, &settings.report.output)?;

    Ok(report)
}
