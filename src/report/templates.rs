//! HTML rendering with Tera

use super::links::{DocumentLink, DocumentLinker};
use super::summary::format_count;
use super::Report;
use crate::config::ReportSettings;
use crate::error::Result;
use crate::results::SearchResult;
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};
use tracing::info;

const REPORT_TEMPLATE: &str = "report.html";

/// Escape text for HTML element content and quoted attributes
///
/// This is the escape function Tera applies to every `{{ }}` expression in
/// the report template.
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Renders a [`Report`] into a standalone HTML document
pub struct ReportRenderer {
    tera: Tera,
    linker: DocumentLinker,
    title: String,
}

#[derive(Serialize)]
struct ReportView<'a> {
    title: &'a str,
    searched: usize,
    with_mentions: usize,
    entries: Vec<EntryView<'a>>,
}

#[derive(Serialize)]
struct EntryView<'a> {
    name: &'a str,
    affiliation: Option<String>,
    mentions: String,
    hits: Vec<HitView<'a>>,
}

#[derive(Serialize)]
struct HitView<'a> {
    preview: &'a str,
    link: Option<DocumentLink>,
}

impl ReportRenderer {
    /// Create a renderer with the embedded report template
    pub fn new(settings: &ReportSettings) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(REPORT_TEMPLATE, include_str!("../templates/report.html"))?;
        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(escape);

        Ok(Self {
            tera,
            linker: DocumentLinker::new(settings.document_base_url.clone()),
            title: settings.title.clone(),
        })
    }

    /// Render the report to a string
    pub fn render(&self, report: &Report) -> Result<String> {
        let view = ReportView {
            title: &self.title,
            searched: report.searched(),
            with_mentions: report.with_mentions(),
            entries: report.detail_entries().map(|r| self.entry(r)).collect(),
        };

        let ctx = Context::from_serialize(&view)?;
        Ok(self.tera.render(REPORT_TEMPLATE, &ctx)?)
    }

    /// Render the report and write it to `path`
    pub fn write<P: AsRef<Path>>(&self, report: &Report, path: P) -> Result<()> {
        let path = path.as_ref();
        let html = self.render(report)?;
        std::fs::write(path, html)?;
        info!("Wrote report to {}", path.display());
        Ok(())
    }

    fn entry<'a>(&self, result: &'a SearchResult) -> EntryView<'a> {
        EntryView {
            name: result.contact.full_name(),
            affiliation: result.contact.affiliation(),
            mentions: format_count(result.total_hits),
            hits: result
                .hits
                .iter()
                .map(|hit| HitView {
                    preview: &hit.preview,
                    link: hit
                        .file_path
                        .as_deref()
                        .and_then(|path| self.linker.link(path)),
                })
                .collect(),
        }
    }
}
