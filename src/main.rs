//! mention-report command line entry point

use anyhow::Result;
use clap::Parser;
use mention_report::{
    app,
    cli::{Cli, EXPORT_INSTRUCTIONS},
    config, report,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting mention-report v{}", mention_report::VERSION);

    let mut settings = config::load(cli.config.clone())?;
    cli.apply(&mut settings);

    if cli.contacts.is_none() {
        println!("{}", EXPORT_INSTRUCTIONS);
    }

    let report = app::run(cli.contacts.as_deref(), &settings).await?;

    println!();
    print!("{}", report::summary(&report, settings.report.top_n));
    println!(
        "\nFull report saved to: {}",
        settings.report.output.display()
    );

    Ok(())
}
