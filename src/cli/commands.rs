use crate::cli::args::Cli;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::fetcher::StationFetcher;
use crate::models::FetchReport;
use crate::utils::logging::setup_logging;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<FetchReport> {
    setup_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = FetchConfig::load(cli.config_overrides())?;
    debug!("Archive: {}", config.archive_url);
    debug!("Output directory: {}", config.output_dir.display());

    if cli.stations.is_empty() {
        info!("No stations given, nothing to download");
        return Ok(FetchReport::new());
    }

    info!("Downloading {} station file(s)", cli.stations.len());
    StationFetcher::new(config).fetch_all(cli.stations).await
}
