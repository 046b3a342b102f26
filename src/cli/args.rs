use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghcnd-fetcher")]
#[command(about = "Download GHCN-Daily per-station compressed CSV files")]
#[command(version)]
pub struct Cli {
    /// Station identifiers to download, in order (e.g. USW00094728)
    #[arg(value_name = "STATION")]
    pub stations: Vec<String>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        help = "Archive base URL [default: https://www.ncei.noaa.gov/pub/data/ghcn/daily/by_station]"
    )]
    pub archive_url: Option<String>,

    #[arg(
        short,
        long,
        help = "Existing directory for downloads [default: data/weather/compressed]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        long,
        help = "Abort on a non-success HTTP status instead of saving the response body"
    )]
    pub fail_on_http_error: bool,
}

impl Cli {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            archive_url: self.archive_url.clone(),
            output_dir: self.output_dir.clone(),
            fail_on_http_error: self.fail_on_http_error.then_some(true),
        }
    }
}
