pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod utils;

pub use config::FetchConfig;
pub use error::{FetchError, Result};
pub use fetcher::{HttpSource, Payload, StationFetcher, StationSource};
pub use models::{DownloadRecord, FetchReport, StationId};
