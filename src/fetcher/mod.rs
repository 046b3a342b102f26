pub mod http_source;
pub mod station_fetcher;

pub use http_source::HttpSource;
pub use station_fetcher::StationFetcher;

use crate::error::Result;
use std::future::Future;

/// Response to a single GET: status code and the raw, uninterpreted body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Payload {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues the one GET the fetcher makes per station
pub trait StationSource {
    /// Fetch `url`. Transport failures are errors; HTTP error statuses are not.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Payload>> + Send;
}
