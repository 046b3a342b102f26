pub mod report;
pub mod station;

pub use report::{DownloadRecord, FetchReport};
pub use station::StationId;
