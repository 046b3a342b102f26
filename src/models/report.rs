use crate::models::StationId;
use std::path::PathBuf;

/// One completed download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRecord {
    pub station: StationId,
    pub path: PathBuf,
    pub status: u16,
    pub bytes_written: usize,
}

impl DownloadRecord {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Downloads completed by one run, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub downloads: Vec<DownloadRecord>,
}

impl FetchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DownloadRecord) {
        self.downloads.push(record);
    }

    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.downloads.iter().map(|d| d.bytes_written).sum()
    }

    /// Downloads whose body was written despite a non-success status
    pub fn http_errors(&self) -> Vec<&DownloadRecord> {
        self.downloads.iter().filter(|d| !d.is_success()).collect()
    }

    pub fn summary(&self) -> String {
        let errors = self.http_errors().len();
        let mut summary = format!(
            "Downloaded {} station file(s), {} bytes",
            self.len(),
            self.total_bytes()
        );
        if errors > 0 {
            summary.push_str(&format!(", {} with non-success HTTP status", errors));
        }
        summary
    }
}
