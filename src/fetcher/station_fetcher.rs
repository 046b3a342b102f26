use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::fetcher::{HttpSource, StationSource};
use crate::models::{DownloadRecord, FetchReport, StationId};
use crate::utils::filename::{station_output_path, station_url};
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Downloads station files one at a time, in the order given.
///
/// The first transport or filesystem error ends the run; files already
/// written are left in place and later stations are not attempted.
pub struct StationFetcher<S = HttpSource> {
    source: S,
    config: FetchConfig,
}

impl StationFetcher<HttpSource> {
    pub fn new(config: FetchConfig) -> Self {
        Self::with_source(HttpSource::new(), config)
    }
}

impl<S: StationSource> StationFetcher<S> {
    pub fn with_source(source: S, config: FetchConfig) -> Self {
        Self { source, config }
    }

    pub async fn fetch_all<I, T>(&self, stations: I) -> Result<FetchReport>
    where
        I: IntoIterator<Item = T>,
        T: Into<StationId>,
    {
        let mut report = FetchReport::new();

        for station in stations {
            let record = self.fetch_station(&station.into()).await?;
            report.push(record);
        }

        info!("{}", report.summary());
        Ok(report)
    }

    pub async fn fetch_station(&self, station: &StationId) -> Result<DownloadRecord> {
        let url = station_url(&self.config.archive_url, station);
        let path = station_output_path(&self.config.output_dir, station);
        debug!("Station {}: {} -> {}", station, url, path.display());

        // Opened before the request, so a transport failure leaves it truncated
        let mut file = File::create(&path)
            .await
            .map_err(|source| FetchError::CreateOutput {
                path: path.clone(),
                source,
            })?;

        let payload = self.source.fetch(&url).await?;

        if !payload.is_success() {
            if self.config.fail_on_http_error {
                drop(file);
                discard_output(&path).await;
                return Err(FetchError::HttpStatus {
                    station: station.to_string(),
                    status: payload.status,
                });
            }
            warn!(
                "Station {} returned HTTP {}; saving response body as-is",
                station, payload.status
            );
        }

        file.write_all(&payload.body).await?;
        file.flush().await?;

        info!(
            "Station {}: wrote {} bytes to {}",
            station,
            payload.body.len(),
            path.display()
        );

        Ok(DownloadRecord {
            station: station.clone(),
            path,
            status: payload.status,
            bytes_written: payload.body.len(),
        })
    }
}

/// Best effort: a failed removal is logged so the status error still surfaces
async fn discard_output(path: &Path) {
    debug!("Removing {}", path.display());
    if let Err(e) = fs::remove_file(path).await {
        warn!("Could not remove {}: {}", path.display(), e);
    }
}
