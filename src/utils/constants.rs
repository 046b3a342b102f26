/// Archive endpoint serving one gzipped CSV per GHCN-Daily station
pub const DEFAULT_ARCHIVE_URL: &str = "https://www.ncei.noaa.gov/pub/data/ghcn/daily/by_station";

/// Download directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "data/weather/compressed";

/// Suffix shared by remote and local file names
pub const STATION_FILE_SUFFIX: &str = ".csv.gz";

/// Log filter target
pub const LOG_TARGET: &str = "ghcnd_fetcher";

/// Configuration keys
pub const KEY_ARCHIVE_URL: &str = "archive_url";
pub const KEY_OUTPUT_DIR: &str = "output_dir";
pub const KEY_FAIL_ON_HTTP_ERROR: &str = "fail_on_http_error";
