use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_ARCHIVE_URL, DEFAULT_OUTPUT_DIR, KEY_ARCHIVE_URL, KEY_FAIL_ON_HTTP_ERROR,
    KEY_OUTPUT_DIR,
};
use config::Config;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for a download run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchConfig {
    /// Base URL holding `{station}.csv.gz` files
    pub archive_url: String,

    /// Existing directory that receives the downloads
    pub output_dir: PathBuf,

    /// Abort on a non-success status instead of saving the error body
    pub fail_on_http_error: bool,
}

/// Values supplied on the command line, layered over the defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub archive_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub fail_on_http_error: Option<bool>,
}

impl FetchConfig {
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let settings = Config::builder()
            .set_default(KEY_ARCHIVE_URL, DEFAULT_ARCHIVE_URL)?
            .set_default(KEY_OUTPUT_DIR, DEFAULT_OUTPUT_DIR)?
            .set_default(KEY_FAIL_ON_HTTP_ERROR, false)?
            .set_override_option(KEY_ARCHIVE_URL, overrides.archive_url)?
            .set_override_option(
                KEY_OUTPUT_DIR,
                overrides
                    .output_dir
                    .map(|dir| dir.to_string_lossy().into_owned()),
            )?
            .set_override_option(KEY_FAIL_ON_HTTP_ERROR, overrides.fail_on_http_error)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn with_archive_url(mut self, archive_url: impl Into<String>) -> Self {
        self.archive_url = archive_url.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_fail_on_http_error(mut self, fail: bool) -> Self {
        self.fail_on_http_error = fail;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fail_on_http_error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_without_overrides_matches_defaults() {
        let config = FetchConfig::load(ConfigOverrides::default()).unwrap();
        assert_eq!(config, FetchConfig::default());
        assert_eq!(
            config.archive_url,
            "https://www.ncei.noaa.gov/pub/data/ghcn/daily/by_station"
        );
        assert_eq!(config.output_dir, PathBuf::from("data/weather/compressed"));
        assert!(!config.fail_on_http_error);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let overrides = ConfigOverrides {
            archive_url: Some("http://127.0.0.1:8080/by_station".to_string()),
            output_dir: Some(PathBuf::from("/tmp/ghcnd")),
            fail_on_http_error: Some(true),
        };
        let config = FetchConfig::load(overrides).unwrap();

        assert_eq!(config.archive_url, "http://127.0.0.1:8080/by_station");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/ghcnd"));
        assert!(config.fail_on_http_error);
    }

    #[test]
    fn test_partial_overrides_keep_other_defaults() {
        let overrides = ConfigOverrides {
            output_dir: Some(PathBuf::from("downloads")),
            ..Default::default()
        };
        let config = FetchConfig::load(overrides).unwrap();

        assert_eq!(config.archive_url, DEFAULT_ARCHIVE_URL);
        assert_eq!(config.output_dir, PathBuf::from("downloads"));
        assert!(!config.fail_on_http_error);
    }

    #[test]
    fn test_builder_methods() {
        let config = FetchConfig::default()
            .with_archive_url("http://localhost/x")
            .with_output_dir("out")
            .with_fail_on_http_error(true);

        assert_eq!(config.archive_url, "http://localhost/x");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.fail_on_http_error);
    }
}
