use crate::models::StationId;
use crate::utils::constants::STATION_FILE_SUFFIX;
use std::path::{Path, PathBuf};

/// Remote file name for a station: `{station}.csv.gz`
pub fn station_file_name(station: &StationId) -> String {
    format!("{}{}", station.as_str(), STATION_FILE_SUFFIX)
}

/// Build the archive URL for a station by plain substitution.
///
/// The identifier is not escaped; a trailing `/` on the base is not doubled.
///
/// # Examples
/// ```
/// use ghcnd_fetcher::models::StationId;
/// use ghcnd_fetcher::utils::station_url;
///
/// let url = station_url("https://example.org/by_station/", &StationId::from("USW00094728"));
/// assert_eq!(url, "https://example.org/by_station/USW00094728.csv.gz");
/// ```
pub fn station_url(archive_url: &str, station: &StationId) -> String {
    format!(
        "{}/{}",
        archive_url.trim_end_matches('/'),
        station_file_name(station)
    )
}

/// Build the local download path for a station inside `output_dir`.
///
/// Plain substitution like `station_url`: an identifier starting with `/`
/// still lands under `output_dir`, unlike `Path::join`.
pub fn station_output_path(output_dir: &Path, station: &StationId) -> PathBuf {
    let mut path = output_dir.as_os_str().to_owned();
    path.push("/");
    path.push(station_file_name(station));
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{DEFAULT_ARCHIVE_URL, DEFAULT_OUTPUT_DIR};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_station_url() {
        let station = StationId::from("USW00094728");
        assert_eq!(
            station_url(DEFAULT_ARCHIVE_URL, &station),
            "https://www.ncei.noaa.gov/pub/data/ghcn/daily/by_station/USW00094728.csv.gz"
        );
    }

    #[test]
    fn test_default_output_path() {
        let station = StationId::from("ASN00086071");
        let path = station_output_path(Path::new(DEFAULT_OUTPUT_DIR), &station);
        assert_eq!(
            path,
            PathBuf::from("data/weather/compressed/ASN00086071.csv.gz")
        );
    }

    #[test]
    fn test_identifier_is_substituted_verbatim() {
        // No escaping or normalisation of the identifier
        let station = StationId::from("odd id?x");
        assert_eq!(
            station_url("http://host/base", &station),
            "http://host/base/odd id?x.csv.gz"
        );
        assert_eq!(station_file_name(&station), "odd id?x.csv.gz");
    }

    #[test]
    fn test_rooted_identifier_stays_in_output_dir() {
        let station = StationId::from("/tmp/escaped");
        let path = station_output_path(Path::new(DEFAULT_OUTPUT_DIR), &station);

        assert_eq!(
            path.as_os_str(),
            "data/weather/compressed//tmp/escaped.csv.gz"
        );
        assert!(path.starts_with(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_trailing_slash_not_doubled() {
        let station = StationId::from("A");
        assert_eq!(station_url("http://host/base/", &station), "http://host/base/A.csv.gz");
        assert_eq!(station_url("http://host/base", &station), "http://host/base/A.csv.gz");
    }
}
