use std::fmt;

/// GHCN-Daily station code, e.g. `USW00094728`.
///
/// Opaque: the string is carried exactly as supplied and substituted
/// verbatim into the archive URL and the output path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_id_is_not_normalised() {
        let station = StationId::from("  usw00094728 ");
        assert_eq!(station.as_str(), "  usw00094728 ");
        assert_eq!(station.to_string(), "  usw00094728 ");
    }

    #[test]
    fn test_station_id_equality() {
        assert_eq!(StationId::from("A"), StationId::new(String::from("A")));
        assert_ne!(StationId::from("A"), StationId::from("a"));
    }
}
