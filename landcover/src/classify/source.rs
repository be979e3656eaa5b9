//! Source identifier parsing.

use std::fmt;
use thiserror::Error;

/// Separator between the category and zoom components.
pub const SOURCE_ID_DELIMITER: char = '-';

/// Errors produced when parsing a source identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceIdError {
    /// Identifier does not split into a category and a non-empty zoom component
    #[error("Malformed source identifier '{0}': expected '<category>-<zoom>'")]
    MalformedSourceIdentifier(String),
}

/// A source archive identifier split into its category and zoom codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePartitionId {
    category_code: String,
    zoom_code: String,
}

impl SourcePartitionId {
    /// Build an identifier from its two codes.
    pub fn new(category_code: impl Into<String>, zoom_code: impl Into<String>) -> Self {
        Self {
            category_code: category_code.into(),
            zoom_code: zoom_code.into(),
        }
    }

    /// Parse `"<categoryCode>-<zoomCode>"`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceIdError::MalformedSourceIdentifier`] unless the input
    /// splits into exactly two parts with a non-empty zoom code. An empty
    /// category code is kept; it classifies as an unknown category.
    pub fn parse(raw: &str) -> Result<Self, SourceIdError> {
        let malformed = || SourceIdError::MalformedSourceIdentifier(raw.to_string());

        let mut parts = raw.split(SOURCE_ID_DELIMITER);
        let category = parts.next().ok_or_else(malformed)?;
        let zoom = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self::new(category, zoom))
    }

    pub fn category_code(&self) -> &str {
        &self.category_code
    }

    pub fn zoom_code(&self) -> &str {
        &self.zoom_code
    }
}

impl fmt::Display for SourcePartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.category_code, SOURCE_ID_DELIMITER, self.zoom_code
        )
    }
}

impl std::str::FromStr for SourcePartitionId {
    type Err = SourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_identifier() {
        let id = SourcePartitionId::parse("100-7").unwrap();
        assert_eq!(id.category_code(), "100");
        assert_eq!(id.zoom_code(), "7");
    }

    #[test]
    fn test_display_round_trips_input() {
        let id: SourcePartitionId = "95-8".parse().unwrap();
        assert_eq!(id.to_string(), "95-8");
    }

    #[test]
    fn test_missing_zoom_component() {
        for raw in ["10", "10-", "", "-"] {
            let result = SourcePartitionId::parse(raw);
            assert_eq!(
                result,
                Err(SourceIdError::MalformedSourceIdentifier(raw.to_string())),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_empty_category_component() {
        let id = SourcePartitionId::parse("-3").unwrap();
        assert_eq!(id.category_code(), "");
        assert_eq!(id.zoom_code(), "3");
        assert_eq!(id.to_string(), "-3");
    }

    #[test]
    fn test_too_many_components() {
        assert!(SourcePartitionId::parse("10-0-1").is_err());
    }

    #[test]
    fn test_unknown_codes_still_parse() {
        // Table lookups decide what unknown codes mean; parsing only checks shape.
        let id = SourcePartitionId::parse("999-99").unwrap();
        assert_eq!(id.category_code(), "999");
        assert_eq!(id.zoom_code(), "99");
    }

    #[test]
    fn test_error_message_names_input() {
        let err = SourcePartitionId::parse("garbage").unwrap_err();
        assert!(err.to_string().contains("garbage"));
    }
}
