//! Error taxonomy for query parsing and configuration
//!
//! `ParseError` covers bad user input and is always returned as a value.
//! `ConfigError` covers broken catalogs and settings, which are
//! programming or deployment bugs and should stop the composition root.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Recoverable, user-facing parse failures
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ParseError {
    #[error("Empty query")]
    EmptyQuery,

    /// No connector and the text is neither a category nor a unit
    #[error("Could not resolve \"{text}\"; expected \"<from> to <to>\"")]
    MissingConnector { text: String, suggestions: Vec<String> },

    /// A connector was found but one side of it is empty
    #[error("Missing unit information")]
    MissingUnitInformation,

    #[error("Unrecognized unit: {text}")]
    UnrecognizedUnit { text: String, suggestions: Vec<String> },

    #[error("Units do not share a category ({from} vs {to})")]
    CategoryMismatch { from: String, to: String },

    #[error("Unrecognized SI prefix: {text}")]
    UnrecognizedPrefix { text: String },
}

/// Stable tag for each `ParseError` variant, used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub enum ParseErrorKind {
    EmptyQuery,
    MissingConnector,
    MissingUnitInformation,
    UnrecognizedUnit,
    CategoryMismatch,
    UnrecognizedPrefix,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyQuery => ParseErrorKind::EmptyQuery,
            ParseError::MissingConnector { .. } => ParseErrorKind::MissingConnector,
            ParseError::MissingUnitInformation => ParseErrorKind::MissingUnitInformation,
            ParseError::UnrecognizedUnit { .. } => ParseErrorKind::UnrecognizedUnit,
            ParseError::CategoryMismatch { .. } => ParseErrorKind::CategoryMismatch,
            ParseError::UnrecognizedPrefix { .. } => ParseErrorKind::UnrecognizedPrefix,
        }
    }

    /// Correction candidates, when the variant carries any
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            ParseError::MissingConnector { suggestions, .. }
            | ParseError::UnrecognizedUnit { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

/// Configuration errors raised while loading settings or a unit catalog
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to determine config directory")]
    NoConfigDir,

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ParseError::EmptyQuery.to_string(), "Empty query");
        assert_eq!(
            ParseError::CategoryMismatch { from: "Mass".into(), to: "Length".into() }.to_string(),
            "Units do not share a category (Mass vs Length)"
        );
        assert_eq!(
            ParseError::UnrecognizedPrefix { text: "kilp".into() }.to_string(),
            "Unrecognized SI prefix: kilp"
        );
    }

    #[test]
    fn test_suggestions_only_on_lookup_failures() {
        let err = ParseError::UnrecognizedUnit { text: "kgg".into(), suggestions: vec!["kg".into()] };
        assert_eq!(err.suggestions(), Some(&["kg".to_string()][..]));
        assert_eq!(err.kind(), ParseErrorKind::UnrecognizedUnit);
        assert!(ParseError::MissingUnitInformation.suggestions().is_none());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let value = serde_json::to_value(ParseErrorKind::MissingUnitInformation).unwrap();
        assert_eq!(value, serde_json::json!("missing-unit-information"));
    }
}
