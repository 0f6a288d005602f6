use crate::core::features::unit_converter::catalog::CategoryId;
use crate::shared::error::{ParseError, ParseErrorKind};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How the UI should treat the value field of a unit query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub enum ValueStrategy {
    /// The query carried its own number
    Explicit,
    /// Keep whatever value the UI already shows
    PreserveExisting,
    /// Reset the UI value to the parsed default
    ForceDefault,
}

/// Successful parse, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub enum ParsedQuery {
    #[serde(rename_all = "camelCase")]
    Unit {
        value: f64,
        from_unit: String,
        to_unit: String,
        category: CategoryId,
        value_strategy: ValueStrategy,
    },
    Category { category: CategoryId },
    #[serde(rename_all = "camelCase")]
    SiPrefix {
        value: f64,
        from_prefix_symbol: String,
        to_prefix_symbol: String,
        input_text: String,
    },
}

impl ParsedQuery {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParsedQuery::Unit { .. } => "unit",
            ParsedQuery::Category { .. } => "category",
            ParsedQuery::SiPrefix { .. } => "si-prefix",
        }
    }

    pub fn category(&self) -> Option<CategoryId> {
        match self {
            ParsedQuery::Unit { category, .. } | ParsedQuery::Category { category } => Some(*category),
            ParsedQuery::SiPrefix { .. } => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ParsedQuery::Unit { value, .. } | ParsedQuery::SiPrefix { value, .. } => Some(*value),
            ParsedQuery::Category { .. } => None,
        }
    }

    /// `(from, to)` unit symbols for unit queries
    pub fn units(&self) -> Option<(&str, &str)> {
        match self {
            ParsedQuery::Unit { from_unit, to_unit, .. } => Some((from_unit, to_unit)),
            _ => None,
        }
    }
}

pub type ParseResult = Result<ParsedQuery, ParseError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub query: ParsedQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub struct FailureResponse {
    pub ok: bool,
    pub error_kind: ParseErrorKind,
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub suggestions: Option<Vec<String>>,
}

/// Wire form of a parse outcome
///
/// Success: `{ ok: true, kind, ...fields }`.
/// Failure: `{ ok: false, errorKind, errorMessage, suggestions? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParseResponse {
    Success(SuccessResponse),
    Failure(FailureResponse),
}

impl ParseResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseResponse::Success(_))
    }

    pub fn query(&self) -> Option<&ParsedQuery> {
        match self {
            ParseResponse::Success(success) => Some(&success.query),
            ParseResponse::Failure(_) => None,
        }
    }
}

impl From<ParseResult> for ParseResponse {
    fn from(result: ParseResult) -> Self {
        match result {
            Ok(query) => ParseResponse::Success(SuccessResponse { ok: true, query }),
            Err(err) => {
                let suggestions = err
                    .suggestions()
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_vec());
                ParseResponse::Failure(FailureResponse {
                    ok: false,
                    error_kind: err.kind(),
                    error_message: err.to_string(),
                    suggestions,
                })
            }
        }
    }
}
