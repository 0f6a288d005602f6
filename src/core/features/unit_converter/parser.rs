//! Conversion query parser
//!
//! Turns free-form text into one of three query shapes:
//!
//! - a unit pair (`"100 kg in g"`, `"kPa to atm"`)
//! - a single unit or a category (`"atm"`, `"time"`)
//! - an SI prefix directive (`"si 5 kilo to milli"`)
//!
//! The parser works on the case-preserved normalized text so that symbols
//! differing only in case stay distinguishable; connector words, the
//! directive token and alias keys are matched case-insensitively.

use super::aliases::{AliasEntry, AliasIndex};
use super::catalog::{CategoryId, UnitCatalog};
use super::category::CategoryIndex;
use super::normalize::{join_digit_letter_runs, normalize_preserving_case, split_leading_number};
use super::rules::rules_for;
use super::si_prefix::SiPrefixTable;
use crate::shared::error::{ConfigResult, ParseError};
use crate::shared::settings::ParserSettings;
use crate::shared::types::{ParseResult, ParsedQuery, ValueStrategy};
use std::sync::OnceLock;
use tracing::{debug, info};

const PAIR_CONNECTORS: &[&str] = &["to", "into"];
const WEAK_CONNECTORS: &[&str] = &["in"];
const SOURCE_MARKERS: &[&str] = &["from", "of"];
const ARTICLES: &[&str] = &["a", "an"];
const SI_DIRECTIVE: &str = "si";

/// Where the connector split a query
#[derive(Debug, PartialEq)]
enum ConnectorSplit {
    /// Every `(from, to)` reading with both sides non-empty, in connector order
    Found { splits: Vec<(String, String)> },
    /// Connector words present, but each leaves an empty side
    Dangling,
    Absent,
}

pub struct QueryParser {
    catalog: UnitCatalog,
    settings: ParserSettings,
    prefixes: SiPrefixTable,
    aliases: OnceLock<AliasIndex>,
    categories: OnceLock<CategoryIndex>,
}

impl QueryParser {
    pub fn new(catalog: UnitCatalog, settings: ParserSettings) -> Self {
        Self {
            catalog,
            settings,
            prefixes: SiPrefixTable::builtin(),
            aliases: OnceLock::new(),
            categories: OnceLock::new(),
        }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(UnitCatalog::builtin(), ParserSettings::default())
    }

    /// Build a parser from settings, loading the external catalog if one is named
    pub fn from_settings(settings: ParserSettings) -> ConfigResult<Self> {
        let catalog = match &settings.catalog_path {
            Some(path) => {
                let catalog = UnitCatalog::load_from(path)?;
                info!(path = %path.display(), units = catalog.unit_count(), "Loaded unit catalog");
                catalog
            }
            None => UnitCatalog::builtin(),
        };
        Ok(Self::new(catalog, settings))
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn si_prefixes(&self) -> &SiPrefixTable {
        &self.prefixes
    }

    /// Alias index, built on first use
    pub fn alias_index(&self) -> &AliasIndex {
        self.aliases.get_or_init(|| AliasIndex::build(&self.catalog))
    }

    pub fn category_index(&self) -> &CategoryIndex {
        self.categories.get_or_init(|| CategoryIndex::build(&self.catalog))
    }

    /// Natural conversion target for `symbol`, never `symbol` itself
    ///
    /// Uses the category's default pair when the catalog has that unit,
    /// otherwise the first other unit in catalog order.
    pub fn default_target(&self, category: CategoryId, symbol: &str) -> Option<&str> {
        let units = &self.catalog.category(category)?.units;

        if let Some(target) = rules_for(category).default_target(symbol) {
            if target != symbol && units.iter().any(|u| u.symbol == target) {
                return Some(target);
            }
            debug!(%category, symbol, target, "Default pair target not in catalog");
        }

        units
            .iter()
            .map(|u| u.symbol.as_str())
            .find(|candidate| *candidate != symbol)
    }

    pub fn parse(&self, query: &str) -> ParseResult {
        self.parse_with(query, self.settings.split_digit_letter_runs)
    }

    /// Parse text typed into a completion box, splitting `100kg` into `100 kg`
    pub fn parse_interactive(&self, query: &str) -> ParseResult {
        self.parse_with(query, true)
    }

    fn parse_with(&self, query: &str, split_runs: bool) -> ParseResult {
        let raw = query.trim();
        if raw.is_empty() {
            return Err(ParseError::EmptyQuery);
        }

        let text = normalize_preserving_case(raw, split_runs);
        if text.is_empty() {
            return Err(ParseError::EmptyQuery);
        }

        let (value, rest) = match split_leading_number(&text) {
            Some((value, rest)) => (Some(value), rest.trim()),
            None => (None, text.as_str()),
        };

        let result = match strip_directive(rest) {
            Some(directive) => self.parse_si_directive(raw, value, directive),
            None => self.parse_conversion(value, rest),
        };

        match &result {
            Ok(parsed) => debug!(query = raw, kind = parsed.kind_name(), "Parsed query"),
            Err(err) => debug!(query = raw, error = %err, "Query did not parse"),
        }
        result
    }

    fn parse_conversion(&self, value: Option<f64>, text: &str) -> ParseResult {
        if text.is_empty() {
            return Err(ParseError::MissingUnitInformation);
        }

        match split_on_connector(text) {
            ConnectorSplit::Found { splits } => self.resolve_splits(value, &splits),
            // "in" on its own is a unit, not a dangling connector
            ConnectorSplit::Dangling => self
                .resolve_single(value, text)
                .map_err(|_| ParseError::MissingUnitInformation),
            ConnectorSplit::Absent => self.resolve_single(value, text),
        }
    }

    /// First reading whose units both resolve; "sq in in cm²" needs the second `in`
    fn resolve_splits(&self, value: Option<f64>, splits: &[(String, String)]) -> ParseResult {
        let mut first_error = None;
        for (from, to) in splits {
            match self.resolve_pair(value, from, to) {
                Err(err @ ParseError::UnrecognizedUnit { .. }) => {
                    first_error.get_or_insert(err);
                }
                result => return result,
            }
        }
        Err(first_error.unwrap_or(ParseError::MissingUnitInformation))
    }

    fn resolve_pair(&self, value: Option<f64>, from: &str, to: &str) -> ParseResult {
        let (_, from_text) = strip_source_marker(from);
        let (value, from_text) = match (value, split_leading_number(from_text)) {
            (None, Some((inner, rest))) if !rest.trim().is_empty() => (Some(inner), rest.trim()),
            _ => (value, from_text),
        };
        let (_, to_text) = strip_source_marker(to);

        let source = self.lookup_unit(from_text)?;
        let target = self.lookup_unit(to_text)?;

        if source.category != target.category {
            return Err(ParseError::CategoryMismatch {
                from: source.category.to_string(),
                to: target.category.to_string(),
            });
        }

        Ok(ParsedQuery::Unit {
            value: value.unwrap_or(1.0),
            from_unit: source.symbol,
            to_unit: target.symbol,
            category: source.category,
            value_strategy: if value.is_some() {
                ValueStrategy::Explicit
            } else {
                ValueStrategy::ForceDefault
            },
        })
    }

    fn resolve_single(&self, value: Option<f64>, text: &str) -> ParseResult {
        let (marked, body) = strip_source_marker(text);
        let (value, body) = match (value, split_leading_number(body)) {
            (None, Some((inner, rest))) if marked => (Some(inner), rest.trim()),
            _ => (value, body),
        };
        if body.is_empty() {
            return Err(ParseError::MissingUnitInformation);
        }

        if let Some(category) = self.category_index().resolve(body) {
            return Ok(ParsedQuery::Category { category });
        }

        let Some(entry) = self.find_unit(body) else {
            return Err(ParseError::MissingConnector {
                text: body.to_string(),
                suggestions: self.suggestions_for(body),
            });
        };

        let to_unit = self
            .default_target(entry.category, &entry.symbol)
            .ok_or(ParseError::MissingUnitInformation)?
            .to_string();

        let value_strategy = match (value, marked) {
            (Some(_), _) => ValueStrategy::Explicit,
            (None, true) => ValueStrategy::PreserveExisting,
            (None, false) => ValueStrategy::ForceDefault,
        };

        Ok(ParsedQuery::Unit {
            value: value.unwrap_or(1.0),
            from_unit: entry.symbol.clone(),
            to_unit,
            category: entry.category,
            value_strategy,
        })
    }

    fn parse_si_directive(&self, raw: &str, leading: Option<f64>, text: &str) -> ParseResult {
        let (value, text) = match split_leading_number(text) {
            Some((value, rest)) => (Some(value), rest.trim()),
            None => (leading, text),
        };

        let (from, to) = match split_on_connector(text) {
            ConnectorSplit::Found { splits } => splits
                .into_iter()
                .next()
                .ok_or(ParseError::MissingUnitInformation)?,
            ConnectorSplit::Dangling => return Err(ParseError::MissingUnitInformation),
            ConnectorSplit::Absent if text.is_empty() => return Err(ParseError::MissingUnitInformation),
            ConnectorSplit::Absent => {
                return Err(ParseError::MissingConnector {
                    text: text.to_string(),
                    suggestions: Vec::new(),
                })
            }
        };

        let resolve = |token: &str| {
            self.prefixes
                .resolve(token)
                .map(|p| p.symbol.clone())
                .ok_or_else(|| ParseError::UnrecognizedPrefix { text: token.to_string() })
        };

        Ok(ParsedQuery::SiPrefix {
            value: value.unwrap_or(1.0),
            from_prefix_symbol: resolve(from.as_str())?,
            to_prefix_symbol: resolve(to.as_str())?,
            input_text: raw.to_string(),
        })
    }

    /// Alias lookup, retried without a leading article and with split runs rejoined
    fn find_unit(&self, text: &str) -> Option<&AliasEntry> {
        let index = self.alias_index();
        index
            .lookup(text)
            .or_else(|| strip_article(text).and_then(|t| index.lookup(t)))
            .or_else(|| {
                let joined = join_digit_letter_runs(text);
                (joined != text).then(|| index.lookup(&joined)).flatten()
            })
    }

    fn lookup_unit(&self, text: &str) -> Result<AliasEntry, ParseError> {
        self.find_unit(text).cloned().ok_or_else(|| ParseError::UnrecognizedUnit {
            text: text.to_string(),
            suggestions: self.suggestions_for(text),
        })
    }

    fn suggestions_for(&self, text: &str) -> Vec<String> {
        self.alias_index().suggestions(
            text,
            self.settings.suggestion_prefix_len,
            self.settings.suggestion_limit,
        )
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

fn first_word_is(text: &str, words: &[&str]) -> Option<usize> {
    let first = text.split_whitespace().next()?;
    words
        .iter()
        .any(|w| first.eq_ignore_ascii_case(w))
        .then_some(first.len())
}

/// Text following a leading `si` token, if the query is a directive
fn strip_directive(text: &str) -> Option<&str> {
    let len = first_word_is(text, &[SI_DIRECTIVE])?;
    Some(text[len..].trim())
}

/// Drop a leading `from`/`of`, reporting whether one was present
fn strip_source_marker(text: &str) -> (bool, &str) {
    let text = text.trim();
    match first_word_is(text, SOURCE_MARKERS) {
        Some(len) if !text[len..].trim().is_empty() => (true, text[len..].trim()),
        _ => (false, text),
    }
}

/// "a kilo" -> "kilo"
fn strip_article(text: &str) -> Option<&str> {
    let len = first_word_is(text, ARTICLES)?;
    let rest = text[len..].trim();
    (!rest.is_empty()).then_some(rest)
}

/// Every split on a connector that leaves text on both sides
///
/// `to`/`into` readings come before `in` readings, so "in to cm" reads as inches.
fn split_on_connector(text: &str) -> ConnectorSplit {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let positions = |words: &[&str]| -> Vec<usize> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| words.iter().any(|w| t.eq_ignore_ascii_case(w)))
            .map(|(i, _)| i)
            .collect()
    };

    let candidates: Vec<usize> = positions(PAIR_CONNECTORS)
        .into_iter()
        .chain(positions(WEAK_CONNECTORS))
        .collect();
    if candidates.is_empty() {
        return ConnectorSplit::Absent;
    }

    let splits: Vec<(String, String)> = candidates
        .into_iter()
        .filter(|&i| i > 0 && i + 1 < tokens.len())
        .map(|i| (tokens[..i].join(" "), tokens[i + 1..].join(" ")))
        .collect();
    if splits.is_empty() {
        ConnectorSplit::Dangling
    } else {
        ConnectorSplit::Found { splits }
    }
}
