use crate::core::features::unit_converter::{CategoryId, QueryParser};
use crate::shared::types::ParsedQuery;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A rendered entry in the completion list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub enum CompletionOption {
    #[serde(rename_all = "camelCase")]
    Unit {
        category: CategoryId,
        from_unit: String,
        to_unit: String,
    },
    Category { category: CategoryId },
    #[serde(rename_all = "camelCase")]
    SiPrefix {
        from_prefix_symbol: String,
        to_prefix_symbol: String,
    },
}

/// Score how well an option matches a parsed query (0-100)
pub fn score_option(parsed: &ParsedQuery, option: &CompletionOption) -> f64 {
    match (parsed, option) {
        (
            ParsedQuery::Unit { category, from_unit, to_unit, .. },
            CompletionOption::Unit { category: c, from_unit: f, to_unit: t },
        ) => {
            if category != c {
                return 0.0;
            }
            let mut score = 40.0;
            if from_unit == f {
                score += 35.0;
            }
            if to_unit == t {
                score += 25.0;
            }
            score
        }
        (ParsedQuery::Category { category }, CompletionOption::Category { category: c }) if category == c => 100.0,
        // A category query still favours that category's unit rows
        (ParsedQuery::Category { category }, CompletionOption::Unit { category: c, .. }) if category == c => 20.0,
        (ParsedQuery::Unit { category, .. }, CompletionOption::Category { category: c }) if category == c => 10.0,
        (
            ParsedQuery::SiPrefix { from_prefix_symbol, to_prefix_symbol, .. },
            CompletionOption::SiPrefix { from_prefix_symbol: f, to_prefix_symbol: t },
        ) => {
            let mut score = 0.0;
            if from_prefix_symbol == f {
                score += 50.0;
            }
            if to_prefix_symbol == t {
                score += 50.0;
            }
            score
        }
        _ => 0.0,
    }
}

/// Sort options by score, best first; ties keep their rendered order
pub fn rank_options<T>(
    options: Vec<T>,
    parsed: &ParsedQuery,
    get_option: impl Fn(&T) -> CompletionOption,
) -> Vec<T> {
    let mut scored: Vec<(T, f64)> = options
        .into_iter()
        .map(|item| {
            let score = score_option(parsed, &get_option(&item));
            (item, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(item, _)| item).collect()
}

/// Option to auto-select, if any scores above zero
pub fn best_match<'a>(parsed: &ParsedQuery, options: &'a [CompletionOption]) -> Option<&'a CompletionOption> {
    let mut best: Option<(&CompletionOption, f64)> = None;
    for option in options {
        let score = score_option(parsed, option);
        if score > 0.0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((option, score));
        }
    }
    best.map(|(option, _)| option)
}

/// Parse completion text and rank options against it
///
/// Options come back unchanged when the text does not parse.
pub fn rank_for_query<T>(
    parser: &QueryParser,
    query: &str,
    options: Vec<T>,
    get_option: impl Fn(&T) -> CompletionOption,
) -> Vec<T> {
    match parser.parse_interactive(query) {
        Ok(parsed) => rank_options(options, &parsed, get_option),
        Err(_) => options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::ValueStrategy;

    fn unit_option(category: CategoryId, from: &str, to: &str) -> CompletionOption {
        CompletionOption::Unit {
            category,
            from_unit: from.to_string(),
            to_unit: to.to_string(),
        }
    }

    fn kg_to_g() -> ParsedQuery {
        ParsedQuery::Unit {
            value: 1.0,
            from_unit: "kg".into(),
            to_unit: "g".into(),
            category: CategoryId::Mass,
            value_strategy: ValueStrategy::ForceDefault,
        }
    }

    #[test]
    fn test_scores() {
        let parsed = kg_to_g();
        assert_eq!(score_option(&parsed, &unit_option(CategoryId::Mass, "kg", "g")), 100.0);
        assert_eq!(score_option(&parsed, &unit_option(CategoryId::Mass, "kg", "lb")), 75.0);
        assert_eq!(score_option(&parsed, &unit_option(CategoryId::Mass, "lb", "oz")), 40.0);
        assert_eq!(score_option(&parsed, &unit_option(CategoryId::Length, "m", "ft")), 0.0);
        assert_eq!(score_option(&parsed, &CompletionOption::Category { category: CategoryId::Mass }), 10.0);
    }

    #[test]
    fn test_ranking_is_stable() {
        let options = vec![
            ("length", unit_option(CategoryId::Length, "m", "ft")),
            ("mass-a", unit_option(CategoryId::Mass, "lb", "oz")),
            ("exact", unit_option(CategoryId::Mass, "kg", "g")),
            ("mass-b", unit_option(CategoryId::Mass, "st", "kg")),
        ];
        let ranked = rank_options(options, &kg_to_g(), |(_, option)| option.clone());
        let ids: Vec<&str> = ranked.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["exact", "mass-a", "mass-b", "length"]);
    }

    #[test]
    fn test_best_match() {
        let options = vec![
            CompletionOption::Category { category: CategoryId::Time },
            unit_option(CategoryId::Time, "s", "ms"),
        ];
        let time = ParsedQuery::Category { category: CategoryId::Time };
        assert_eq!(best_match(&time, &options), Some(&options[0]));
        assert_eq!(best_match(&kg_to_g(), &options), None);
    }

    #[test]
    fn test_rank_for_query() {
        let parser = QueryParser::with_builtin_catalog();
        let options = vec![
            unit_option(CategoryId::Length, "m", "ft"),
            unit_option(CategoryId::Mass, "kg", "g"),
        ];
        let ranked = rank_for_query(&parser, "100kg in g", options.clone(), |o| o.clone());
        assert_eq!(ranked[0], options[1]);

        let unchanged = rank_for_query(&parser, "not a query", options.clone(), |o| o.clone());
        assert_eq!(unchanged, options);
    }

    #[test]
    fn test_option_wire_shape() {
        let value = serde_json::to_value(unit_option(CategoryId::Mass, "kg", "g")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "kind": "unit", "category": "Mass", "fromUnit": "kg", "toUnit": "g" })
        );
    }
}
