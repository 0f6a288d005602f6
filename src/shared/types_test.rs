//! Wire shapes of parse responses
//! TypeScript bindings: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::core::features::unit_converter::{CategoryId, QueryParser};
    use crate::shared::error::{ParseError, ParseErrorKind};
    use crate::shared::types::*;
    use serde_json::json;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        ValueStrategy::export().expect("Failed to export ValueStrategy");
        ParsedQuery::export().expect("Failed to export ParsedQuery");
        FailureResponse::export().expect("Failed to export FailureResponse");
        ParseErrorKind::export().expect("Failed to export ParseErrorKind");
    }

    #[test]
    fn failure_binding_marks_suggestions_optional() {
        let decl = FailureResponse::decl();
        assert!(decl.contains("suggestions?:"), "{}", decl);
        assert!(decl.contains("errorMessage: string"), "{}", decl);
    }

    #[test]
    fn unit_success_shape() {
        let parser = QueryParser::with_builtin_catalog();
        let response = ParseResponse::from(parser.parse("100 kg in g"));
        assert!(response.is_ok());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "ok": true,
                "kind": "unit",
                "value": 100.0,
                "fromUnit": "kg",
                "toUnit": "g",
                "category": "Mass",
                "valueStrategy": "explicit"
            })
        );
    }

    #[test]
    fn category_and_si_shapes() {
        let parser = QueryParser::with_builtin_catalog();
        assert_eq!(
            serde_json::to_value(ParseResponse::from(parser.parse("fuel economy"))).unwrap(),
            json!({ "ok": true, "kind": "category", "category": "Fuel Economy" })
        );
        assert_eq!(
            serde_json::to_value(ParseResponse::from(parser.parse("si micro to milli"))).unwrap(),
            json!({
                "ok": true,
                "kind": "si-prefix",
                "value": 1.0,
                "fromPrefixSymbol": "µ",
                "toPrefixSymbol": "m",
                "inputText": "si micro to milli"
            })
        );
    }

    #[test]
    fn failure_shape() {
        let response = ParseResponse::from(ParseResult::Err(ParseError::CategoryMismatch {
            from: "Mass".into(),
            to: "Length".into(),
        }));
        assert!(!response.is_ok());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "ok": false,
                "errorKind": "category-mismatch",
                "errorMessage": "Units do not share a category (Mass vs Length)"
            })
        );
    }

    #[test]
    fn failure_carries_suggestions() {
        let response = ParseResponse::from(ParseResult::Err(ParseError::UnrecognizedUnit {
            text: "kgg".into(),
            suggestions: vec!["kg".into(), "kgs".into()],
        }));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["errorKind"], json!("unrecognized-unit"));
        assert_eq!(value["suggestions"], json!(["kg", "kgs"]));
    }

    #[test]
    fn response_reads_back() {
        let json = r#"{ "ok": true, "kind": "category", "category": "Time" }"#;
        let response: ParseResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.query(), Some(&ParsedQuery::Category { category: CategoryId::Time }));

        let json = r#"{ "ok": false, "errorKind": "empty-query", "errorMessage": "Empty query" }"#;
        let response: ParseResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response,
            ParseResponse::Failure(FailureResponse { error_kind: ParseErrorKind::EmptyQuery, suggestions: None, .. })
        ));
    }
}
