use crate::core::features::unit_converter::normalize::{normalize_for_completion, split_leading_number};
use regex::Regex;
use std::sync::OnceLock;

// Completion input is short; anything longer is not a conversion query
const MAX_INPUT_LENGTH: usize = 1000;

/// True when the text is only a number once normalized ("42", "1,000", "-3.5e2")
///
/// Bare numbers are plain numeric input, not unit queries; callers should
/// not hand them to the parser.
pub fn is_plain_number(text: &str) -> bool {
    let normalized = normalize_for_completion(text);
    matches!(split_leading_number(&normalized), Some((_, rest)) if rest.trim().is_empty())
}

/// Cheap shape check run before parsing on every keystroke
///
/// Accepts a leading value, an `si` directive, a connector between two
/// words, or a single word ("atm", "time"). Multi-word category phrases
/// such as "fuel economy" are left to the parser.
pub fn looks_like_conversion_query(text: &str) -> bool {
    if text.len() > MAX_INPUT_LENGTH {
        return false;
    }

    let normalized = normalize_for_completion(text);
    if normalized.is_empty() || is_plain_number(&normalized) {
        return false;
    }

    static QUERY_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = QUERY_REGEX.get_or_init(|| {
        Regex::new(r"^(?:[+-]?\d+(?:\.\d+)?(?:e[+-]?\d+)?\s+\S|si(?:\s|$)|\S.*\s(?:to|into|in)\s+\S|[^\s\d]\S*$)")
            .expect("valid conversion query regex")
    });
    re.is_match(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert!(is_plain_number("42"));
        assert!(is_plain_number(" 1,000 "));
        assert!(is_plain_number("-3.5e2"));
        assert!(!is_plain_number("42 kg"));
        assert!(!is_plain_number("kg"));
        assert!(!is_plain_number(""));
    }

    #[test]
    fn test_conversion_shapes() {
        assert!(looks_like_conversion_query("100kg"));
        assert!(looks_like_conversion_query("5 ft to m"));
        assert!(looks_like_conversion_query("kPa in atm"));
        assert!(looks_like_conversion_query("SI 5 kilo to milli"));
        assert!(looks_like_conversion_query("convert 3 miles"));
    }

    #[test]
    fn test_single_word_queries() {
        assert!(looks_like_conversion_query("atm"));
        assert!(looks_like_conversion_query("kPa"));
        assert!(looks_like_conversion_query("time"));
        assert!(looks_like_conversion_query(" °C "));
    }

    #[test]
    fn test_non_conversion_text() {
        assert!(!looks_like_conversion_query("42"));
        assert!(!looks_like_conversion_query("hello world"));
        assert!(!looks_like_conversion_query("please"));
        assert!(!looks_like_conversion_query("good morning"));
        assert!(!looks_like_conversion_query(&"5 kg ".repeat(300)));
    }
}
