//! Query normalization
//!
//! Each step is a small standalone pass so the tricky boundaries
//! (thousands separators, arrows, scientific notation) can be tested in
//! isolation. Numeric content is never removed.

use once_cell::sync::Lazy;
use regex::Regex;

// Longer phrases first: the regex engine takes the leftmost-first alternative.
static FILLER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:how much is|how much|how many|the value of|value of|value|amount of|amount|what is|what's|whats|calculate|calc|convert|please|me|for)\b",
    )
    .expect("Failed to compile filler phrase pattern")
});

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?").expect("Failed to compile number pattern")
});

/// Canonical normalized form: all steps, lowercased
pub fn normalize(raw: &str) -> String {
    normalize_preserving_case(raw, false).to_lowercase()
}

/// Variant used by interactive completion: also splits `100kg` into `100 kg`
pub fn normalize_for_completion(raw: &str) -> String {
    normalize_preserving_case(raw, true).to_lowercase()
}

/// Every normalization step except lowercasing
///
/// The parser works on this form so case-sensitive symbols (`MB` vs `Mb`)
/// can still be told apart; connector and alias matching fold case per token.
pub fn normalize_preserving_case(raw: &str, split_runs: bool) -> String {
    let text = strip_thousands_separators(raw);
    let text = rewrite_arrows(&text);
    let text = strip_filler_phrases(&text);
    let text = if split_runs { split_digit_letter_runs(&text) } else { text };
    collapse_whitespace(&text)
}

/// Remove commas that sit between a digit and a group of exactly three digits
pub fn strip_thousands_separators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ',' && is_thousands_comma(&chars, i) {
            continue;
        }
        out.push(c);
    }
    out
}

fn is_thousands_comma(chars: &[char], i: usize) -> bool {
    let digit_before = i > 0 && chars[i - 1].is_ascii_digit();
    let group = chars.get(i + 1..i + 4).map_or(false, |g| g.iter().all(|c| c.is_ascii_digit()));
    let group_ends = chars.get(i + 4).map_or(true, |c| !c.is_ascii_digit());
    digit_before && group && group_ends
}

/// Rewrite `→`, `➔`, `->`, `=>` and `=` into a ` to ` connector
pub fn rewrite_arrows(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '→' | '➔' => out.push_str(" to "),
            '-' | '=' if chars.peek() == Some(&'>') => {
                chars.next();
                out.push_str(" to ");
            }
            '=' => out.push_str(" to "),
            _ => out.push(c),
        }
    }
    out
}

/// Drop filler words and phrases such as "convert", "please", "how many"
pub fn strip_filler_phrases(text: &str) -> String {
    FILLER_RE.replace_all(text, " ").into_owned()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Insert a space at every digit/letter boundary, except inside a
/// scientific-notation exponent (`1.5e3`, `2E-4`)
pub fn split_digit_letter_runs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);
    let mut in_exponent = false;

    for (i, &c) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };

        if in_exponent && !(c.is_ascii_digit() || c == '+' || c == '-') {
            in_exponent = false;
        }

        if let Some(p) = prev {
            if p.is_ascii_digit() && c.is_alphabetic() {
                if (c == 'e' || c == 'E') && starts_exponent(&chars, i) {
                    in_exponent = true;
                    out.push(c);
                    continue;
                }
                out.push(' ');
            } else if p.is_alphabetic() && c.is_ascii_digit() && !in_exponent {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}

/// Undo [`split_digit_letter_runs`] inside a unit phrase: "km 2" -> "km2"
pub fn join_digit_letter_runs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' && i > 0 {
            if let (Some(&p), Some(&n)) = (chars.get(i - 1), chars.get(i + 1)) {
                let joins = (p.is_alphabetic() && n.is_ascii_digit()) || (p.is_ascii_digit() && n.is_alphabetic());
                if joins {
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

fn starts_exponent(chars: &[char], e_index: usize) -> bool {
    match chars.get(e_index + 1) {
        Some(d) if d.is_ascii_digit() => true,
        Some('+') | Some('-') => chars.get(e_index + 2).map_or(false, |d| d.is_ascii_digit()),
        _ => false,
    }
}

/// Split a leading numeric literal off `text`
///
/// Returns the parsed value and the remaining text (untrimmed), or `None`
/// when the text does not start with a finite number.
pub fn split_leading_number(text: &str) -> Option<(f64, &str)> {
    let m = NUMBER_RE.find(text)?;
    let value = m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((value, &text[m.end()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separators() {
        assert_eq!(strip_thousands_separators("1,000,000 g to kg"), "1000000 g to kg");
        assert_eq!(strip_thousands_separators("1,5 kg"), "1,5 kg");
        assert_eq!(strip_thousands_separators("12,3456"), "12,3456");
        assert_eq!(strip_thousands_separators("kg, g"), "kg, g");
    }

    #[test]
    fn test_arrows() {
        assert_eq!(collapse_whitespace(&rewrite_arrows("5kg→g")), "5kg to g");
        assert_eq!(collapse_whitespace(&rewrite_arrows("5 kg ➔ g")), "5 kg to g");
        assert_eq!(collapse_whitespace(&rewrite_arrows("5 kg -> g")), "5 kg to g");
        assert_eq!(collapse_whitespace(&rewrite_arrows("5 kg => g")), "5 kg to g");
        assert_eq!(collapse_whitespace(&rewrite_arrows("5 kg = g")), "5 kg to g");
        // A leading minus sign is not an arrow
        assert_eq!(rewrite_arrows("-40 °C"), "-40 °C");
    }

    #[test]
    fn test_filler_phrases() {
        assert_eq!(normalize("Convert 5 kg to g please"), "5 kg to g");
        assert_eq!(normalize("How many grams in a kilo"), "grams in a kilo");
        assert_eq!(normalize("what's the value of 3 ft in m"), "3 ft in m");
        assert_eq!(normalize("calc me 2 mi for km"), "2 mi km");
    }

    #[test]
    fn test_filler_respects_word_boundaries() {
        // "me" inside "meter" and "for" inside "fortnight" stay intact
        assert_eq!(normalize("5 meters to feet"), "5 meters to feet");
        assert_eq!(normalize("fortnight"), "fortnight");
        assert_eq!(normalize("amounts"), "amounts");
    }

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  100   KG   in  G "), "100 kg in g");
        assert_eq!(normalize_preserving_case("100 MB  to Mb", false), "100 MB to Mb");
    }

    #[test]
    fn test_digit_letter_split() {
        assert_eq!(split_digit_letter_runs("100kg"), "100 kg");
        assert_eq!(split_digit_letter_runs("kg100"), "kg 100");
        assert_eq!(split_digit_letter_runs("1.5e3"), "1.5e3");
        assert_eq!(split_digit_letter_runs("2E-4m"), "2E-4 m");
        assert_eq!(split_digit_letter_runs("1.5e3kg"), "1.5e3 kg");
        assert_eq!(split_digit_letter_runs("5em"), "5 em");
        assert_eq!(normalize_for_completion("100kg in g"), "100 kg in g");
        assert_eq!(normalize("100kg in g"), "100kg in g");
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(split_leading_number("100 kg"), Some((100.0, " kg")));
        assert_eq!(split_leading_number("-40 °C"), Some((-40.0, " °C")));
        assert_eq!(split_leading_number("1.5e3kg"), Some((1500.0, "kg")));
        assert_eq!(split_leading_number("2e"), Some((2.0, "e")));
        assert_eq!(split_leading_number("kg 100"), None);
        assert_eq!(split_leading_number(".5 kg"), None);
    }

    #[test]
    fn test_overflowing_number_is_not_a_value() {
        assert_eq!(split_leading_number("1e400 kg"), None);
        assert_eq!(split_leading_number("-1e400 kg"), None);
        assert_eq!(split_leading_number("1e300 kg"), Some((1e300, " kg")));
    }

    #[test]
    fn test_digit_letter_join() {
        assert_eq!(join_digit_letter_runs("km 2"), "km2");
        assert_eq!(join_digit_letter_runs("L/100 km"), "L/100km");
        assert_eq!(join_digit_letter_runs(&split_digit_letter_runs("cm3")), "cm3");
        assert_eq!(join_digit_letter_runs("imp gal"), "imp gal");
    }
}
