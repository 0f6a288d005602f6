//! SI prefix table for the `si` directive

use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/query.ts")]
pub struct SiPrefix {
    pub name: String,
    pub symbol: String,
    /// Power of ten, e.g. 3 for kilo
    pub exponent: i32,
    #[serde(skip)]
    #[ts(skip)]
    pub aliases: Vec<String>,
}

impl SiPrefix {
    pub fn factor(&self) -> f64 {
        10f64.powi(self.exponent)
    }
}

const BUILTIN: &[(&str, &str, i32, &[&str])] = &[
    ("yotta", "Y", 24, &[]),
    ("zetta", "Z", 21, &[]),
    ("exa", "E", 18, &[]),
    ("peta", "P", 15, &[]),
    ("tera", "T", 12, &[]),
    ("giga", "G", 9, &[]),
    ("mega", "M", 6, &[]),
    ("kilo", "k", 3, &[]),
    ("hecto", "h", 2, &[]),
    ("deca", "da", 1, &["deka"]),
    ("deci", "d", -1, &[]),
    ("centi", "c", -2, &[]),
    ("milli", "m", -3, &[]),
    ("micro", "µ", -6, &["μ", "u", "mc", "mu"]),
    ("nano", "n", -9, &[]),
    ("pico", "p", -12, &[]),
    ("femto", "f", -15, &[]),
    ("atto", "a", -18, &[]),
    ("zepto", "z", -21, &[]),
    ("yocto", "y", -24, &[]),
];

#[derive(Debug, Clone)]
pub struct SiPrefixTable {
    prefixes: Vec<SiPrefix>,
}

impl SiPrefixTable {
    pub fn builtin() -> Self {
        let prefixes = BUILTIN
            .iter()
            .map(|(name, symbol, exponent, aliases)| SiPrefix {
                name: name.to_string(),
                symbol: symbol.to_string(),
                exponent: *exponent,
                aliases: aliases.iter().map(|a| a.to_string()).collect(),
            })
            .collect();
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[SiPrefix] {
        &self.prefixes
    }

    pub fn multiples(&self) -> impl Iterator<Item = &SiPrefix> {
        self.prefixes.iter().filter(|p| p.exponent > 0)
    }

    pub fn submultiples(&self) -> impl Iterator<Item = &SiPrefix> {
        self.prefixes.iter().filter(|p| p.exponent < 0)
    }

    /// Match a prefix token exactly: symbol case-sensitively, then name,
    /// aliases and symbol case-folded. A trailing hyphen ("kilo-") is ignored.
    pub fn resolve(&self, token: &str) -> Option<&SiPrefix> {
        let token = token.trim();
        let token = token.strip_suffix('-').unwrap_or(token).trim();
        if token.is_empty() {
            return None;
        }

        if let Some(prefix) = self.prefixes.iter().find(|p| p.symbol == token) {
            return Some(prefix);
        }

        let folded = token.to_lowercase();
        self.prefixes.iter().find(|p| {
            p.name == folded
                || p.aliases.iter().any(|a| *a == folded)
                || p.symbol.to_lowercase() == folded
        })
    }
}

impl Default for SiPrefixTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(table: &SiPrefixTable, token: &str) -> Option<String> {
        table.resolve(token).map(|p| p.symbol.clone())
    }

    #[test]
    fn test_names_and_symbols() {
        let table = SiPrefixTable::builtin();
        assert_eq!(symbol(&table, "kilo"), Some("k".into()));
        assert_eq!(symbol(&table, "Milli"), Some("m".into()));
        assert_eq!(symbol(&table, "micro"), Some("µ".into()));
        assert_eq!(symbol(&table, "u"), Some("µ".into()));
        assert_eq!(symbol(&table, "deka"), Some("da".into()));
        assert_eq!(symbol(&table, "kilo-"), Some("k".into()));
    }

    #[test]
    fn test_symbol_case_is_significant() {
        let table = SiPrefixTable::builtin();
        assert_eq!(symbol(&table, "M"), Some("M".into()));
        assert_eq!(symbol(&table, "m"), Some("m".into()));
        assert_eq!(symbol(&table, "P"), Some("P".into()));
        assert_eq!(symbol(&table, "p"), Some("p".into()));
        // No uppercase kilo symbol; falls back to the folded match
        assert_eq!(symbol(&table, "K"), Some("k".into()));
    }

    #[test]
    fn test_no_partial_matches() {
        let table = SiPrefixTable::builtin();
        assert!(table.resolve("kil").is_none());
        assert!(table.resolve("kilogram").is_none());
        assert!(table.resolve("").is_none());
        assert!(table.resolve("-").is_none());
    }

    #[test]
    fn test_multiples_and_submultiples() {
        let table = SiPrefixTable::builtin();
        assert_eq!(table.multiples().count(), 10);
        assert_eq!(table.submultiples().count(), 10);
        assert_eq!(table.resolve("kilo").unwrap().factor(), 1000.0);
        assert!((table.resolve("milli").unwrap().factor() - 0.001).abs() < 1e-15);
    }
}
