//! Category name lookup
//!
//! A query like "time" or "fuel economy conversions" names a category
//! rather than a unit. Exact names are checked first; otherwise every
//! significant word of the query must belong to one category's keyword set.

use super::catalog::{CategoryId, UnitCatalog};
use super::rules::rules_for;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Words that carry no category meaning ("length units", "time converter")
const GENERIC_WORDS: &[&str] = &[
    "conversion",
    "conversions",
    "convert",
    "converter",
    "converters",
    "unit",
    "units",
    "calculator",
    "measurement",
    "measurements",
    "measure",
    "chart",
    "table",
];

#[derive(Debug)]
pub struct CategoryIndex {
    exact: HashMap<String, CategoryId>,
    keywords: Vec<(CategoryId, HashSet<String>)>,
}

impl CategoryIndex {
    pub fn build(catalog: &UnitCatalog) -> Self {
        let mut exact = HashMap::new();
        let mut keywords = Vec::new();

        for category in catalog.categories() {
            let id = category.id;
            let name = id.name().to_lowercase();

            for variant in name_variants(&name) {
                exact.entry(variant).or_insert(id);
            }

            let mut set: HashSet<String> = rules_for(id).keywords.iter().map(|k| k.to_string()).collect();
            set.extend(name.unicode_words().map(str::to_string));
            keywords.push((id, set));
        }

        Self { exact, keywords }
    }

    pub fn resolve(&self, text: &str) -> Option<CategoryId> {
        let key = text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ");
        if let Some(id) = self.exact.get(&key) {
            return Some(*id);
        }

        let tokens: Vec<&str> = key
            .unicode_words()
            .filter(|w| !GENERIC_WORDS.contains(w))
            .collect();
        if tokens.is_empty() {
            return None;
        }

        self.keywords
            .iter()
            .find(|(_, set)| tokens.iter().all(|t| keyword_matches(set, t)))
            .map(|(id, _)| *id)
    }
}

fn keyword_matches(set: &HashSet<String>, token: &str) -> bool {
    set.contains(token) || token.strip_suffix('s').map_or(false, |stem| !stem.is_empty() && set.contains(stem))
}

fn name_variants(name: &str) -> Vec<String> {
    let mut variants = vec![name.to_string()];
    if !name.ends_with('s') {
        variants.push(format!("{}s", name));
    }
    if name.contains(' ') {
        variants.push(name.replace(' ', "-"));
        variants.push(name.replace(' ', ""));
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CategoryIndex {
        CategoryIndex::build(&UnitCatalog::builtin())
    }

    #[test]
    fn test_exact_names() {
        let index = index();
        assert_eq!(index.resolve("time"), Some(CategoryId::Time));
        assert_eq!(index.resolve("Temperature"), Some(CategoryId::Temperature));
        assert_eq!(index.resolve("fuel economy"), Some(CategoryId::FuelEconomy));
        assert_eq!(index.resolve("fuel-economy"), Some(CategoryId::FuelEconomy));
        assert_eq!(index.resolve("lengths"), Some(CategoryId::Length));
    }

    #[test]
    fn test_keywords_and_trailing_words() {
        let index = index();
        assert_eq!(index.resolve("time conversions"), Some(CategoryId::Time));
        assert_eq!(index.resolve("weight converter"), Some(CategoryId::Mass));
        assert_eq!(index.resolve("distance units"), Some(CategoryId::Length));
        assert_eq!(index.resolve("file size"), Some(CategoryId::Data));
        assert_eq!(index.resolve("fuel consumption"), Some(CategoryId::FuelEconomy));
        assert_eq!(index.resolve("temp"), Some(CategoryId::Temperature));
    }

    #[test]
    fn test_non_categories() {
        let index = index();
        assert_eq!(index.resolve("kg"), None);
        assert_eq!(index.resolve("units"), None);
        assert_eq!(index.resolve("time kg"), None);
        assert_eq!(index.resolve(""), None);
    }
}
