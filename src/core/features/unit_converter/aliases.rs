//! Alias index: every string a user might type for a unit
//!
//! Built once from the catalog. Keys are case-folded and
//! whitespace-collapsed; each key maps to the entries that registered it,
//! in catalog order. Lookups return the first entry, so an alias shared by
//! two units always resolves to the one registered first.

use super::catalog::{CategoryId, Unit, UnitCatalog};
use super::rules::{rules_for, CategoryRules};
use std::collections::{BTreeMap, HashMap};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub symbol: String,
    pub category: CategoryId,
}

#[derive(Debug, Default)]
pub struct AliasIndex {
    entries: BTreeMap<String, Vec<AliasEntry>>,
    // Case-sensitive symbol tier, consulted before the folded keys
    symbols: HashMap<String, AliasEntry>,
}

impl AliasIndex {
    pub fn build(catalog: &UnitCatalog) -> Self {
        let mut index = Self::default();

        for (category, unit) in catalog.units() {
            let entry = AliasEntry {
                symbol: unit.symbol.clone(),
                category,
            };
            index
                .symbols
                .entry(unit.symbol.clone())
                .or_insert_with(|| entry.clone());

            for alias in unit_aliases(unit, rules_for(category)) {
                index.register(&alias, &entry);
            }
        }

        info!(
            units = catalog.unit_count(),
            aliases = index.entries.len(),
            "Built unit alias index"
        );
        index
    }

    fn register(&mut self, alias: &str, entry: &AliasEntry) {
        let key = alias_key(alias);
        if key.is_empty() {
            return;
        }
        let slot = self.entries.entry(key).or_default();
        if !slot.contains(entry) {
            slot.push(entry.clone());
        }
    }

    /// Resolve user text to a unit: exact symbol first, then folded aliases
    pub fn lookup(&self, text: &str) -> Option<&AliasEntry> {
        let trimmed = text.trim();
        if let Some(entry) = self.symbols.get(trimmed) {
            return Some(entry);
        }

        let key = alias_key(trimmed);
        lookup_candidates(&key)
            .iter()
            .find_map(|candidate| self.entries.get(candidate))
            .and_then(|slot| slot.first())
    }

    /// All entries registered under a folded key, in registration order
    pub fn entries_for(&self, alias: &str) -> &[AliasEntry] {
        self.entries
            .get(&alias_key(alias))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Aliases sharing the first `prefix_len` characters of `text`
    pub fn suggestions(&self, text: &str, prefix_len: usize, limit: usize) -> Vec<String> {
        let key = alias_key(text);
        let prefix: String = key.chars().take(prefix_len.max(1)).collect();
        if prefix.is_empty() {
            return Vec::new();
        }

        self.entries
            .range(prefix.clone()..)
            .take_while(|(alias, _)| alias.starts_with(&prefix))
            .map(|(alias, _)| alias.clone())
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fold text into an index key
///
/// Lowercases, collapses whitespace and glues a detached degree sign to the
/// scale that follows it (`"° C"` and `"º c"` both become `"°c"`).
pub fn alias_key(text: &str) -> String {
    let folded = text.to_lowercase().replace('º', "°");
    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("° ", "°")
}

/// Alternate spellings of a key around the "per" separator
fn lookup_candidates(key: &str) -> Vec<String> {
    let mut candidates = vec![key.to_string()];
    let per_slash = key.replace(" per ", "/");
    let tight = per_slash.replace(" / ", "/").replace("/ ", "/").replace(" /", "/");
    for candidate in [per_slash, tight] {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// Every alias string a unit registers, in priority order
fn unit_aliases(unit: &Unit, rules: &CategoryRules) -> Vec<String> {
    let name = unit.display_name.to_lowercase();
    let mut base = vec![
        unit.symbol.clone(),
        unit.symbol.to_lowercase(),
        name.clone(),
        pluralize(&name),
    ];

    if let Some(stripped) = strip_parenthetical(&name) {
        base.push(pluralize(&stripped));
        base.push(stripped);
    }

    base.extend(rules.synonyms_for(&unit.symbol).iter().map(|s| s.to_string()));

    for scale in rules.degree_scales.iter().filter(|s| s.symbol == unit.symbol) {
        base.extend(degree_phrases(scale.word, scale.letter));
    }

    let mut aliases: Vec<String> = Vec::new();
    for alias in base {
        for variant in spelling_variants(&alias) {
            if !aliases.contains(&variant) {
                aliases.push(variant);
            }
        }
    }
    aliases
}

fn pluralize(name: &str) -> String {
    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{}s", name)
    }
}

/// "gallon (us)" -> "gallon"
fn strip_parenthetical(name: &str) -> Option<String> {
    if !name.contains('(') {
        return None;
    }
    let mut out = String::with_capacity(name.len());
    let mut depth = 0usize;
    for c in name.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    let stripped = out.split_whitespace().collect::<Vec<_>>().join(" ");
    if stripped.is_empty() || stripped == name {
        None
    } else {
        Some(stripped)
    }
}

/// Everyday phrasings of a degree scale: "degrees celsius", "deg. c", "°c", ...
fn degree_phrases(word: &str, letter: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    for target in [word, letter] {
        phrases.push(format!("degree {}", target));
        phrases.push(format!("degrees {}", target));
        phrases.push(format!("deg {}", target));
        phrases.push(format!("deg. {}", target));
        phrases.push(format!("°{}", target));
    }
    phrases.push(format!("deg{}", letter));
    phrases.push(format!("degs {}", letter));
    phrases
}

/// Superscript, micro-sign and hyphen/space variants of an alias
fn spelling_variants(alias: &str) -> Vec<String> {
    let mut variants = vec![alias.to_string()];

    let push = |variants: &mut Vec<String>, v: String| {
        if !variants.contains(&v) {
            variants.push(v);
        }
    };

    for (sup, ascii) in [('²', "2"), ('³', "3")] {
        let current = variants.clone();
        for v in current.iter().filter(|v| v.contains(sup)) {
            push(&mut variants, v.replace(sup, ascii));
            push(&mut variants, v.replace(sup, &format!("^{}", ascii)));
        }
    }

    let current = variants.clone();
    for v in &current {
        if v.contains('µ') {
            push(&mut variants, v.replace('µ', "μ"));
            push(&mut variants, v.replace('µ', "u"));
        } else if v.contains('μ') {
            push(&mut variants, v.replace('μ', "µ"));
            push(&mut variants, v.replace('μ', "u"));
        }
    }

    let current = variants.clone();
    for v in &current {
        if v.contains('-') {
            push(&mut variants, v.replace('-', " "));
        }
        if v.contains(' ') {
            push(&mut variants, v.replace(' ', "-"));
        }
    }

    variants
}
