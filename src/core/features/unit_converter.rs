//! Natural-language unit conversion queries
//!
//! `QueryParser` is the entry point. It owns the unit catalog and builds
//! the alias and category indexes lazily on first use.

pub mod aliases;
pub mod catalog;
pub mod category;
pub mod normalize;
pub mod parser;
pub mod rules;
pub mod si_prefix;


pub use aliases::{AliasEntry, AliasIndex};
pub use catalog::{Category, CategoryId, Unit, UnitCatalog, UnitKind};
pub use category::CategoryIndex;
pub use normalize::{normalize, normalize_for_completion};
pub use parser::QueryParser;
pub use si_prefix::{SiPrefix, SiPrefixTable};
