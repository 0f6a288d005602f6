//! Natural-language unit conversion query parsing
//!
//! ```no_run
//! use unit_query_lib::{ParseResponse, QueryParser};
//!
//! let parser = QueryParser::with_builtin_catalog();
//! let response = ParseResponse::from(parser.parse("100 kg in g"));
//! println!("{}", serde_json::to_string(&response).unwrap());
//! ```

pub mod core;
pub mod shared;

pub use crate::core::context::{is_plain_number, looks_like_conversion_query};
pub use crate::core::features::unit_converter::{CategoryId, QueryParser, SiPrefixTable, UnitCatalog};
pub use crate::shared::error::{ConfigError, ParseError, ParseErrorKind};
pub use crate::shared::settings::ParserSettings;
pub use crate::shared::types::{ParseResponse, ParseResult, ParsedQuery, ValueStrategy};
