//! Completion-box boundary
//!
//! Helpers the UI layer calls around the parser: deciding whether typed
//! text is worth parsing, and ranking rendered completion options against
//! a parsed query.

pub mod detection;
pub mod ranking;

pub use detection::{is_plain_number, looks_like_conversion_query};
pub use ranking::{best_match, rank_for_query, rank_options, score_option, CompletionOption};
