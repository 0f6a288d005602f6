//! Query features
//!
//! Each feature lives in its own module tree; the unit converter is the
//! only one today.

pub mod unit_converter;

pub use unit_converter::QueryParser;
