pub mod context;
pub mod features;
