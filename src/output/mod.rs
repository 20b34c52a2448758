//! Terminal output formatting
//!
//! The plain debug dump of a family list plus a colored summary view.

pub mod display;
pub mod formatters;

pub use display::{print_families, print_summary, write_families};
