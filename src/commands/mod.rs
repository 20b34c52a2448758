//! Command implementations for the `families` inspection tool

pub mod inspect;

pub use inspect::{FamilySummary, PartitionSummary, pick_from_largest, summarize};
