//! Word families and the partition builder
//!
//! A [`Family`] groups the words that reveal a letter in the same positions.
//! A [`FamilyList`] is every family for one letter over one word list.

mod list;
mod record;

pub use list::FamilyList;
pub use record::Family;
