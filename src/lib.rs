//! Word Families
//!
//! Partitions equal-length words into families that reveal a letter in the
//! same positions. This is the bookkeeping behind an adversarial hangman
//! player: group the candidates by how a guessed letter would show up, then
//! keep the largest group.
//!
//! # Quick Start
//!
//! ```rust
//! use word_families::core::FamilyConfig;
//! use word_families::family::FamilyList;
//!
//! let config = FamilyConfig::with_seed(8, 1).unwrap();
//! let words = ["abac", "abab", "bbbb", "cada"];
//!
//! let families = FamilyList::build(&words, 'a', &config);
//! let largest = families.largest().unwrap();
//! assert_eq!(largest.signature().as_str(), "a-a-");
//!
//! // Narrow the candidates for the next round
//! let next_round = largest.extract_word_list();
//! families.destroy();
//! assert_eq!(next_round, ["abac", "abab"]);
//! ```

// Core domain types
pub mod core;

// Families and the partition builder
pub mod family;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
