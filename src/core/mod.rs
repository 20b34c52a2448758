//! Core domain types for word families
//!
//! Signatures, engine configuration and the error type. Nothing here knows
//! about families or lists; those live in [`crate::family`].

mod config;
mod error;
mod signature;

pub use config::{DEFAULT_GROWTH_INCREMENT, FamilyConfig};
pub use error::FamilyError;
pub use signature::Signature;
