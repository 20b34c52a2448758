//! Inspection commands
//!
//! Turns a built family list into plain result structs for the output layer.

use crate::core::FamilyError;
use crate::family::FamilyList;
use rand::Rng;

/// Overview of one partition
pub struct PartitionSummary {
    pub letter: char,
    pub word_length: usize,
    pub total_words: usize,
    pub families: Vec<FamilySummary>,
}

/// One row of a partition overview
pub struct FamilySummary {
    pub signature: String,
    pub count: usize,
    /// The letter appears nowhere in the family's words
    pub is_blank: bool,
    pub is_largest: bool,
}

/// Summarize every family in list order
#[must_use]
pub fn summarize(list: &FamilyList<'_>) -> PartitionSummary {
    let largest = list.largest().map(|family| family.signature().clone());

    let families = list
        .iter()
        .map(|family| FamilySummary {
            signature: family.signature().to_string(),
            count: family.count(),
            is_blank: family.signature().is_blank(),
            is_largest: largest.as_ref() == Some(family.signature()),
        })
        .collect();

    PartitionSummary {
        letter: list.letter(),
        word_length: list.word_length(),
        total_words: list.total_words(),
        families,
    }
}

/// Draw `count` random words, with replacement, from the largest family
///
/// # Errors
///
/// Returns `FamilyError::NoFamilies` if the list has no families.
pub fn pick_from_largest<'a, R: Rng + ?Sized>(
    list: &FamilyList<'a>,
    rng: &mut R,
    count: usize,
) -> Result<Vec<&'a str>, FamilyError> {
    let largest = list.largest().ok_or(FamilyError::NoFamilies)?;
    (0..count)
        .map(|_| largest.try_pick_random_word(rng))
        .collect()
}
