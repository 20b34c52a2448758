//! Partitioning a word list into families
//!
//! [`FamilyList`] is the result of revealing one letter across a word list:
//! one [`Family`] per distinct signature, kept in the order each signature was
//! first seen. A signature index sits next to the ordered families so lookups
//! do not have to walk the list.

use super::Family;
use crate::core::{FamilyConfig, FamilyError, Signature};
use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;

/// Families produced by partitioning a word list on one letter
///
/// Dropping the list releases every family's signature and word collection.
/// The word text itself belongs to the caller and must outlive the list.
#[derive(Debug, Clone)]
pub struct FamilyList<'a> {
    families: Vec<Family<'a>>,
    index: FxHashMap<Signature, usize>,
    letter: char,
    word_length: usize,
}

impl<'a> FamilyList<'a> {
    /// Partition `words` into families by the signature each has for `letter`
    ///
    /// # Panics
    /// Panics if `words` is empty or a word's length differs from the first
    /// word's. Both are caller errors; use [`FamilyList::try_build`] to get
    /// them back as a `FamilyError`.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    /// use word_families::family::FamilyList;
    ///
    /// let config = FamilyConfig::with_seed(4, 7).unwrap();
    /// let families = FamilyList::build(&["aba", "aca", "ada"], 'a', &config);
    ///
    /// assert_eq!(families.len(), 1);
    /// let largest = families.largest().unwrap();
    /// assert_eq!(largest.signature().as_str(), "a-a");
    /// assert_eq!(largest.count(), 3);
    /// ```
    #[must_use]
    pub fn build<S: AsRef<str>>(words: &'a [S], letter: char, config: &FamilyConfig) -> Self {
        match Self::try_build(words, letter, config) {
            Ok(list) => list,
            Err(err) => panic!("cannot partition word list: {err}"),
        }
    }

    /// Partition `words` into families, reporting caller errors
    ///
    /// # Errors
    /// Returns `FamilyError::EmptyWordList` for an empty list,
    /// `FamilyError::LengthMismatch` for the first word whose length differs
    /// from the first word's, and `FamilyError::OutOfMemory` if a family's
    /// word collection cannot grow.
    pub fn try_build<S: AsRef<str>>(
        words: &'a [S],
        letter: char,
        config: &FamilyConfig,
    ) -> Result<Self, FamilyError> {
        let first = words.first().ok_or(FamilyError::EmptyWordList)?;
        let word_length = first.as_ref().chars().count();

        let mut families: Vec<Family<'a>> = Vec::new();
        let mut index: FxHashMap<Signature, usize> = FxHashMap::default();

        for (position, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let found = word.chars().count();
            if found != word_length {
                return Err(FamilyError::LengthMismatch {
                    index: position,
                    expected: word_length,
                    found,
                });
            }

            let slot = *index
                .entry(Signature::of(word, letter))
                .or_insert_with_key(|signature| {
                    families.push(Family::new(signature.clone(), config));
                    families.len() - 1
                });
            families[slot].try_add_word(word)?;
        }

        let list = Self {
            families,
            index,
            letter,
            word_length,
        };
        debug!(
            "partitioned {} words of length {} on '{}' into {} families (largest {})",
            list.total_words(),
            word_length,
            letter,
            list.len(),
            list.largest().map_or(0, Family::count)
        );
        Ok(list)
    }

    /// Find the family with exactly this signature
    ///
    /// Returns `None` when no word in the list produced the signature.
    #[must_use]
    pub fn find(&self, signature: &str) -> Option<&Family<'a>> {
        self.index.get(signature).map(|&slot| &self.families[slot])
    }

    /// Find the family with the most words
    ///
    /// Ties go to the family whose signature was seen first. Returns `None`
    /// only for an empty list.
    #[must_use]
    pub fn largest(&self) -> Option<&Family<'a>> {
        self.families.iter().reduce(|best, family| {
            if family.count() > best.count() {
                family
            } else {
                best
            }
        })
    }

    /// The letter this list was partitioned on
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Length, in characters, of every word and signature in the list
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of families
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Total number of words across all families
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.families.iter().map(Family::count).sum()
    }

    /// Iterate over families in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, Family<'a>> {
        self.families.iter()
    }

    /// Take ownership of the families, dropping the signature index
    #[must_use]
    pub fn into_families(self) -> Vec<Family<'a>> {
        self.families
    }

    /// A list with no families, which no build can produce
    #[cfg(test)]
    pub(crate) fn empty(letter: char, word_length: usize) -> Self {
        Self {
            families: Vec::new(),
            index: FxHashMap::default(),
            letter,
            word_length,
        }
    }

    /// Release every family in the list at once
    ///
    /// Same as dropping the list. The borrowed words are left untouched.
    pub fn destroy(self) {
        debug!(
            "releasing {} families for '{}'",
            self.families.len(),
            self.letter
        );
        drop(self);
    }
}

impl<'l, 'a> IntoIterator for &'l FamilyList<'a> {
    type Item = &'l Family<'a>;
    type IntoIter = std::slice::Iter<'l, Family<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.iter()
    }
}

/// Debug dump of every family in list order
impl fmt::Display for FamilyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for family in &self.families {
            write!(f, "{family}")?;
        }
        Ok(())
    }
}
