//! A single word family
//!
//! A family owns its signature and a collection of borrowed word references.
//! The word text stays with the caller; the `'a` lifetime ties every family to
//! the storage its words came from.

use crate::core::{FamilyConfig, FamilyError, Signature};
use log::trace;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Words sharing one signature
///
/// The word collection only ever grows by appending. Its capacity starts at
/// the configured growth increment and grows by exactly that increment each
/// time it fills, never by doubling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family<'a> {
    signature: Signature,
    words: Vec<&'a str>,
    capacity: usize,
    growth_increment: usize,
}

impl<'a> Family<'a> {
    /// Create an empty family with room for one growth increment of words
    ///
    /// Allocation failure aborts the process, the same as any other `Vec`
    /// allocation.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    /// use word_families::family::Family;
    ///
    /// let config = FamilyConfig::with_seed(5, 0).unwrap();
    /// let family = Family::new("a-a", &config);
    ///
    /// assert_eq!(family.signature().as_str(), "a-a");
    /// assert_eq!(family.count(), 0);
    /// assert_eq!(family.capacity(), 5);
    /// ```
    #[must_use]
    pub fn new(signature: impl Into<Signature>, config: &FamilyConfig) -> Self {
        let growth_increment = config.growth_increment();
        Self {
            signature: signature.into(),
            words: Vec::with_capacity(growth_increment),
            capacity: growth_increment,
            growth_increment,
        }
    }

    /// Append a word reference, growing by one increment if full
    ///
    /// Allocation failure aborts the process. Use [`Family::try_add_word`] to
    /// get it back as an error instead.
    pub fn add_word(&mut self, word: &'a str) {
        if self.is_full() {
            self.words.reserve_exact(self.growth_increment);
            self.grew();
        }
        self.words.push(word);
    }

    /// Append a word reference, reporting allocation failure
    ///
    /// # Errors
    /// Returns `FamilyError::OutOfMemory` if growing the collection fails. The
    /// family is left unchanged in that case.
    pub fn try_add_word(&mut self, word: &'a str) -> Result<(), FamilyError> {
        if self.is_full() {
            self.words
                .try_reserve_exact(self.growth_increment)
                .map_err(FamilyError::OutOfMemory)?;
            self.grew();
        }
        self.words.push(word);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// View the member words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Number of words in the family
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Number of word slots currently reserved
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    /// Copy the word references into a new, independently owned list
    ///
    /// The returned list borrows the caller's word storage, not this family,
    /// so it stays valid after the family grows or is dropped.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    /// use word_families::family::Family;
    ///
    /// let config = FamilyConfig::with_seed(1, 0).unwrap();
    /// let mut family = Family::new("a-a", &config);
    /// family.add_word("aba");
    ///
    /// let words = family.extract_word_list();
    /// family.add_word("aca");
    /// drop(family);
    ///
    /// assert_eq!(words, ["aba"]);
    /// ```
    #[must_use]
    pub fn extract_word_list(&self) -> Vec<&'a str> {
        self.words.clone()
    }

    /// Pick a member word uniformly at random
    ///
    /// # Panics
    /// Panics if the family has no words.
    #[must_use]
    pub fn pick_random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        match self.try_pick_random_word(rng) {
            Ok(word) => word,
            Err(err) => panic!("{err}"),
        }
    }

    /// Pick a member word uniformly at random
    ///
    /// # Errors
    /// Returns `FamilyError::EmptyFamily` if the family has no words.
    pub fn try_pick_random_word<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&'a str, FamilyError> {
        self.words
            .choose(rng)
            .copied()
            .ok_or_else(|| FamilyError::EmptyFamily {
                signature: self.signature.to_string(),
            })
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.words.len() == self.capacity
    }

    fn grew(&mut self) {
        self.capacity += self.growth_increment;
        trace!("family {} grew to {} slots", self.signature, self.capacity);
    }
}

/// One block of the debug dump: header line, indented words, blank line
impl fmt::Display for Family<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "***Family signature: {} Num words: {}",
            self.signature,
            self.count()
        )?;
        for word in &self.words {
            writeln!(f, "     {word}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn config(increment: usize) -> FamilyConfig {
        FamilyConfig::with_seed(increment, 99).unwrap()
    }

    #[test]
    fn new_family_is_empty_with_one_increment() {
        let family = Family::new("--e", &config(3));

        assert_eq!(family.signature().as_str(), "--e");
        assert_eq!(family.count(), 0);
        assert_eq!(family.capacity(), 3);
        assert!(family.words().is_empty());
    }

    #[test]
    fn new_family_copies_signature() {
        let text = String::from("a-a");
        let family = Family::new(text.as_str(), &config(1));
        drop(text);

        assert_eq!(family.signature().as_str(), "a-a");
    }

    #[test]
    fn add_word_grows_by_exact_increment() {
        let words = ["ab", "ac", "ad", "ae", "af"];
        let mut family = Family::new("a-", &config(2));

        let mut capacities = Vec::new();
        for word in words {
            family.add_word(word);
            capacities.push(family.capacity());
        }

        assert_eq!(capacities, [2, 2, 4, 4, 6]);
        assert_eq!(family.words(), words);
    }

    #[test]
    fn try_add_word_grows_by_exact_increment() {
        let mut family = Family::new("x", &config(1));

        for (i, word) in ["x", "x", "x"].into_iter().enumerate() {
            family.try_add_word(word).unwrap();
            assert_eq!(family.capacity(), i + 1);
        }
        assert_eq!(family.count(), 3);
    }

    #[test]
    fn growth_keeps_earlier_entries() {
        let owned: Vec<String> = (0..50).map(|i| format!("w{i:02}")).collect();
        let mut family = Family::new("---", &config(7));

        for word in &owned {
            family.add_word(word);
        }

        assert_eq!(family.count(), 50);
        assert_eq!(family.capacity(), 56);
        for (stored, original) in family.words().iter().zip(&owned) {
            assert_eq!(*stored, original.as_str());
        }
    }

    #[test]
    fn add_word_stores_references_not_copies() {
        let word = String::from("abc");
        let mut family = Family::new("a--", &config(1));
        family.add_word(&word);

        assert!(std::ptr::eq(family.words()[0], word.as_str()));
    }

    #[test]
    fn contains_checks_members() {
        let mut family = Family::new("a-a", &config(2));
        family.add_word("aba");
        family.add_word("aca");

        assert!(family.contains("aba"));
        assert!(!family.contains("ada"));
    }

    #[test]
    fn extract_word_list_survives_growth() {
        let mut family = Family::new("a-a", &config(2));
        family.add_word("aba");
        family.add_word("aca");

        let extracted = family.extract_word_list();
        for word in ["ada", "afa", "aga"] {
            family.add_word(word);
        }

        assert_eq!(extracted, ["aba", "aca"]);
        assert_eq!(family.count(), 5);
    }

    #[test]
    fn extract_word_list_of_empty_family() {
        let family = Family::new("--", &config(4));
        assert!(family.extract_word_list().is_empty());
    }

    #[test]
    fn pick_random_word_returns_member() {
        let mut family = Family::new("a-a", &config(2));
        for word in ["aba", "aca", "ada"] {
            family.add_word(word);
        }

        let mut rng = config(2).seeded_rng();
        for _ in 0..100 {
            assert!(family.contains(family.pick_random_word(&mut rng)));
        }
    }

    #[test]
    fn pick_random_word_reaches_every_slot() {
        let mut family = Family::new("-", &config(3));
        for word in ["p", "q", "r", "s"] {
            family.add_word(word);
        }

        let mut rng = config(3).seeded_rng();
        let seen: FxHashSet<&str> = (0..400)
            .map(|_| family.pick_random_word(&mut rng))
            .collect();

        assert_eq!(seen.len(), 4);
        assert!(seen.contains("s"));
    }

    #[test]
    fn successive_picks_from_one_generator_vary() {
        let cfg = FamilyConfig::new(4).unwrap();
        let mut family = Family::new("a-a", &cfg);
        for word in ["aba", "aca", "ada", "afa", "aga", "aha"] {
            family.add_word(word);
        }

        let mut rng = cfg.seeded_rng();
        let picks: Vec<&str> = (0..10)
            .map(|_| family.pick_random_word(&mut rng))
            .collect();

        assert!(picks.iter().any(|&word| word != picks[0]), "{picks:?}");
    }

    #[test]
    fn try_pick_random_word_on_empty_family() {
        let family = Family::new("--", &config(1));
        let mut rng = config(1).seeded_rng();

        assert_eq!(
            family.try_pick_random_word(&mut rng),
            Err(FamilyError::EmptyFamily {
                signature: "--".to_string()
            })
        );
    }

    #[test]
    #[should_panic(expected = "has no words")]
    fn pick_random_word_on_empty_family_panics() {
        let family = Family::new("--", &config(1));
        let mut rng = config(1).seeded_rng();
        let _ = family.pick_random_word(&mut rng);
    }

    #[test]
    fn display_renders_debug_block() {
        let mut family = Family::new("a-a", &config(2));
        family.add_word("aba");
        family.add_word("aca");

        assert_eq!(
            family.to_string(),
            "***Family signature: a-a Num words: 2\n     aba\n     aca\n\n"
        );
    }
}
