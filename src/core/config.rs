//! Engine configuration
//!
//! Holds the growth increment used for every family's word collection and the
//! seed for random word selection. Build it once before partitioning and pass
//! it by reference; it never changes afterwards.

use super::FamilyError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Growth increment used by [`FamilyConfig::default`]
pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

/// Growth increment and random seed shared by one run of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyConfig {
    growth_increment: NonZeroUsize,
    seed: u64,
}

impl FamilyConfig {
    /// Create a configuration seeded from the current time
    ///
    /// `growth_increment` is both the initial slot count of a new family and
    /// the number of slots added each time a family fills up.
    ///
    /// # Errors
    /// Returns `FamilyError::ZeroIncrement` if `growth_increment` is 0.
    pub fn new(growth_increment: usize) -> Result<Self, FamilyError> {
        Self::with_seed(growth_increment, time_seed())
    }

    /// Create a configuration with a fixed random seed
    ///
    /// # Errors
    /// Returns `FamilyError::ZeroIncrement` if `growth_increment` is 0.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    ///
    /// let config = FamilyConfig::with_seed(4, 42).unwrap();
    /// assert_eq!(config.growth_increment(), 4);
    /// assert_eq!(config.seed(), 42);
    ///
    /// assert!(FamilyConfig::with_seed(0, 42).is_err());
    /// ```
    pub fn with_seed(growth_increment: usize, seed: u64) -> Result<Self, FamilyError> {
        let growth_increment =
            NonZeroUsize::new(growth_increment).ok_or(FamilyError::ZeroIncrement)?;
        Ok(Self {
            growth_increment,
            seed,
        })
    }

    #[inline]
    #[must_use]
    pub const fn growth_increment(&self) -> usize {
        self.growth_increment.get()
    }

    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Create a new random generator seeded from this configuration
    ///
    /// Every call starts a fresh generator at the same seed, so two generators
    /// from one configuration yield the same sequence. Create one per run and
    /// keep passing it to `pick_random_word`; a new generator per pick repeats
    /// the first draw.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    /// use word_families::family::FamilyList;
    ///
    /// let config = FamilyConfig::with_seed(4, 7).unwrap();
    /// let families = FamilyList::build(&["aba", "aca", "ada"], 'a', &config);
    /// let family = families.largest().unwrap();
    ///
    /// let mut rng = config.seeded_rng();
    /// let first = family.pick_random_word(&mut rng);
    /// let second = family.pick_random_word(&mut rng);
    /// assert!(family.contains(first) && family.contains(second));
    /// ```
    #[must_use]
    pub fn seeded_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        const DEFAULT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_GROWTH_INCREMENT) {
            Some(increment) => increment,
            None => panic!("default growth increment must be non-zero"),
        };

        Self {
            growth_increment: DEFAULT,
            seed: time_seed(),
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn config_rejects_zero_increment() {
        assert_eq!(FamilyConfig::new(0), Err(FamilyError::ZeroIncrement));
        assert_eq!(
            FamilyConfig::with_seed(0, 7),
            Err(FamilyError::ZeroIncrement)
        );
    }

    #[test]
    fn config_keeps_increment() {
        let config = FamilyConfig::new(3).unwrap();
        assert_eq!(config.growth_increment(), 3);
    }

    #[test]
    fn config_default_increment() {
        let config = FamilyConfig::default();
        assert_eq!(config.growth_increment(), DEFAULT_GROWTH_INCREMENT);
    }

    #[test]
    fn config_same_seed_same_sequence() {
        let config = FamilyConfig::with_seed(2, 1234).unwrap();
        let mut first = config.seeded_rng();
        let mut second = config.seeded_rng();

        let a: Vec<u32> = (0..8).map(|_| first.random_range(0..1000)).collect();
        let b: Vec<u32> = (0..8).map(|_| second.random_range(0..1000)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn config_one_generator_advances() {
        let config = FamilyConfig::with_seed(2, 1234).unwrap();
        let mut rng = config.seeded_rng();

        let draws: Vec<u32> = (0..16).map(|_| rng.random_range(0..1000)).collect();
        assert!(draws.iter().any(|&draw| draw != draws[0]));
    }
}
