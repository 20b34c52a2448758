//! Letter signatures
//!
//! A signature is what a word looks like once a single letter is revealed:
//! every occurrence of the letter stays in place and every other position is
//! masked with [`Signature::PLACEHOLDER`].
//!
//! ```text
//! word "abac", letter 'a'  ->  "a-a-"
//! word "book", letter 'a'  ->  "----"
//! ```

use std::borrow::Borrow;
use std::fmt;

/// Masked form of a word for one letter
///
/// Comparison is exact and case-sensitive, so words with equal signatures
/// reveal the letter in exactly the same positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Character standing in for every position that does not hold the letter
    pub const PLACEHOLDER: char = '-';

    /// Compute the signature of `word` for `letter`
    ///
    /// # Examples
    /// ```
    /// use word_families::core::Signature;
    ///
    /// assert_eq!(Signature::of("abac", 'a').as_str(), "a-a-");
    /// assert_eq!(Signature::of("Abac", 'a').as_str(), "--a-");
    /// ```
    #[must_use]
    pub fn of(word: &str, letter: char) -> Self {
        Self(
            word.chars()
                .map(|ch| if ch == letter { ch } else { Self::PLACEHOLDER })
                .collect(),
        )
    }

    /// Get the signature as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of positions (characters, not bytes)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count the positions that reveal a letter
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.chars().filter(|&ch| ch != Self::PLACEHOLDER).count()
    }

    /// True when the letter does not occur at all
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.revealed_count() == 0
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Signature {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets a `FxHashMap<Signature, _>` be queried with a plain `&str`.
impl Borrow<str> for Signature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
