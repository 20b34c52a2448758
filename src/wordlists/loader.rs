//! Word list loading utilities
//!
//! Reads dictionaries from disk and narrows them to a single word length.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_families::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Keep only the words with exactly `length` characters
///
/// # Examples
/// ```
/// use word_families::wordlists::loader::words_of_length;
///
/// let words = words_of_length(&["tree", "moon", "apple"], 4);
/// assert_eq!(words, ["tree", "moon"]);
/// ```
#[must_use]
pub fn words_of_length<S: AsRef<str>>(words: &[S], length: usize) -> Vec<&str> {
    words
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|word| word.chars().count() == length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_skips_blank_lines() {
        let words = parse_words("Tree\n\n  moon  \n\t\nAPPLE\n");
        assert_eq!(words, ["tree", "moon", "apple"]);
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn words_of_length_filters() {
        let owned = vec!["tree".to_string(), "apple".to_string(), "moon".to_string()];
        assert_eq!(words_of_length(&owned, 4), ["tree", "moon"]);
        assert_eq!(words_of_length(&owned, 5), ["apple"]);
        assert!(words_of_length(&owned, 3).is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/word_families/words.txt").is_err());
    }
}
