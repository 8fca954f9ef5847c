//! Wordlist registry for the mnemonic codec.
//!
//! A [`Wordlist`] holds the ordered 2048-word symbol alphabet together with
//! its reverse (word → index) map. Both are built in one step by
//! [`Wordlist::new`] and never mutated afterwards, so a `&Wordlist` can be
//! shared freely across threads; switching languages means constructing a
//! new value and passing that to the codec instead.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::MnemonicError;

pub mod english;

/// Number of words every valid wordlist must contain (2^11, one word per
/// 11-bit index).
pub const WORDLIST_SIZE: usize = 2048;

static ENGLISH: LazyLock<Wordlist> = LazyLock::new(|| {
    let words = english::WORDS.iter().map(|w| w.to_string()).collect();
    // The bundled list is a compile-time constant vetted by the vector tests.
    Wordlist::new(words).expect("bundled English wordlist is valid")
});

/// An ordered 2048-word list and its reverse lookup map.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Build a registry from an ordered list of words.
    ///
    /// Validates the correctness preconditions of the codec up front:
    /// exactly 2048 entries, no duplicates. The ordered list and the
    /// reverse map are built together, so a `Wordlist` value is never
    /// observable with the two out of sync.
    ///
    /// # Arguments
    /// * `words` - The 2048 words in index order.
    ///
    /// # Returns
    /// The validated registry, or `MnemonicError::InvalidWordlist`.
    pub fn new(words: Vec<String>) -> Result<Self, MnemonicError> {
        if words.len() != WORDLIST_SIZE {
            return Err(MnemonicError::InvalidWordlist(format!(
                "expected {} words, got {}",
                WORDLIST_SIZE,
                words.len()
            )));
        }
        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "duplicate word '{word}'"
                )));
            }
        }
        Ok(Wordlist { words, index })
    }

    /// The standard English wordlist, built once on first use.
    pub fn english() -> &'static Wordlist {
        &ENGLISH
    }

    /// Look up the word at an 11-bit index.
    ///
    /// # Arguments
    /// * `index` - Word index in the range 0..2048.
    ///
    /// # Returns
    /// The word, or `None` if the index is out of range.
    pub fn word_at(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Look up the 11-bit index of a word.
    ///
    /// # Arguments
    /// * `word` - The word to resolve.
    ///
    /// # Returns
    /// The index, or `None` if the word is not in the list.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Number of words in the registry (always 2048).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed registry; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list_shape() {
        let list = Wordlist::english();
        assert_eq!(list.len(), WORDLIST_SIZE);
        assert_eq!(list.word_at(0), Some("abandon"));
        assert_eq!(list.word_at(3), Some("about"));
        assert_eq!(list.word_at(2047), Some("zoo"));
        assert_eq!(list.word_at(2048), None);
    }

    #[test]
    fn test_english_list_sorted_and_unique() {
        let words = &english::WORDS;
        for pair in words.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_index_of_inverts_word_at() {
        let list = Wordlist::english();
        for i in [0u16, 1, 500, 1024, 2047] {
            let word = list.word_at(i).unwrap();
            assert_eq!(list.index_of(word), Some(i));
        }
        assert_eq!(list.index_of("notaword"), None);
    }

    #[test]
    fn test_rejects_short_list() {
        let words: Vec<String> = (0..2047).map(|i| format!("w{i}")).collect();
        let err = Wordlist::new(words).unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidWordlist(_)));
    }

    #[test]
    fn test_rejects_duplicate_word() {
        let mut words: Vec<String> = (0..2048).map(|i| format!("w{i}")).collect();
        words[2047] = "w0".to_string();
        let err = Wordlist::new(words).unwrap_err();
        assert_eq!(
            err,
            MnemonicError::InvalidWordlist("duplicate word 'w0'".to_string())
        );
    }

    #[test]
    fn test_custom_list_is_usable() {
        let words: Vec<String> = (0..2048).map(|i| format!("w{i:04}")).collect();
        let list = Wordlist::new(words).unwrap();
        assert_eq!(list.word_at(7), Some("w0007"));
        assert_eq!(list.index_of("w2047"), Some(2047));
    }
}
