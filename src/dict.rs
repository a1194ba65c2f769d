//! Prefix dictionaries.
//!
//! The segmenter asks one question of its dictionary: which known words start
//! the remaining text? A character trie answers it in a single walk:
//!
//! ```text
//! Words: กิน, กินข้าว, ข้าว
//!
//! root ─ ก ─ ิ ─ น* ─ ข ─ ้ ─ า ─ ว*
//!      └ ข ─ ้ ─ า ─ ว*
//!
//! prefixes("กินข้าวเย็น") = ["กิน", "กินข้าว"]
//! ```

use std::collections::HashMap;
use std::io::BufRead;
use std::sync::LazyLock;

use crate::Result;

/// Looks up every dictionary word that is a prefix of a text.
///
/// Returned words must be non-empty prefixes of `text`; order does not
/// matter. Dictionaries are shared read-only across segmentation calls.
pub trait PrefixDictionary: Send + Sync {
    /// Every known word that `text` starts with.
    fn prefixes<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    terminal: bool,
}

/// A character trie over a word list.
///
/// ## Example
///
/// ```rust
/// use kham::{PrefixDictionary, Trie};
///
/// let trie = Trie::new(["กิน", "กินข้าว", "ข้าว"]);
/// assert_eq!(trie.prefixes("กินข้าวเย็น"), vec!["กิน", "กินข้าว"]);
/// assert!(trie.prefixes("น้ำ").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    /// Build a trie from words. Empty words are ignored.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Read a word list with one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut trie = Self::default();
        for line in reader.lines() {
            trie.insert(line?.trim());
        }
        log::debug!("loaded {} words into trie", trie.len());
        Ok(trie)
    }

    /// Add a word. Returns false if it was empty or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = 0;
        for c in word.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }

        let fresh = !self.nodes[node].terminal;
        self.nodes[node].terminal = true;
        self.words += usize::from(fresh);
        fresh
    }

    /// Whether `word` is in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = 0;
        for c in word.chars() {
            match self.nodes[node].children.get(&c) {
                Some(&child) => node = child,
                None => return false,
            }
        }
        !word.is_empty() && self.nodes[node].terminal
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the trie holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl PrefixDictionary for Trie {
    fn prefixes<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut found = Vec::new();
        let mut node = 0;
        for (i, c) in text.char_indices() {
            match self.nodes[node].children.get(&c) {
                Some(&child) => node = child,
                None => break,
            }
            if self.nodes[node].terminal {
                found.push(&text[..i + c.len_utf8()]);
            }
        }
        found
    }
}

static DEFAULT_WORDS: &str = include_str!("../data/words_th.txt");

static DEFAULT_DICTIONARY: LazyLock<Trie> = LazyLock::new(|| {
    let trie = Trie::new(DEFAULT_WORDS.lines().map(str::trim));
    log::debug!("built default dictionary with {} words", trie.len());
    trie
});

/// The bundled Thai dictionary.
///
/// Built on first use, then shared immutably by every caller and thread.
#[must_use]
pub fn default_dictionary() -> &'static Trie {
    &DEFAULT_DICTIONARY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_in_length_order() {
        let trie = Trie::new(["ก", "กิน", "กินข้าว", "ข้าว"]);
        assert_eq!(trie.prefixes("กินข้าว"), vec!["ก", "กิน", "กินข้าว"]);
    }

    #[test]
    fn test_prefix_longer_than_text() {
        let trie = Trie::new(["กินข้าว"]);
        assert!(trie.prefixes("กิน").is_empty());
    }

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::default();
        assert!(trie.is_empty());
        assert!(trie.insert("ข้าว"));
        assert!(!trie.insert("ข้าว"));
        assert!(!trie.insert(""));
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("ข้าว"));
        assert!(!trie.contains("ข้า"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_from_reader() {
        let data = "กิน\n\n  ข้าว  \nกิน\n";
        let trie = Trie::from_reader(data.as_bytes()).unwrap();
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("ข้าว"));
    }

    #[test]
    fn test_default_dictionary() {
        let dict = default_dictionary();
        assert!(!dict.is_empty());
        assert!(dict.contains("กิน"));
        assert!(dict.contains("ข้าว"));
        assert!(std::ptr::eq(dict, default_dictionary()));
    }
}
