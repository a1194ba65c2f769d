//! Legal cut positions.
//!
//! A word boundary may never fall inside an indivisible cluster. In Thai a
//! consonant carries its vowel marks and tone marks with it, so a cut between
//! `ก` and `ิ` in `กิน` would produce garbage:
//!
//! ```text
//! Text:      ก ิ น ข ้ า ว
//! Offsets:  0 . 2 3 . . 6 7      (characters; "." = illegal)
//! ```
//!
//! A [`BoundaryOracle`] computes the legal offsets for a text, and the
//! segmenter only ever cuts at members of the resulting [`BoundarySet`].
//!
//! Offsets are UTF-8 byte offsets, always on `char` boundaries.

use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, Result};

/// The set of legal cut offsets in one text.
///
/// Always contains `0` and the text length. Stored as one flag per byte
/// offset, so membership is a single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySet {
    legal: Vec<bool>,
}

impl BoundarySet {
    /// Validate an oracle's offsets against `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBoundaries`] if an offset lies past the end
    /// of `text` or inside a UTF-8 sequence, or if `0` or `text.len()` is
    /// missing.
    pub fn from_offsets<I>(text: &str, offsets: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let len = text.len();
        let mut legal = vec![false; len + 1];

        for offset in offsets {
            if offset > len {
                return Err(malformed(len, format!("offset {offset} is past the end")));
            }
            if !text.is_char_boundary(offset) {
                return Err(malformed(len, format!("offset {offset} splits a character")));
            }
            legal[offset] = true;
        }

        if !legal[0] {
            return Err(malformed(len, "offset 0 is missing".into()));
        }
        if !legal[len] {
            return Err(malformed(len, format!("end offset {len} is missing")));
        }

        Ok(Self { legal })
    }

    /// Whether a cut at `offset` is legal. Out-of-range offsets are not.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.legal.get(offset).copied().unwrap_or(false)
    }

    /// Length in bytes of the text this set was built for.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.legal.len() - 1
    }

    /// Number of legal offsets, including both ends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legal.iter().filter(|&&b| b).count()
    }

    /// Always false: a boundary set holds at least the offset `0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Legal offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.legal
            .iter()
            .enumerate()
            .filter_map(|(offset, &legal)| legal.then_some(offset))
    }
}

fn malformed(len: usize, reason: String) -> Error {
    Error::MalformedBoundaries { len, reason }
}

/// Computes legal cut offsets for a text.
///
/// Implementations must be deterministic and must include `0` and
/// `text.len()`. Oracles are shared read-only across segmentation calls.
pub trait BoundaryOracle: Send + Sync {
    /// Legal cut offsets of `text`, in any order, duplicates allowed.
    fn cut_offsets(&self, text: &str) -> Vec<usize>;

    /// Validated boundary set of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBoundaries`] when [`cut_offsets`](Self::cut_offsets)
    /// breaks the contract.
    fn boundaries(&self, text: &str) -> Result<BoundarySet> {
        BoundarySet::from_offsets(text, self.cut_offsets(text))
    }
}

/// Every character offset is legal.
///
/// Useful for tests and for scripts without combining marks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharBoundaries;

impl BoundaryOracle for CharBoundaries {
    fn cut_offsets(&self, text: &str) -> Vec<usize> {
        text.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect()
    }
}

/// Extended grapheme cluster boundaries (UAX #29).
///
/// Script-agnostic: keeps combining marks with their base, but does not know
/// Thai rules such as a leading vowel binding to the next consonant.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeClusters;

impl BoundaryOracle for GraphemeClusters {
    fn cut_offsets(&self, text: &str) -> Vec<usize> {
        text.grapheme_indices(true)
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect()
    }
}
