//! Safe mode: bounded-cost segmentation of long text.
//!
//! ## The Problem
//!
//! The frontier only collapses when the text stops being ambiguous. A long
//! run of Thai with many overlapping dictionary words and no spaces keeps
//! several offsets live for a long time, and the graph and path search grow
//! with it.
//!
//! ## The Solution
//!
//! Cut the text into chunks first, then segment each chunk on its own:
//!
//! ```text
//! limit = 120, scan_left = 20, scan_right = 20   (characters)
//!
//! remaining:  |------------------- 100 -------------------|--- window ---|....
//!                                                        100           140
//!
//! 1. window contains ' '?  cut right after the last space in it
//! 2. otherwise segment the window and cut before its selected token
//! 3. repeat while the remainder is at least 140 characters
//! ```
//!
//! Words that straddle a cut may be split wrongly; that is the price for
//! bounded work per chunk. Texts shorter than `limit + scan_right` are not
//! chunked at all.

use crate::boundary::BoundaryOracle;
use crate::dict::PrefixDictionary;
use crate::tokens::Tokens;
use crate::{Error, Result};

/// Which token of a spaceless scan window a chunk is cut before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutSelection {
    /// The longest token in characters; the first one on ties.
    #[default]
    Longest,
    /// The last token of the window.
    ///
    /// This is where a longest-token search lands when its running maximum
    /// is reset on every token; use it to reproduce output of that kind.
    LastToken,
}

impl CutSelection {
    /// Index of the token to cut before.
    fn pick(self, tokens: &[&str]) -> usize {
        match self {
            Self::Longest => {
                let mut best = 0;
                let mut best_len = 0;
                for (i, token) in tokens.iter().enumerate() {
                    let len = token.chars().count();
                    if len > best_len {
                        best = i;
                        best_len = len;
                    }
                }
                best
            }
            Self::LastToken => tokens.len().saturating_sub(1),
        }
    }
}

/// Chunking parameters for safe mode.
///
/// All lengths are in characters.
///
/// # Examples
///
/// ```rust
/// use kham::{CutSelection, SafeMode};
///
/// let mode = SafeMode::default();
/// assert_eq!(mode.limit(), 120);
/// assert_eq!(mode.threshold(), 140);
///
/// let mode = SafeMode::new(40, 10, 10)?.with_cut_selection(CutSelection::LastToken);
/// assert_eq!(mode.threshold(), 50);
///
/// assert!(SafeMode::new(10, 10, 5).is_err());
/// # Ok::<(), kham::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeMode {
    limit: usize,
    scan_left: usize,
    scan_right: usize,
    cut_selection: CutSelection,
}

impl SafeMode {
    /// Default chunk size limit.
    pub const DEFAULT_LIMIT: usize = 120;
    /// Default scan width before the limit.
    pub const DEFAULT_SCAN_LEFT: usize = 20;
    /// Default scan width after the limit.
    pub const DEFAULT_SCAN_RIGHT: usize = 20;

    /// Create a configuration with the given window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSafeMode`] if `limit == 0`,
    /// `scan_left >= limit` or `scan_right == 0`.
    pub fn new(limit: usize, scan_left: usize, scan_right: usize) -> Result<Self> {
        Self {
            limit,
            scan_left,
            scan_right,
            cut_selection: CutSelection::default(),
        }
        .validated()
    }

    fn validated(self) -> Result<Self> {
        if self.limit == 0 {
            return Err(Error::InvalidSafeMode("limit must be > 0"));
        }
        if self.scan_left >= self.limit {
            return Err(Error::InvalidSafeMode("scan_left must be < limit"));
        }
        if self.scan_right == 0 {
            return Err(Error::InvalidSafeMode("scan_right must be > 0"));
        }
        if self.limit.checked_add(self.scan_right).is_none() {
            return Err(Error::InvalidSafeMode("limit + scan_right overflows"));
        }
        Ok(self)
    }

    /// Replace the chunk size limit.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SafeMode::new`].
    pub fn with_limit(self, limit: usize) -> Result<Self> {
        Self { limit, ..self }.validated()
    }

    /// Replace the scan width before the limit.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SafeMode::new`].
    pub fn with_scan_left(self, scan_left: usize) -> Result<Self> {
        Self { scan_left, ..self }.validated()
    }

    /// Replace the scan width after the limit.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SafeMode::new`].
    pub fn with_scan_right(self, scan_right: usize) -> Result<Self> {
        Self { scan_right, ..self }.validated()
    }

    /// Replace the cut-token selection.
    #[must_use]
    pub fn with_cut_selection(self, cut_selection: CutSelection) -> Self {
        Self {
            cut_selection,
            ..self
        }
    }

    /// Chunk size limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Scan width before the limit.
    #[must_use]
    pub const fn scan_left(&self) -> usize {
        self.scan_left
    }

    /// Scan width after the limit.
    #[must_use]
    pub const fn scan_right(&self) -> usize {
        self.scan_right
    }

    /// How spaceless windows are cut.
    #[must_use]
    pub const fn cut_selection(&self) -> CutSelection {
        self.cut_selection
    }

    /// Texts at least this many characters long are chunked.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.limit + self.scan_right
    }

    /// Split `text` into chunks that are segmented independently.
    ///
    /// The chunks concatenate back to `text`. Spaceless windows are
    /// segmented with `dictionary` and `oracle` to find a cut.
    ///
    /// # Errors
    ///
    /// Propagates collaborator contract violations from segmenting a window.
    pub fn chunks<'t>(
        &self,
        text: &'t str,
        dictionary: &dyn PrefixDictionary,
        oracle: &dyn BoundaryOracle,
    ) -> Result<Vec<&'t str>> {
        let threshold = self.threshold();
        let mut chunks = Vec::new();
        let mut rest = text;
        let mut rest_chars = rest.chars().count();

        while rest_chars >= threshold {
            let window_start = byte_offset(rest, self.limit - self.scan_left);
            let window_end = byte_offset(rest, threshold);
            let window = &rest[window_start..window_end];

            let cut = match window.rfind(' ') {
                Some(space) => window_start + space + 1,
                None => {
                    let tokens = Tokens::new(window, dictionary, oracle)?
                        .collect::<Result<Vec<_>>>()?;
                    let chosen = self.cut_selection.pick(&tokens);
                    window_start + tokens[..chosen].iter().map(|t| t.len()).sum::<usize>()
                }
            };

            let (chunk, tail) = rest.split_at(cut);
            let chunk_chars = chunk.chars().count();
            log::debug!("safe mode cut after {chunk_chars} chars ({} bytes)", chunk.len());
            rest_chars -= chunk_chars;
            chunks.push(chunk);
            rest = tail;
        }

        if !rest.is_empty() {
            chunks.push(rest);
        }
        Ok(chunks)
    }
}

impl Default for SafeMode {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            scan_left: Self::DEFAULT_SCAN_LEFT,
            scan_right: Self::DEFAULT_SCAN_RIGHT,
            cut_selection: CutSelection::default(),
        }
    }
}

/// Byte offset of the `chars`-th character, or the text length past the end.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}
