//! Incremental maximal-matching segmentation.
//!
//! ## The Algorithm
//!
//! Offsets are visited in increasing order from a frontier (a min-queue of
//! offsets some dictionary path has reached). At each offset every dictionary
//! word starting there adds an edge to the offset where it ends, provided
//! that end is a legal cut.
//!
//! ```text
//! Dictionary: กิน, กินข้าว, ข้าว, ข้าวเย็น, เย็น
//! Text:       กินข้าวเย็น
//!
//! pos 0:  edges 0→3 (กิน), 0→7 (กินข้าว)   frontier {3, 7}   ambiguous, wait
//! pos 3:  edges 3→7 (ข้าว), 3→11 (ข้าวเย็น) frontier {7, 11}  ambiguous, wait
//! pos 7:  edge  7→11 (เย็น)                 frontier {11}     resolved
//!         first BFS path 0 → 3 → 11:  emit "กิน", "ข้าวเย็น"
//! ```
//!
//! Offsets above are in characters. Both two-edge paths are equally short;
//! the one through the earlier-discovered edge wins.
//!
//! While two or more offsets are live, how the text before them splits is
//! still open. Once a single offset remains every path must pass through it,
//! so the text up to it is committed along the first breadth-first path.
//!
//! ## Unknown Text
//!
//! When no word continues from an offset the frontier runs dry. The span is
//! then ended at the end of a non-Thai run (Latin, digits, whitespace, line
//! break) if one starts there, or else at the first later legal offset where
//! a substantial dictionary word or a non-Thai run begins. Unknown spans are
//! emitted immediately.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::boundary::{BoundaryOracle, BoundarySet};
use crate::dict::PrefixDictionary;
use crate::graph::{Frontier, Graph};
use crate::pattern::{foreign_run_len, is_short_consonant_word};
use crate::{Error, Result};

/// Lazy token stream over one text.
///
/// Yields slices of the input in order; concatenated they give back the
/// input exactly. Each value owns its graph and frontier and cannot be
/// restarted. After an error the stream ends.
///
/// ## Example
///
/// ```rust
/// use kham::{CharBoundaries, Tokens, Trie};
///
/// let dict = Trie::new(["กิน", "ข้าว"]);
/// let tokens: Vec<&str> = Tokens::new("กินข้าว", &dict, &CharBoundaries)?
///     .collect::<kham::Result<_>>()?;
/// assert_eq!(tokens, ["กิน", "ข้าว"]);
/// # Ok::<(), kham::Error>(())
/// ```
pub struct Tokens<'t, 'd> {
    text: &'t str,
    dictionary: &'d dyn PrefixDictionary,
    boundaries: BoundarySet,
    graph: Graph,
    frontier: Frontier,
    cursor: usize,
    pending: VecDeque<&'t str>,
    failed: bool,
}

impl<'t, 'd> Tokens<'t, 'd> {
    /// Prepare to segment `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBoundaries`] if `oracle` breaks its contract.
    pub fn new(
        text: &'t str,
        dictionary: &'d dyn PrefixDictionary,
        oracle: &dyn BoundaryOracle,
    ) -> Result<Self> {
        let boundaries = oracle.boundaries(text)?;
        let mut frontier = Frontier::new(text.len());
        frontier.push(0);

        Ok(Self {
            text,
            dictionary,
            boundaries,
            graph: Graph::new(text.len()),
            frontier,
            cursor: 0,
            pending: VecDeque::new(),
            failed: false,
        })
    }

    /// Offset up to which tokens have been produced (some may still be
    /// buffered).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Dictionary words at `pos`, checked against the text.
    fn lookup(&self, pos: usize) -> Result<Vec<&'t str>> {
        let text = self.text;
        let rest = &text[pos..];
        let words = self.dictionary.prefixes(rest);
        if let Some(bad) = words.iter().find(|w| w.is_empty() || !rest.starts_with(**w)) {
            return Err(Error::DictionaryContract {
                offset: pos,
                word: (*bad).to_string(),
            });
        }
        Ok(words)
    }

    /// Process the smallest frontier offset.
    fn step(&mut self) -> Result<()> {
        let Some(pos) = self.frontier.pop() else {
            return Ok(());
        };

        for word in self.lookup(pos)? {
            let end = pos + word.len();
            if self.boundaries.contains(end) {
                self.graph.add_edge(pos, end);
                self.frontier.push(end);
            }
        }

        match (self.frontier.len(), self.frontier.min()) {
            (1, Some(goal)) => self.commit(goal),
            (0, _) => self.recover(pos),
            _ => Ok(()),
        }
    }

    /// Emit the first breadth-first path from the cursor to `goal`.
    fn commit(&mut self, goal: usize) -> Result<()> {
        let path = self
            .graph
            .first_path(self.cursor, goal)
            .ok_or(Error::UnreachableOffset {
                from: self.cursor,
                to: goal,
            })?;

        let text = self.text;
        for end in path {
            self.pending.push_back(&text[self.cursor..end]);
            self.cursor = end;
        }
        Ok(())
    }

    /// Emit an unknown span starting at `pos`.
    fn recover(&mut self, pos: usize) -> Result<()> {
        debug_assert_eq!(self.cursor, pos);

        let text = self.text;
        let end = match foreign_run_len(&text[pos..]) {
            Some(len) => pos + len,
            None => self.scan_unknown(pos)?,
        };
        log::trace!("unknown span {pos}..{end}: {:?}", &text[pos..end]);

        self.graph.add_edge(pos, end);
        self.pending.push_back(&text[pos..end]);
        self.cursor = end;
        self.frontier.push(end);
        Ok(())
    }

    /// First legal offset after `pos` where recognizable text starts, or the
    /// end of the text.
    fn scan_unknown(&self, pos: usize) -> Result<usize> {
        for (i, _) in self.text[pos..].char_indices().skip(1) {
            let i = pos + i;
            if !self.boundaries.contains(i) {
                continue;
            }

            let known = self.lookup(i)?.into_iter().any(|word| {
                self.boundaries.contains(i + word.len()) && !is_short_consonant_word(word)
            });
            if known || foreign_run_len(&self.text[i..]).is_some() {
                return Ok(i);
            }
        }
        Ok(self.text.len())
    }
}

impl<'t> Iterator for Tokens<'t, '_> {
    type Item = Result<&'t str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.failed {
                return None;
            }
            match self.frontier.min() {
                Some(pos) if pos < self.text.len() => {}
                _ => return None,
            }
            if let Err(err) = self.step() {
                self.failed = true;
                return Some(Err(err));
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
