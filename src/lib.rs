//! # kham
//!
//! Dictionary-based word segmentation for text written without spaces
//! between words, such as Thai.
//!
//! ## The Problem
//!
//! Thai puts no spaces between words. `กินข้าว` ("eat rice") is two words,
//! but nothing in the text says where one ends. A dictionary tells us which
//! spans *could* be words, and usually several ways to cover the text exist.
//!
//! There is a second constraint: Thai vowels and tone marks attach to their
//! consonant. A cut between `ก` and `ิ` is never legal, no matter what the
//! dictionary says. Those indivisible units are Thai Character Clusters.
//!
//! ## The Approach: Maximal Matching on a Cluster Graph
//!
//! ```text
//! Text:     ก ิ น ข ้ า ว
//! Clusters: [กิ][น][ข้า][ว]          legal cuts: 0, 2, 3, 6, 7
//! Words:    กิน (0→3), ข้าว (3→7), กินข้าว (0→7)
//!
//! Graph:    0 ──กิน──▶ 3 ──ข้าว──▶ 7
//!           └──────กินข้าว───────▶┘
//! ```
//!
//! Offsets are visited left to right. Whenever only one reachable offset is
//! left, the text before it is committed along the first breadth-first path.
//! Text no dictionary word covers is recovered heuristically: Latin words,
//! numbers and whitespace become their own tokens, unknown Thai is extended
//! until a known word starts.
//!
//! Segmentation is deterministic and lossless: the tokens always concatenate
//! back to the input.
//!
//! ## Quick Start
//!
//! ```rust
//! use kham::Segmenter;
//!
//! let segmenter = Segmenter::new();
//! let words = segmenter.segment("ภาษาไทยง่ายนิดเดียว", false)?;
//! assert_eq!(words.concat(), "ภาษาไทยง่ายนิดเดียว");
//! # Ok::<(), kham::Error>(())
//! ```
//!
//! With a custom dictionary:
//!
//! ```rust
//! use kham::Trie;
//!
//! let dict = Trie::new(["กิน", "ข้าว"]);
//! assert_eq!(kham::segment("กินข้าว", Some(&dict), false)?, ["กิน", "ข้าว"]);
//! # Ok::<(), kham::Error>(())
//! ```
//!
//! ## Safe Mode
//!
//! A long run of ambiguous text keeps many offsets alive at once. Safe mode
//! cuts long inputs into chunks of about 120 characters first, preferring to
//! cut after a space, and segments each chunk separately. See [`SafeMode`].
//!
//! | Mode | Cost on adversarial input | Accuracy |
//! |------|---------------------------|----------|
//! | direct | unbounded frontier | best |
//! | safe | bounded per chunk | may split words at chunk seams |

mod boundary;
mod dict;
mod error;
mod graph;
pub mod numeral;
pub mod pattern;
mod safe;
mod segmenter;
pub mod tcc;
mod tokens;

pub use boundary::{BoundaryOracle, BoundarySet, CharBoundaries, GraphemeClusters};
pub use dict::{default_dictionary, PrefixDictionary, Trie};
pub use error::{Error, Result};
pub use safe::{CutSelection, SafeMode};
pub use segmenter::Segmenter;
pub use tcc::ThaiClusters;
pub use tokens::Tokens;

/// Segment `text` with Thai Character Cluster boundaries.
///
/// `None` for `dictionary` selects the bundled [`default_dictionary`].
/// `safe_mode` chunks long text first (see [`SafeMode`]).
///
/// # Errors
///
/// Returns an error only if `dictionary` breaks the [`PrefixDictionary`]
/// contract.
pub fn segment<'t>(
    text: &'t str,
    dictionary: Option<&dyn PrefixDictionary>,
    safe_mode: bool,
) -> Result<Vec<&'t str>> {
    match dictionary {
        Some(dictionary) => Segmenter::from_dictionary(dictionary).segment(text, safe_mode),
        None => Segmenter::new().segment(text, safe_mode),
    }
}
