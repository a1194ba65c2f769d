//! Pattern helpers for unknown spans.
//!
//! Text the dictionary cannot cover is either a run of another script
//! (Latin words, numbers, whitespace, line breaks), which is taken as a
//! single token, or unknown Thai, which is extended until something
//! recognizable starts.

use std::sync::LazyLock;

use regex::Regex;

/// Latin words (with hyphens), numbers with separators, horizontal
/// whitespace, or one line break.
static FOREIGN_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-a-zA-Z]+|\d[\d,.]*|[ \t]+|\r?\n)").expect("foreign run pattern is valid")
});

/// Length in bytes of the non-Thai run at the start of `text`, if any.
///
/// ```rust
/// use kham::pattern::foreign_run_len;
///
/// assert_eq!(foreign_run_len("e-mail ok"), Some(6));
/// assert_eq!(foreign_run_len("1,000.50บาท"), Some(8));
/// assert_eq!(foreign_run_len("กิน"), None);
/// ```
#[must_use]
pub fn foreign_run_len(text: &str) -> Option<usize> {
    FOREIGN_RUN.find(text).map(|m| m.end())
}

/// Whether `word` is at most two bare Thai consonants.
///
/// Such dictionary hits are too weak to end an unknown span on.
#[must_use]
pub fn is_short_consonant_word(word: &str) -> bool {
    let mut count = 0;
    for c in word.chars() {
        if !matches!(c, 'ก'..='ฮ') {
            return false;
        }
        count += 1;
        if count > 2 {
            return false;
        }
    }
    true
}
