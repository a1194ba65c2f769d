//! The segmentation entry point.

use crate::boundary::BoundaryOracle;
use crate::dict::{default_dictionary, PrefixDictionary};
use crate::safe::SafeMode;
use crate::tcc::ThaiClusters;
use crate::tokens::Tokens;
use crate::Result;

/// Word segmenter: a dictionary, a boundary oracle and safe-mode settings.
///
/// Cheap to copy; it only borrows its collaborators.
///
/// ## Example
///
/// ```rust
/// use kham::{CharBoundaries, Segmenter, Trie};
///
/// let dict = Trie::new(["กิน", "ข้าว"]);
/// let segmenter = Segmenter::new()
///     .with_dictionary(&dict)
///     .with_oracle(&CharBoundaries);
///
/// assert_eq!(segmenter.segment("กินข้าว", false)?, ["กิน", "ข้าว"]);
/// # Ok::<(), kham::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Segmenter<'d> {
    dictionary: &'d dyn PrefixDictionary,
    oracle: &'d dyn BoundaryOracle,
    safe_mode: SafeMode,
}

impl Segmenter<'static> {
    /// Segmenter with the bundled dictionary and Thai Character Cluster
    /// boundaries.
    #[must_use]
    pub fn new() -> Self {
        Segmenter::from_dictionary(default_dictionary())
    }
}

impl Default for Segmenter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> Segmenter<'d> {
    /// Segmenter over `dictionary` with Thai Character Cluster boundaries.
    ///
    /// Unlike `Segmenter::new().with_dictionary(..)`, this never builds the
    /// bundled dictionary.
    #[must_use]
    pub fn from_dictionary(dictionary: &'d dyn PrefixDictionary) -> Self {
        Self {
            dictionary,
            oracle: &ThaiClusters,
            safe_mode: SafeMode::default(),
        }
    }

    /// Use a different dictionary.
    #[must_use]
    pub fn with_dictionary<'a>(self, dictionary: &'a dyn PrefixDictionary) -> Segmenter<'a>
    where
        'd: 'a,
    {
        Segmenter {
            dictionary,
            oracle: self.oracle,
            safe_mode: self.safe_mode,
        }
    }

    /// Use a different boundary oracle.
    #[must_use]
    pub fn with_oracle<'a>(self, oracle: &'a dyn BoundaryOracle) -> Segmenter<'a>
    where
        'd: 'a,
    {
        Segmenter {
            dictionary: self.dictionary,
            oracle,
            safe_mode: self.safe_mode,
        }
    }

    /// Use different safe-mode chunking parameters.
    #[must_use]
    pub fn with_safe_mode(self, safe_mode: SafeMode) -> Self {
        Self { safe_mode, ..self }
    }

    /// The safe-mode parameters in use.
    #[must_use]
    pub fn safe_mode(&self) -> &SafeMode {
        &self.safe_mode
    }

    /// Lazy token stream over the whole of `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary oracle breaks its contract.
    pub fn tokens<'t>(&self, text: &'t str) -> Result<Tokens<'t, 'd>> {
        Tokens::new(text, self.dictionary, self.oracle)
    }

    /// Segment `text` into words.
    ///
    /// With `safe_mode`, long text is chunked first (see [`SafeMode`]);
    /// otherwise it is segmented in one pass. Either way the tokens
    /// concatenate back to `text`, and empty text gives no tokens.
    ///
    /// # Errors
    ///
    /// Returns an error only if the dictionary or boundary oracle breaks its
    /// contract.
    pub fn segment<'t>(&self, text: &'t str, safe_mode: bool) -> Result<Vec<&'t str>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let tokens = if safe_mode {
            let chunks = self.safe_mode.chunks(text, self.dictionary, self.oracle)?;
            let mut tokens = Vec::new();
            for &chunk in &chunks {
                for token in self.tokens(chunk)? {
                    tokens.push(token?);
                }
            }
            log::debug!("segmented {} chunks", chunks.len());
            tokens
        } else {
            self.tokens(text)?.collect::<Result<Vec<_>>>()?
        };

        log::debug!("segmented {} bytes into {} tokens", text.len(), tokens.len());
        Ok(tokens)
    }
}

impl std::fmt::Debug for Segmenter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("safe_mode", &self.safe_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::CharBoundaries;
    use crate::dict::Trie;

    #[test]
    fn test_default_segmenter() {
        let segmenter = Segmenter::new();
        let tokens = segmenter.segment("กินข้าว", false).unwrap();
        assert_eq!(tokens.concat(), "กินข้าว");
        assert_eq!(tokens, vec!["กินข้าว"]);
    }

    #[test]
    fn test_from_dictionary() {
        let dict = Trie::new(["กิน", "ข้าว"]);
        let segmenter = Segmenter::from_dictionary(&dict);
        assert!(std::ptr::eq(
            std::ptr::from_ref(segmenter.dictionary).cast::<()>(),
            std::ptr::from_ref(&dict).cast::<()>(),
        ));
        assert_eq!(segmenter.safe_mode(), &SafeMode::default());
        assert_eq!(segmenter.segment("กินข้าว", false).unwrap(), vec!["กิน", "ข้าว"]);
    }

    #[test]
    fn test_empty_text() {
        let segmenter = Segmenter::new();
        assert!(segmenter.segment("", false).unwrap().is_empty());
        assert!(segmenter.segment("", true).unwrap().is_empty());
    }

    #[test]
    fn test_safe_mode_matches_direct_on_short_text() {
        let dict = Trie::new(["กิน", "ข้าว", "น้ำ"]);
        let segmenter = Segmenter::new().with_dictionary(&dict);
        let text = "กินข้าวกินน้ำ";
        assert_eq!(
            segmenter.segment(text, true).unwrap(),
            segmenter.segment(text, false).unwrap()
        );
    }

    #[test]
    fn test_safe_mode_long_text() {
        let dict = Trie::new(["กิน", "ข้าว"]);
        let segmenter = Segmenter::new()
            .with_dictionary(&dict)
            .with_oracle(&CharBoundaries)
            .with_safe_mode(SafeMode::new(10, 4, 4).unwrap());
        let text = "กินข้าว".repeat(10);
        let tokens = segmenter.segment(&text, true).unwrap();
        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn test_lazy_tokens() {
        let segmenter = Segmenter::new();
        let mut tokens = segmenter.tokens("กินข้าว").unwrap();
        assert_eq!(tokens.next().unwrap().unwrap(), "กินข้าว");
        assert!(tokens.next().is_none());
    }
}
