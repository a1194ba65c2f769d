//! Property-based tests for word segmentation.
//!
//! These tests verify the segmentation invariants:
//! - Lossless: tokens concatenate back to the input
//! - Non-empty: no token is empty
//! - Boundaries: direct-mode cuts only fall on legal cluster boundaries
//! - Deterministic: same input, same output
//! - Short text: safe mode equals direct mode below the chunking threshold

use proptest::prelude::*;
use kham::{BoundaryOracle, CharBoundaries, SafeMode, Segmenter, ThaiClusters, Trie};

// =============================================================================
// Test Generators
// =============================================================================

/// Thai letters, vowels and marks mixed with Latin, digits and whitespace.
fn thai_like_text(max: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!(
        "[กขคงจชดตทนบปผพฟมยรลวสหอะาำิีึืุูเแโใไ่้๊๋็์ัa-z0-9 ,.\\n-]{{0,{max}}}"
    ))
    .unwrap()
}

/// Concatenations of dictionary words, unknown syllables and spaces.
fn wordy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "กิน", "ข้าว", "กินข้าว", "น้ำ", "เย็น", "ข้าวเย็น", "ฟฟ", "ก", " ", "abc", "12",
        ]),
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

fn small_dict() -> Trie {
    Trie::new(["กิน", "ข้าว", "กินข้าว", "น้ำ", "เย็น", "ข้าวเย็น", "กข"])
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn lossless(tokens: &[&str], text: &str) -> bool {
    tokens.concat() == text
}

fn no_empty_tokens(tokens: &[&str]) -> bool {
    tokens.iter().all(|t| !t.is_empty())
}

fn cuts_on_boundaries(tokens: &[&str], text: &str, oracle: &dyn BoundaryOracle) -> bool {
    let boundaries = oracle.boundaries(text).unwrap();
    let mut offset = 0;
    tokens.iter().all(|t| {
        offset += t.len();
        boundaries.contains(offset)
    })
}

// =============================================================================
// Direct Mode
// =============================================================================

proptest! {
    #[test]
    fn direct_lossless_default_dictionary(text in thai_like_text(300)) {
        let tokens = kham::segment(&text, None, false).unwrap();
        prop_assert!(lossless(&tokens, &text));
        prop_assert!(no_empty_tokens(&tokens));
    }

    #[test]
    fn direct_lossless_small_dictionary(text in wordy_text()) {
        let dict = small_dict();
        let tokens = Segmenter::new()
            .with_dictionary(&dict)
            .with_oracle(&CharBoundaries)
            .segment(&text, false)
            .unwrap();
        prop_assert!(lossless(&tokens, &text));
        prop_assert!(no_empty_tokens(&tokens));
    }

    #[test]
    fn direct_respects_clusters(text in thai_like_text(200)) {
        let tokens = kham::segment(&text, None, false).unwrap();
        prop_assert!(cuts_on_boundaries(&tokens, &text, &ThaiClusters));
    }

    #[test]
    fn direct_is_deterministic(text in wordy_text()) {
        let first = kham::segment(&text, None, false).unwrap();
        let second = kham::segment(&text, None, false).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lazy_tokens_match_eager(text in wordy_text()) {
        let segmenter = Segmenter::new();
        let lazy: Vec<&str> = segmenter
            .tokens(&text)
            .unwrap()
            .collect::<kham::Result<_>>()
            .unwrap();
        prop_assert_eq!(lazy, segmenter.segment(&text, false).unwrap());
    }
}

// =============================================================================
// Safe Mode
// =============================================================================

proptest! {
    #[test]
    fn safe_lossless_default_window(text in thai_like_text(600)) {
        let tokens = kham::segment(&text, None, true).unwrap();
        prop_assert!(lossless(&tokens, &text));
        prop_assert!(no_empty_tokens(&tokens));
    }

    #[test]
    fn safe_lossless_small_window(text in wordy_text()) {
        let dict = small_dict();
        let mode = SafeMode::new(12, 5, 5).unwrap();
        let segmenter = Segmenter::new()
            .with_dictionary(&dict)
            .with_oracle(&CharBoundaries)
            .with_safe_mode(mode);

        let chunks = mode.chunks(&text, &dict, &CharBoundaries).unwrap();
        prop_assert!(lossless(&chunks, &text));
        prop_assert!(no_empty_tokens(&chunks));

        let tokens = segmenter.segment(&text, true).unwrap();
        prop_assert!(lossless(&tokens, &text));
    }

    #[test]
    fn safe_equals_direct_below_threshold(text in thai_like_text(139)) {
        prop_assume!(text.chars().count() < SafeMode::default().threshold());
        prop_assert_eq!(
            kham::segment(&text, None, true).unwrap(),
            kham::segment(&text, None, false).unwrap()
        );
    }

    #[test]
    fn safe_is_deterministic(text in thai_like_text(400)) {
        let first = kham::segment(&text, None, true).unwrap();
        let second = kham::segment(&text, None, true).unwrap();
        prop_assert_eq!(first, second);
    }
}
