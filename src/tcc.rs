//! Thai Character Cluster (TCC) boundaries.
//!
//! A TCC is the smallest unit of Thai text that can never be split by a word
//! boundary: a consonant with its vowels and tone marks, a leading vowel with
//! the consonant it precedes, and so on.
//!
//! ## How It Works
//!
//! ```text
//! Text:     เ ก ี ่ ย ว ข ้ อ ง
//! Clusters: [เกี่ย][ว][ข้][อ][ง]
//! ```
//!
//! At each position the cluster patterns are tried in a fixed order and the
//! first one that matches decides the cluster length. When none matches, the
//! cluster is a single character. Every cluster end is a legal cut.
//!
//! In the pattern templates below `c` stands for any Thai consonant and `t`
//! for an optional tone mark. Patterns marked as needing a follower only
//! match when the next character starts a new syllable (a consonant or a
//! leading vowel) or the text ends.

use std::sync::LazyLock;

use regex::Regex;

use crate::boundary::BoundaryOracle;

const CONSONANT: &str = "[ก-ฮ]";
const TONE: &str = "[่-๋]?";

/// `(template, needs_follower)` in match priority order.
const TEMPLATES: &[(&str, bool)] = &[
    ("เc็c", false),
    ("เcctาะ", false),
    ("เccีtยะ", false),
    ("เccีtย", true),
    ("เccอะ", false),
    ("เcc็c", false),
    ("เcิc์c", false),
    ("เcิtc", false),
    ("เcีtยะ?", false),
    ("เcืtอะ?", false),
    ("เc[ิีุู]tย", true),
    ("เctา?ะ?", false),
    ("cัtวะ", false),
    ("c[ัื]tc[ุิะ]?", false),
    ("c[ิุู]์", false),
    ("c[ะ-ู]t", false),
    ("c็", false),
    ("ct[ะาำ]?", false),
    ("แc็c", false),
    ("แcc์", false),
    ("แctะ", false),
    ("แcc็c", false),
    ("แccc์", false),
    ("โctะ", false),
    ("[เ-ไ]ct", false),
];

struct ClusterRule {
    pattern: Regex,
    needs_follower: bool,
}

static RULES: LazyLock<Vec<ClusterRule>> = LazyLock::new(|| {
    TEMPLATES
        .iter()
        .map(|&(template, needs_follower)| {
            let body = template.replace('c', CONSONANT).replace('t', TONE);
            ClusterRule {
                pattern: Regex::new(&format!("^(?:{body})")).expect("cluster pattern is valid"),
                needs_follower,
            }
        })
        .collect()
});

/// Whether `rest` may follow a cluster that needs a follower.
fn starts_syllable(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some('\n') => rest.len() == 1,
        Some(c) => matches!(c, 'เ'..='ไ' | 'ก'..='ฮ'),
    }
}

/// Length in bytes of the cluster at the start of `text`, or `None` when no
/// rule matches.
fn cluster_len(text: &str) -> Option<usize> {
    RULES.iter().find_map(|rule| {
        let m = rule.pattern.find(text)?;
        if rule.needs_follower && !starts_syllable(&text[m.end()..]) {
            return None;
        }
        Some(m.end())
    })
}

/// Split `text` into Thai Character Clusters.
///
/// Non-Thai characters each form their own cluster.
///
/// ```rust
/// let clusters: Vec<&str> = kham::tcc::clusters("เกี่ยวข้อง").collect();
/// assert_eq!(clusters, ["เกี่ย", "ว", "ข้", "อ", "ง"]);
/// ```
pub fn clusters(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        let rest = &text[pos..];
        let first = rest.chars().next()?;
        let len = cluster_len(rest).unwrap_or(first.len_utf8());
        pos += len;
        Some(&rest[..len])
    })
}

/// Boundary oracle using Thai Character Cluster rules.
///
/// The default oracle of [`Segmenter`](crate::Segmenter).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThaiClusters;

impl BoundaryOracle for ThaiClusters {
    fn cut_offsets(&self, text: &str) -> Vec<usize> {
        let mut offsets = vec![0];
        let mut pos = 0;
        for cluster in clusters(text) {
            pos += cluster.len();
            offsets.push(pos);
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        clusters(text).collect()
    }

    #[test]
    fn test_leading_vowel_binds_consonant() {
        assert_eq!(split("เกี่ยวข้อง"), vec!["เกี่ย", "ว", "ข้", "อ", "ง"]);
    }

    #[test]
    fn test_consonant_with_vowel() {
        assert_eq!(split("กิน"), vec!["กิ", "น"]);
        assert_eq!(split("ข้าว"), vec!["ข้า", "ว"]);
    }

    #[test]
    fn test_follower_rule() {
        // เccีtย needs a following syllable start
        assert_eq!(split("เปลี่ยน")[0], "เปลี่ย");
        // followed by a non-Thai character it falls through to a shorter rule
        assert_ne!(split("เปลี่ยa")[0], "เปลี่ย");
    }

    #[test]
    fn test_non_thai_single_chars() {
        assert_eq!(split("ab1"), vec!["a", "b", "1"]);
    }

    #[test]
    fn test_offsets_cover_text() {
        let text = "ภาษาไทยง่ายนิดเดียว";
        let offsets = ThaiClusters.cut_offsets(text);
        assert_eq!(offsets.first(), Some(&0));
        assert_eq!(offsets.last(), Some(&text.len()));
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(ThaiClusters.boundaries(text).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(ThaiClusters.cut_offsets(""), vec![0]);
        assert_eq!(split("").len(), 0);
    }
}
