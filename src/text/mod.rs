//! Grapheme-aware helpers for single-line text editing and truncation.

use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Where characters are dropped when a value exceeds its maximum length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TruncationMode {
    /// Drop the leading excess, keeping the last `max_count` graphemes.
    Head,
    /// Keep a symmetric head and tail joined by `…`. The ellipsis counts
    /// towards the budget; the head gets the extra grapheme when the
    /// remainder is odd.
    Middle,
    /// Drop the trailing excess, keeping the first `max_count` graphemes.
    Tail,
}

pub const ELLIPSIS: &str = "…";

/// Clamps `text` to at most `max_count` grapheme clusters.
///
/// A `max_count` of zero means unbounded. Text within the budget is returned
/// borrowed, unchanged.
pub fn truncate(text: &str, max_count: usize, mode: TruncationMode) -> Cow<str> {
    if max_count == 0 {
        return Cow::Borrowed(text);
    }
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_count {
        return Cow::Borrowed(text);
    }

    match mode {
        TruncationMode::Tail => Cow::Owned(graphemes[..max_count].concat()),
        TruncationMode::Head => Cow::Owned(graphemes[graphemes.len() - max_count..].concat()),
        TruncationMode::Middle => {
            if max_count == 1 {
                return Cow::Owned(ELLIPSIS.into());
            }
            let keep = max_count - 1;
            let head_len = keep - keep / 2;
            let tail_len = keep / 2;
            let mut truncated = graphemes[..head_len].concat();
            truncated.push_str(ELLIPSIS);
            truncated.push_str(&graphemes[graphemes.len() - tail_len..].concat());
            Cow::Owned(truncated)
        }
    }
}

pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset of the start of the `index`-th grapheme; the text length when
/// `index` is past the end.
pub fn byte_of_grapheme(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or_else(|| text.len())
}

/// Inserts `character` before the `index`-th grapheme.
pub fn insert_char(text: &mut String, index: usize, character: char) {
    let offset = byte_of_grapheme(text, index);
    text.insert(offset, character);
}

/// Removes the `index`-th grapheme cluster, if there is one.
pub fn remove_grapheme(text: &mut String, index: usize) {
    let start = byte_of_grapheme(text, index);
    let end = byte_of_grapheme(text, index + 1);
    if start < end {
        text.replace_range(start..end, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_within_budget_is_borrowed() {
        assert!(matches!(
            truncate("hello", 5, TruncationMode::Tail),
            Cow::Borrowed("hello")
        ));
        assert!(matches!(
            truncate("anything goes", 0, TruncationMode::Middle),
            Cow::Borrowed("anything goes")
        ));
    }

    #[test]
    fn truncate_tail_keeps_the_first_graphemes() {
        assert_eq!(truncate("hello world", 5, TruncationMode::Tail), "hello");
    }

    #[test]
    fn truncate_head_keeps_the_last_graphemes() {
        assert_eq!(truncate("hello world", 5, TruncationMode::Head), "world");
    }

    #[test]
    fn truncate_middle_elides_the_centre() {
        assert_eq!(truncate("hello world", 5, TruncationMode::Middle), "he…ld");
        assert_eq!(truncate("hello world", 4, TruncationMode::Middle), "he…d");

        // A budget of one leaves room only for the ellipsis; the result must
        // be owned so callers can tell the value was rewritten.
        let clamped = truncate("hello world", 1, TruncationMode::Middle);
        assert!(matches!(clamped, Cow::Owned(_)));
        assert_eq!(clamped, "…");
    }

    #[test]
    fn truncate_never_exceeds_the_budget() {
        for mode in &[
            TruncationMode::Head,
            TruncationMode::Middle,
            TruncationMode::Tail,
        ] {
            for max_count in 1..8 {
                let truncated = truncate("cafe\u{301} au lait", max_count, *mode);
                assert!(grapheme_count(&truncated) <= max_count);
            }
        }
    }

    #[test]
    fn truncate_counts_grapheme_clusters_not_chars() {
        // "é" as 'e' + combining acute is a single grapheme.
        let text = "e\u{301}abcd";
        assert_eq!(truncate(text, 2, TruncationMode::Tail), "e\u{301}a");
    }

    #[test]
    fn insert_and_remove_at_grapheme_boundaries() {
        let mut text = String::from("e\u{301}b");
        insert_char(&mut text, 1, 'a');
        assert_eq!(text, "e\u{301}ab");
        remove_grapheme(&mut text, 0);
        assert_eq!(text, "ab");
        remove_grapheme(&mut text, 5);
        assert_eq!(text, "ab");
    }

    #[test]
    fn byte_of_grapheme_past_the_end() {
        assert_eq!(byte_of_grapheme("ab", 7), 2);
    }
}
