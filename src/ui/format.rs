//! Small text-shaping helpers shared by view model construction.

/// Clips `text` to at most `max_chars` characters, appending `...` when
/// anything was cut.
///
/// Operates on character counts, not bytes, so multi-byte content is never
/// split mid-character.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{clipped}...")
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn short_text_passes_through_unchanged() {
        assert_eq!(excerpt("hello", 10), "hello");
        assert_eq!(excerpt("hello", 5), "hello");
    }

    #[test]
    fn long_text_is_clipped_with_ellipsis() {
        assert_eq!(excerpt("hello world", 5), "hello...");
    }

    #[test]
    fn clipping_respects_character_boundaries() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
        assert_eq!(excerpt("日記を書く", 2), "日記...");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(excerpt("", 10), "");
    }
}
