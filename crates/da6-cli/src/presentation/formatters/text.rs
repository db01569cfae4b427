/// Truncation counts chars, not bytes, so CJK text never splits inside
/// a code point.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Collapse a multi-line field to one normalized line, then truncate.
pub fn inline(text: &str, max_chars: usize) -> String {
    let normalized = text
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    truncate(&normalized, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(truncate("夜貓子", 10), "夜貓子");
    }

    #[test]
    fn long_text_gains_an_ellipsis() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Four CJK chars at a five-char budget keep only two plus dots.
        assert_eq!(truncate("城市夜景觀察", 5), "城市...");
    }

    #[test]
    fn inline_collapses_newlines() {
        assert_eq!(inline("one\ntwo\r\nthree", 40), "one two three");
    }
}
