//! Character classification for the word/hyphen candidate stream.

/// A "word space" — counts toward `space_count` for shrinkability.
/// ASCII space U+0020 only.
pub fn is_word_space(c: char) -> bool {
    c == '\u{0020}'
}

/// A "line-end space" — a Unicode space that disappears at end of line:
/// U+000A, U+0020, U+1680, U+2000-U+200A except U+2007, U+205F, U+3000.
///
/// U+1680 OGHAM SPACE MARK is included here as a line-end space, but its
/// *overhang* handling is left unresolved; see the "Open Question
/// decisions" section of `DESIGN.md`.
pub fn is_line_end_space(c: char) -> bool {
    // U+2007 FIGURE SPACE, U+205F MEDIUM MATHEMATICAL SPACE and U+3000
    // IDEOGRAPHIC SPACE are Unicode space separators but are fixed-width
    // and must not collapse at end of line, so they're excluded here.
    matches!(
        c,
        '\u{000A}' | '\u{0020}' | '\u{1680}' | '\u{2000}'..='\u{2006}' | '\u{2008}'..='\u{200A}'
    )
}

/// Whether the tab character U+0009 triggers tab-stop handling.
pub fn is_tab(c: char) -> bool {
    c == '\u{0009}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_end_spaces_cover_the_unicode_set() {
        assert!(is_line_end_space(' '));
        assert!(is_line_end_space('\u{1680}'));
        assert!(is_line_end_space('\u{2000}'));
        assert!(is_line_end_space('\u{2009}'));
        assert!(!is_line_end_space('\u{2007}'));
        assert!(!is_line_end_space('\u{205F}'));
        assert!(!is_line_end_space('\u{3000}'));
        assert!(!is_line_end_space('a'));
    }

    #[test]
    fn only_ascii_space_counts_as_word_space() {
        assert!(is_word_space(' '));
        assert!(!is_word_space('\u{00A0}'));
        assert!(!is_word_space('\t'));
    }
}
