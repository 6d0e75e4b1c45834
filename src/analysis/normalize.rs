//! Whitespace normalization shared by training and prediction.

/// Collapse every run of whitespace into one space and trim both ends.
///
/// ```
/// use twosense::analysis::normalize_sentence;
///
/// assert_eq!(normalize_sentence("  the   rubbish\tbin \n"), "the rubbish bin");
/// ```
pub fn normalize_sentence(sentence: &str) -> String {
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Characters that end a line besides `\n`.
///
/// `\r\n` counts as a single break. Vertical tab, form feed, the file, group
/// and record separators, NEL and the Unicode line and paragraph separators
/// break lines too.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on every line-break character.
///
/// Unlike [`str::lines`], a lone `\r` and the other separators in
/// `LINE_BREAKS` end a line. A trailing break does not add an empty line.
///
/// ```
/// use twosense::analysis::split_lines;
///
/// assert_eq!(split_lines("a\rb\u{2028}c\r\n"), vec!["a", "b", "c"]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !LINE_BREAKS.contains(&ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Normalize a batch of sentences, preserving order and length.
pub fn normalize_sentences<S: AsRef<str>>(sentences: &[S]) -> Vec<String> {
    sentences
        .iter()
        .map(|s| normalize_sentence(s.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(normalize_sentences(&[" a   b "]), vec!["a b".to_string()]);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize_sentence(""), "");
        assert_eq!(normalize_sentence(" \t\n "), "");
    }

    #[test]
    fn test_split_lines_on_every_break() {
        assert_eq!(split_lines("one\ntwo\r\nthree\rfour"), vec!["one", "two", "three", "four"]);
        assert_eq!(split_lines("a\u{0b}b\u{0c}c\u{1c}d"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\u{85}b\u{2028}c\u{2029}d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_edges() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("only"), vec!["only"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
        assert_eq!(split_lines("\n\nb"), vec!["", "", "b"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\r\n"), vec!["a", ""]);
    }

    #[test]
    fn test_length_preserving_and_idempotent() {
        let inputs = vec![
            "The  director\tspoke.".to_string(),
            "".to_string(),
            "\u{00a0}overtime pay\r\n".to_string(),
        ];
        let once = normalize_sentences(&inputs);
        assert_eq!(once.len(), inputs.len());
        assert_eq!(normalize_sentences(&once), once);
        assert_eq!(once[0], "The director spoke.");
        assert_eq!(once[2], "overtime pay");
    }
}
