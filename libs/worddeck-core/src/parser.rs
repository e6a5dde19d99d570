//! Plain-text word-list parser.
//!
//! # Format
//! ```text
//! boy[bɔ i]n. 男孩,少年,家伙
//! girl[ɡɜːl]n. 女孩,姑娘
//! hello world
//! standalone
//! ```
//!
//! One entry per line. The bracketed form carries a phonetic transcription.
//! A line without a usable bracket pair is split at its first space into
//! headword and meaning, and a line with no space at all becomes a bare
//! headword. Every non-blank line yields exactly one entry; malformed input
//! degrades through the fallbacks instead of failing.

use crate::types::Entry;

/// Parse word-list content into entries, in line order.
///
/// Lines are split on any newline convention and trimmed; blank lines yield
/// nothing.
pub fn parse_content(content: &str) -> Vec<Entry> {
    content.split(['\n', '\r']).filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some((word, phonetic, meaning)) = split_bracketed(line) {
        return Some(Entry::new(word, Some(phonetic), meaning));
    }

    match line.split_once(' ') {
        Some((word, meaning)) => Some(Entry::new(word, None, meaning)),
        None => Some(Entry::new(line, None, "")),
    }
}

/// Scan for `word[phonetic]meaning`. All three parts must be non-empty:
/// a leading `[` is absorbed into the word and the scan retries from the
/// next `[`, and a `]` that would leave an empty phonetic or empty meaning
/// is skipped in favor of a later one.
fn split_bracketed(line: &str) -> Option<(&str, &str, &str)> {
    let open = match line.find('[') {
        Some(0) => 1 + line[1..].find('[')?,
        Some(idx) => idx,
        None => return None,
    };

    let mut from = open + 1;
    loop {
        let close = from + line[from..].find(']')?;
        if close > open + 1 && close + 1 < line.len() {
            let word = line[..open].trim();
            let phonetic = &line[open + 1..close];
            let meaning = line[close + 1..].trim();
            return Some((word, phonetic, meaning));
        }
        from = close + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bracketed_line() {
        let entries = parse_content("boy[bɔ i]n. 男孩");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "boy");
        assert_eq!(entries[0].phonetic.as_deref(), Some("bɔ i"));
        assert_eq!(entries[0].meaning, "n. 男孩");
    }

    #[test]
    fn parse_first_space_fallback() {
        let entries = parse_content("hello world");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "hello");
        assert_eq!(entries[0].phonetic, None);
        assert_eq!(entries[0].meaning, "world");
    }

    #[test]
    fn parse_single_token_fallback() {
        let entries = parse_content("standalone");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "standalone");
        assert_eq!(entries[0].phonetic, None);
        assert_eq!(entries[0].meaning, "");
    }

    #[test]
    fn skip_blank_lines() {
        let entries = parse_content("a[b]c\n\n  \nd[e]f");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "a");
        assert_eq!(entries[1].text, "d");
    }

    #[test]
    fn phonetic_kept_verbatim() {
        let entries = parse_content("word[ p ]meaning");
        assert_eq!(entries[0].phonetic.as_deref(), Some(" p "));
    }

    #[test]
    fn word_and_meaning_trimmed() {
        let entries = parse_content("  boy [bɔ i]  n. 男孩  ");
        assert_eq!(entries[0].text, "boy");
        assert_eq!(entries[0].meaning, "n. 男孩");
    }

    #[test]
    fn meaning_kept_untrimmed_after_space_split() {
        let entries = parse_content("ab  cd");
        assert_eq!(entries[0].text, "ab");
        assert_eq!(entries[0].meaning, " cd");
    }

    #[test]
    fn unclosed_bracket_falls_back_to_space_split() {
        let entries = parse_content("foo[bar baz");
        assert_eq!(entries[0].text, "foo[bar");
        assert_eq!(entries[0].phonetic, None);
        assert_eq!(entries[0].meaning, "baz");
    }

    #[test]
    fn missing_meaning_falls_back() {
        let entries = parse_content("boy[bɔ]");
        assert_eq!(entries[0].text, "boy[bɔ]");
        assert_eq!(entries[0].phonetic, None);
        assert_eq!(entries[0].meaning, "");
    }

    #[test]
    fn empty_phonetic_falls_back() {
        let entries = parse_content("a[]b");
        assert_eq!(entries[0].text, "a[]b");
        assert_eq!(entries[0].phonetic, None);
    }

    #[test]
    fn leading_bracket_retries_from_next_open() {
        let entries = parse_content("[ab[cd]ef");
        assert_eq!(entries[0].text, "[ab");
        assert_eq!(entries[0].phonetic.as_deref(), Some("cd"));
        assert_eq!(entries[0].meaning, "ef");
    }

    #[test]
    fn meaning_may_contain_close_bracket() {
        let entries = parse_content("a[b]c]d");
        assert_eq!(entries[0].phonetic.as_deref(), Some("b"));
        assert_eq!(entries[0].meaning, "c]d");
    }

    #[test]
    fn mixed_line_endings() {
        let entries = parse_content("a[b]c\r\nd[e]f\rg[h]i");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].text, "g");
    }

    #[test]
    fn fresh_ids_per_parse() {
        let first = parse_content("boy[bɔ i]n. 男孩");
        let second = parse_content("boy[bɔ i]n. 男孩");
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(parse_content("").is_empty());
        assert!(parse_content(" \n\t\n").is_empty());
    }
}
