//! Snippet extraction around a case-insensitive match.

/// Prefix length used when the text does not contain the query.
pub const SNIPPET_MAX_LEN: usize = 100;

/// Characters of context kept before a match.
const CONTEXT_BEFORE: usize = 30;

/// Characters of context kept after a match.
const CONTEXT_AFTER: usize = 50;

const ELLIPSIS: char = '…';

/// Extracts a highlighted snippet with the default prefix length.
#[must_use]
pub fn snippet(text: &str, query: &str) -> String {
    snippet_with_limit(text, query, SNIPPET_MAX_LEN)
}

/// Extracts a snippet of `text` around the first case-insensitive
/// occurrence of `query`.
///
/// With no match the result is a prefix of `max_len` characters, with an
/// ellipsis only when the text was actually truncated. With a match the
/// snippet spans from [`CONTEXT_BEFORE`] characters ahead of the match to
/// [`CONTEXT_AFTER`] characters past it, ellipsized on whichever ends do
/// not touch the text boundary. Offsets are counted in characters, so a
/// code point is never split.
#[must_use]
pub fn snippet_with_limit(text: &str, query: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text_chars: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = text_chars.iter().map(|ch| lower_one(*ch)).collect();
    let query_chars: Vec<char> = query.chars().map(lower_one).collect();

    let Some(match_at) = find_subsequence(&lowered, &query_chars) else {
        let prefix: String = text_chars.iter().take(max_len).collect();
        if text_chars.len() > max_len {
            return format!("{prefix}{ELLIPSIS}");
        }
        return prefix;
    };

    let start = match_at.saturating_sub(CONTEXT_BEFORE);
    let end = (match_at + query_chars.len() + CONTEXT_AFTER).min(text_chars.len());
    let mut out = String::new();
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.extend(text_chars.iter().skip(start).take(end - start));
    if end < text_chars.len() {
        out.push(ELLIPSIS);
    }
    out
}

/// Per-character lowercase that keeps indices stable; multi-character
/// expansions keep their first character.
fn lower_one(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn find_subsequence(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&index| haystack.get(index..index + needle.len()) == Some(needle))
}
