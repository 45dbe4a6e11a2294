// src/core/scan.rs
// Marker scanning over raw log text. Stateless; all offsets are byte offsets
// into the caller's &str and always land on char boundaries.

use crate::config::consts::SIGIL;

/// Start offsets of every `marker` occurrence, in log order.
/// Each search resumes one character past the previous match.
pub fn find_all(text: &str, marker: &str) -> Vec<usize> {
    let mut out = Vec::new();
    let Some(first) = marker.chars().next() else {
        return out; // empty marker matches nothing
    };
    let step = first.len_utf8();

    let mut from = 0usize;
    while let Some(rel) = text.get(from..).and_then(|rest| rest.find(marker)) {
        let at = from + rel;
        out.push(at);
        from = at + step;
    }
    out
}

/// One role block: from a marker occurrence up to the next one (or end of text).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block<'a> {
    text: &'a str,
    marker_len: usize,
}

impl<'a> Block<'a> {
    /// Full span, marker included.
    pub fn text(&self) -> &'a str { self.text }

    /// Span after the marker.
    pub fn body(&self) -> &'a str {
        self.text.get(self.marker_len..).unwrap_or("")
    }
}

/// Split `text` into role blocks. The span before the first marker is a
/// header and is dropped; no marker at all yields no blocks.
pub fn split_blocks<'a>(text: &'a str, marker: &str) -> Vec<Block<'a>> {
    let starts = find_all(text, marker);
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            Block { text: &text[start..end], marker_len: marker.len() }
        })
        .collect()
}

/// Digits of the first `$<digits>` that is followed by whitespace.
pub fn sigil_amount(text: &str) -> Option<&str> {
    for (at, _) in text.match_indices(SIGIL) {
        let rest = &text[at + SIGIL.len_utf8()..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            continue;
        }
        if rest[digits..].chars().next().is_some_and(char::is_whitespace) {
            return Some(&rest[..digits]);
        }
    }
    None
}

/// Byte offset of the first `$name` in `text`.
pub fn find_sigil_name(text: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let mut pat = String::with_capacity(name.len() + 1);
    pat.push(SIGIL);
    pat.push_str(name);
    text.find(&pat)
}

/// Byte offset of the first `$name` not followed by a word character.
/// `$corn` does not match inside `$cornelius`.
pub fn find_sigil_word(text: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let mut pat = String::with_capacity(name.len() + 1);
    pat.push(SIGIL);
    pat.push_str(name);

    text.match_indices(pat.as_str()).map(|(at, _)| at).find(|&at| {
        text[at + pat.len()..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
    })
}
