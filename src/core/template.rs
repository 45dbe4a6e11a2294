// src/core/template.rs
// `{token}` placeholders in templated log messages.

use crate::config::consts::{TOKEN_CLOSE, TOKEN_OPEN};
use crate::core::fields;
use crate::error::{Result, TallyError};

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Left-to-right `{word}` tokens as `(offset, "{word}")`. Braces around
/// anything else (`{}`, `{a b}`, unbalanced) are plain text.
pub struct Placeholders<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let b = self.s.as_bytes();
        while let Some(rel) = self.s.get(self.pos..)?.find(TOKEN_OPEN) {
            let open = self.pos + rel;
            let name_len = b[open + 1..].iter().take_while(|&&c| is_word_byte(c)).count();
            let close = open + 1 + name_len;
            if name_len > 0 && b.get(close) == Some(&(TOKEN_CLOSE as u8)) {
                self.pos = close + 1;
                return Some((open, &self.s[open..=close]));
            }
            self.pos = open + 1;
        }
        None
    }
}

pub fn placeholders(message: &str) -> Placeholders<'_> {
    Placeholders { s: message, pos: 0 }
}

/// `{player_name}` → `player_name`
pub fn token_name(token: &str) -> &str {
    &token[1..token.len() - 1]
}

pub fn is_resolved(message: &str) -> bool {
    placeholders(message).next().is_none()
}

/// Substitute every placeholder with its value from `span`.
///
/// One pass over `message`: inserted values are never scanned again, so a
/// value that itself looks like `{token}` stays literal.
pub fn resolve(message: &str, span: &str) -> Result<String> {
    let mut out = String::with_capacity(message.len() + 16);
    let mut seen: Vec<(&str, &str)> = Vec::new();
    let mut last = 0usize;

    for (at, token) in placeholders(message) {
        let value = match seen.iter().find(|(t, _)| *t == token) {
            Some(&(_, v)) => v,
            None => {
                let v = fields::extract(token_name(token), span).map_err(|_| {
                    TallyError::UnresolvedPlaceholder {
                        token: s!(token),
                        message: s!(message),
                    }
                })?;
                seen.push((token, v));
                v
            }
        };
        out.push_str(&message[last..at]);
        out.push_str(value);
        last = at + token.len();
    }
    out.push_str(&message[last..]);
    Ok(out)
}
