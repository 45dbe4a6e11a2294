// src/core/fields.rs
// Shallow field extraction: `"name":"value"` or `"name":token`.
// No nesting depth, no escapes. Values in these logs are flat and never
// carry the delimiters unescaped.

use crate::config::consts::{BARE_TERMINATORS, FIELD_ASSIGN, FIELD_QUOTE};
use crate::error::{Result, TallyError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    /// `"field":"..."`, up to the next quote.
    Quoted(&'a str),
    /// `"field":...`, up to the next `,` or `}`.
    Bare(&'a str),
}

impl<'a> Value<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Value::Quoted(s) | Value::Bare(s) => s,
        }
    }
}

/// The literal searched for: `"<field>":`
pub fn field_pattern(field: &str) -> String {
    let mut pat = String::with_capacity(field.len() + 3);
    pat.push(FIELD_QUOTE);
    pat.push_str(field);
    pat.push(FIELD_QUOTE);
    pat.push(FIELD_ASSIGN);
    pat
}

/// First value of `field` in `span`. An unterminated value runs to the end of `span`.
pub fn find_value<'a>(field: &str, span: &'a str) -> Option<Value<'a>> {
    let pat = field_pattern(field);
    let at = span.find(&pat)? + pat.len();
    let rest = &span[at..];

    if let Some(quoted) = rest.strip_prefix(FIELD_QUOTE) {
        let end = quoted.find(FIELD_QUOTE).unwrap_or(quoted.len());
        Some(Value::Quoted(&quoted[..end]))
    } else {
        let end = rest.find(BARE_TERMINATORS).unwrap_or(rest.len());
        Some(Value::Bare(&rest[..end]))
    }
}

pub fn extract<'a>(field: &str, span: &'a str) -> Result<&'a str> {
    find_value(field, span)
        .map(|v| v.as_str())
        .ok_or_else(|| TallyError::key_not_found(field))
}
