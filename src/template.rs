//! Placeholder substitution for `{{ name }}` tokens.
//!
//! This is a plain find-and-replace: no nesting, no loops, no escaping. A token
//! is `{{`, optional whitespace, one or more ASCII word characters, optional
//! whitespace, `}}`. Anything else that merely looks like a token is copied
//! through unchanged.

use std::collections::BTreeMap;
use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateData {
    values: BTreeMap<String, String>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for TemplateData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = TemplateData::new();
        for (k, v) in iter {
            data.insert(k, v);
        }
        data
    }
}

/// Replaces every placeholder token in `template`. Tokens with no value in
/// `data` become the empty string.
pub fn render(template: &str, data: &TemplateData) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match match_token(candidate) {
            Some((name, consumed)) => {
                out.push_str(data.get(name).unwrap_or(""));
                rest = &candidate[consumed..];
            }
            None => {
                // Not a token here; emit one brace and rescan from the next char.
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Tries to read a token at the start of `s`, which begins with `{{`.
/// Returns the name and the number of bytes the token spans.
fn match_token(s: &str) -> Option<(&str, usize)> {
    let inner = &s[2..];
    let after_ws = inner.trim_start();
    let lead = inner.len() - after_ws.len();

    let name_len = after_ws
        .find(|c: char| !is_word_char(c))
        .unwrap_or(after_ws.len());
    if name_len == 0 {
        return None;
    }
    let name = &after_ws[..name_len];

    let tail = &after_ws[name_len..];
    let tail_trimmed = tail.trim_start();
    let trail = tail.len() - tail_trimmed.len();

    if !tail_trimmed.starts_with("}}") {
        return None;
    }

    Some((name, 2 + lead + name_len + trail + 2))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
