//! Object/array literal layout shared by every EDSL construct.
//!
//! Every helper returns text whose first line is unindented (the caller has
//! already positioned it) and whose later lines carry absolute indentation for
//! the given nesting `level`.

use crate::config::RenderOptions;
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

const INDENT: &str = "  ";

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern compiles"));

pub fn pad(level: usize) -> String {
    INDENT.repeat(level)
}

/// Single-quoted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Object key: bare when it is an identifier, quoted otherwise.
pub fn key(name: &str) -> String {
    if IDENTIFIER_RE.is_match(name) {
        name.to_string()
    } else {
        quote(name)
    }
}

// Largest magnitude below which every integral f64 is exact.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Number literal. Integral floats print without a fraction (`100.0` as `100`).
pub fn number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_F64 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// A rendered value, possibly degraded with a diagnostic for the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub diagnostic: Option<String>,
}

impl Fragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            diagnostic: None,
        }
    }

    pub fn degraded(text: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            diagnostic: Some(diagnostic.into()),
        }
    }

    /// The fragment as a list/object member: value, comma, and any comment.
    pub fn member(&self, options: &RenderOptions) -> String {
        match &self.diagnostic {
            None => format!("{},", self.text),
            Some(diag) if options.legacy_error_comments => format!("{} //{},", self.text, diag),
            Some(diag) => format!("{}, //{}", self.text, diag),
        }
    }
}

/// `{ key: value, ... }` with one member per line, in the given order.
pub fn object(entries: &[(String, Fragment)], level: usize, options: &RenderOptions) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }
    let mut out = String::from("{\n");
    for (name, value) in entries {
        out.push_str(&format!("{}{}: {}\n", pad(level + 1), key(name), value.member(options)));
    }
    out.push_str(&pad(level));
    out.push('}');
    out
}

/// `[ value, ... ]` with one member per line, each followed by a comma.
pub fn array(items: &[Fragment], level: usize, options: &RenderOptions) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let mut out = String::from("[\n");
    for item in items {
        out.push_str(&format!("{}{}\n", pad(level + 1), item.member(options)));
    }
    out.push_str(&pad(level));
    out.push(']');
    out
}

/// `[ value, ..., value ]` with separators only between members.
pub fn separated(items: &[String], level: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let body = items
        .iter()
        .map(|item| format!("{}{}", pad(level + 1), item))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("[\n{}\n{}]", body, pad(level))
}

/// Arbitrary JSON as an EDSL literal. Object keys come out sorted.
pub fn json(value: &Value, level: usize) -> String {
    let options = RenderOptions::default();
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number(n),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<Fragment> = items
                .iter()
                .map(|v| Fragment::plain(json(v, level + 1)))
                .collect();
            array(&items, level, &options)
        }
        Value::Object(map) => {
            let mut entries: Vec<(String, Fragment)> = map
                .iter()
                .map(|(k, v)| (k.clone(), Fragment::plain(json(v, level + 1))))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            object(&entries, level, &options)
        }
    }
}
