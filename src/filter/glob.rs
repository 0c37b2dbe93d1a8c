//! Minimal glob dialect used by pattern rules.
//!
//! Only `*`, `?` and bracketed character classes are understood; braces are
//! literal unless they form a counted repetition. The compiled
//! expression is unanchored and case-insensitive, so `*.tmp` hits any path
//! containing a `.tmp` suffix segment and `temp/*` hits `temp/` anywhere.

use regex::{Regex, RegexBuilder};

use super::error::FilterError;

/// Translates a glob into regular expression source.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    while let Some(ch) = rest.chars().next() {
        let mut consumed = ch.len_utf8();
        match ch {
            '.' => out.push_str("\\."),
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            // Braces are literal unless they open a `{n}`, `{n,}` or `{n,m}` repetition.
            '{' => match repetition_len(rest) {
                Some(len) => {
                    out.push_str(&rest[..len]);
                    consumed = len;
                }
                None => out.push_str("\\{"),
            },
            '}' => out.push_str("\\}"),
            // Character classes and everything else pass through untouched.
            other => out.push(other),
        }
        rest = &rest[consumed..];
    }
    out
}

/// Length of the repetition operator at the start of `input`, if it is one.
fn repetition_len(input: &str) -> Option<usize> {
    let end = input.find('}')?;
    let body = &input[1..end];
    let is_count = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let valid = match body.split_once(',') {
        Some((min, max)) => is_count(min) && (max.is_empty() || is_count(max)),
        None => is_count(body),
    };
    valid.then_some(end + 1)
}

pub fn compile_glob(pattern: &str) -> Result<Regex, FilterError> {
    RegexBuilder::new(&glob_to_regex(pattern))
        .case_insensitive(true)
        .build()
        .map_err(|source| FilterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
