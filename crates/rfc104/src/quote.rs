// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell quoting for rendered values

/// Characters that never need quoting
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '=')
}

/// Quote a value for a POSIX shell
///
/// Safe strings pass through. Anything else is single-quoted, with each
/// embedded `'` written as `'"'"'`.
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.chars().all(is_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
