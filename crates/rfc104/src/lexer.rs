// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort command string tokenizer
//!
//! Splits on whitespace, keeping single- or double-quoted runs together
//! and stripping the quotes. Adjacent runs join into one token, so the
//! `'"'"'` sequence written by [`crate::quote`] reads back correctly.
//! An unquoted `!` is always a token of its own, glued or not.
//!
//! Not a shell lexer: backslash escapes, escaped quotes inside a quoted
//! run, and unterminated quotes are taken literally.

const DELIMITER_CHAR: char = '!';

/// One lexed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Some part of the token was inside quotes
    pub quoted: bool,
}

impl Token {
    /// An unquoted token equal to `s`
    pub fn is_bare(&self, s: &str) -> bool {
        !self.quoted && self.text == s
    }
}

pub fn lex(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_token = true;
                quoted = true;
            }
            None if c == DELIMITER_CHAR => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    in_token = false;
                    quoted = false;
                }
                tokens.push(Token {
                    text: c.to_string(),
                    quoted: false,
                });
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    in_token = false;
                    quoted = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(Token {
            text: current,
            quoted,
        });
    }
    tokens
}

/// Token texts only
pub fn tokenize(input: &str) -> Vec<String> {
    lex(input).into_iter().map(|t| t.text).collect()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
