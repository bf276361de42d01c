//! SRL phrase parser.
//!
//! Turns a raw English-like phrase into a resolved command sequence.
//!
//! # Syntax Overview
//!
//! ```text
//! capture (letter once or more) as "color", literally "."
//! ──┬──── ───────────┬───────── ─┬ ───┬───  ───┬──── ─┬─
//!   │                │           │    │        │      └── Quoted literal (opaque)
//!   │                │           │    └── Parameter for `capture`
//!   │                │           └── Filler word, stripped before binding
//!   │                └── Parenthesized sub-query
//!   └── Command, recognized by longest multi-word match
//! ```
//!
//! Commas are soft separators, a trailing `;` is allowed, and command words
//! match case-insensitively.

pub mod matcher;
pub mod structure;


use std::collections::VecDeque;

use crate::ast::{Resolved, Token};
use crate::error::SrlResult;
use matcher::match_command;

/// Parse a complete SRL phrase into a resolved command sequence.
pub fn parse(query: &str) -> SrlResult<Vec<Resolved>> {
    let query = normalize(query);
    let tokens = structure::tokenize(&query)?;
    resolve(tokens)
}

/// Canonical form of a query: surrounding whitespace and the optional
/// terminating `;` removed. Also the cache key for compiled queries.
pub(crate) fn normalize(query: &str) -> String {
    query.trim().trim_end_matches(';').trim_end().to_string()
}

/// Resolve a token tree recursively, splicing recognized commands in place.
///
/// Text that fails to match a command is split at its first word; the word
/// stays behind as residual text (a parameter candidate for the preceding
/// command) and the remainder is queued for another matching round.
fn resolve(tokens: Vec<Token>) -> SrlResult<Vec<Resolved>> {
    let mut work: VecDeque<Token> = tokens.into();
    let mut out = Vec::new();

    while let Some(token) = work.pop_front() {
        match token {
            Token::Group(inner) => out.push(Resolved::Group(resolve(inner)?)),
            Token::Literal(value) => out.push(Resolved::Literal(value)),
            Token::Text(raw) => {
                // Commas are soft separators.
                let cleaned = raw.replace(',', " ");
                let cleaned = cleaned.trim();
                if cleaned.is_empty() {
                    continue;
                }

                match match_command(cleaned) {
                    Ok((spec, leftover)) => {
                        out.push(Resolved::Command(spec));
                        if !leftover.is_empty() {
                            work.push_front(Token::Text(leftover));
                        }
                    }
                    Err(_) => {
                        // No command at the head. Keep the first word as a
                        // parameter candidate and requeue the rest.
                        let mut split = cleaned.splitn(2, char::is_whitespace);
                        if let Some(head) = split.next() {
                            out.push(Resolved::Text(head.to_string()));
                        }
                        if let Some(rest) = split.next() {
                            let rest = rest.trim();
                            if !rest.is_empty() {
                                work.push_front(Token::Text(rest.to_string()));
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(out)
}
