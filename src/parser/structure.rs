//! Structural tokenizer for SRL phrases.
//!
//! Splits a raw phrase into a [`Token`] tree: parenthesized spans nest,
//! quoted spans become opaque literals, everything else stays plain text.
//! Backslash escapes the following character, both inside and outside of
//! quotes, so escaped parentheses and quotes never count as syntax.

use nom::{
    branch::alt,
    character::complete::char,
    combinator::all_consuming,
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};

use crate::ast::Token;
use crate::error::{SrlError, SrlResult};

/// Tokenize a phrase into its structural tree.
///
/// A single outer parenthesis pair spanning the whole input is stripped once
/// before parsing, since it only restates the implicit top-level grouping.
/// Empty input yields an empty tree.
pub fn tokenize(input: &str) -> SrlResult<Vec<Token>> {
    let input = input.trim();
    let input = if outer_pair_spans(input) {
        &input[1..input.len() - 1]
    } else {
        input
    };

    match all_consuming(token_list)(input) {
        Ok((_, tokens)) => Ok(tokens),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            if e.input.starts_with('\'') || e.input.starts_with('"') {
                Err(SrlError::structural(format!(
                    "unterminated string literal near `{}`",
                    snippet(e.input)
                )))
            } else {
                Err(SrlError::structural("non-matching parenthesis found"))
            }
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(SrlError::structural("incomplete input"))
        }
    }
}

/// Parse a sequence of tokens. Text runs are trimmed; empty runs are dropped.
fn token_list(input: &str) -> IResult<&str, Vec<Token>> {
    let (rest, tokens) = many0(alt((group, quoted, text)))(input)?;

    let tokens = tokens
        .into_iter()
        .filter_map(|token| match token {
            Token::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Token::Text(trimmed.to_string()))
                }
            }
            other => Some(other),
        })
        .collect();

    Ok((rest, tokens))
}

/// Parse one parenthesized group. A missing closing parenthesis is a hard
/// failure so it aborts the whole scan instead of backtracking.
fn group(input: &str) -> IResult<&str, Token> {
    let (rest, tokens) = preceded(
        char('('),
        terminated(token_list, nom::combinator::cut(char(')'))),
    )(input)?;

    Ok((rest, Token::Group(tokens)))
}

/// Parse one quoted literal, `'...'` or `"..."`, honoring backslash escapes.
/// The literal value is unescaped and trimmed; it is opaque from here on.
fn quoted(input: &str) -> IResult<&str, Token> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, c)) if c == '\'' || c == '"' => c,
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Char))),
    };

    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == quote {
            let value = unescape(&input[1..i]).trim().to_string();
            return Ok((&input[i + 1..], Token::Literal(value)));
        }
    }

    // Ran off the end without a closing quote.
    Err(nom::Err::Failure(Error::new(input, ErrorKind::Char)))
}

/// Parse a plain text run up to the next unescaped structural character.
fn text(input: &str) -> IResult<&str, Token> {
    let mut escaped = false;
    let mut end = input.len();

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '(' | ')' | '\'' | '"' => {
                end = i;
                break;
            }
            _ => {}
        }
    }

    if end == 0 {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeWhile1)));
    }

    Ok((&input[end..], Token::Text(input[..end].to_string())))
}

/// Check whether the parenthesis opening the input closes exactly at its end,
/// ignoring parentheses inside quotes or behind escapes.
fn outer_pair_spans(input: &str) -> bool {
    if !(input.starts_with('(') && input.ends_with(')')) {
        return false;
    }

    let mut depth = 0usize;
    let mut in_quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' | '"' => match in_quote {
                Some(open) if open == c => in_quote = None,
                Some(_) => {}
                None => in_quote = Some(c),
            },
            '(' if in_quote.is_none() => depth += 1,
            ')' if in_quote.is_none() => {
                depth = match depth.checked_sub(1) {
                    Some(d) => d,
                    None => return false,
                };
                if depth == 0 {
                    return i == input.len() - 1;
                }
            }
            _ => {}
        }
    }

    false
}

/// Remove one level of backslash escaping.
fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn snippet(input: &str) -> &str {
    let end = input
        .char_indices()
        .nth(20)
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    &input[..end]
}
