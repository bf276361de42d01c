//! Longest-match command recognition.

use crate::ast::{CommandSpec, COMMANDS};
use crate::error::{SrlError, SrlResult};

/// Match the head of `text` against the command table.
///
/// Every phrase is compared word by word, case-insensitively; a phrase only
/// scores if all of its words match from the start. The phrase with the most
/// words wins, so `any character` always beats `any`. Two phrases of equal
/// length resolve to the earlier table entry — first registered wins.
///
/// Returns the winning command and the leftover text after the matched words;
/// the leftover may hold parameters or the next command and goes back to the
/// resolver either way.
pub fn match_command(text: &str) -> SrlResult<(&'static CommandSpec, String)> {
    let words: Vec<&str> = text.split_whitespace().collect();

    let mut best: Option<(&'static CommandSpec, usize)> = None;
    for spec in COMMANDS {
        let phrase_words = spec.phrase.split(' ');
        let count = phrase_words.clone().count();
        if count > words.len() {
            continue;
        }
        if phrase_words
            .zip(words.iter())
            .all(|(p, w)| p.eq_ignore_ascii_case(w))
        {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((spec, count));
            }
        }
    }

    match best {
        Some((spec, count)) => Ok((spec, words[count..].join(" "))),
        None => Err(SrlError::syntax(format!("invalid method: `{text}`"))),
    }
}
