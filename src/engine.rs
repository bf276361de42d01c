//! Regex engine adapter.
//!
//! Everything that touches [`fancy_regex`] lives here: pattern compilation,
//! modifier handling and the match operations backing both the builder and
//! the facade. Engine failures are mapped onto [`EngineErrorKind`] so callers
//! never see the engine's own error type.
//!
//! The `i`, `m` and `s` modifiers become inline `(?ims)` flags. `u` is the
//! engine default and `g`/`U` only affect rendering: replacement is always
//! global, and the engine has no ungreedy flag.

use std::collections::HashMap;

use fancy_regex::{Error, Regex, RuntimeError};

use crate::error::{EngineErrorKind, SrlError, SrlResult};
use crate::matches::MatchGroup;

/// Compile a pattern body with the given modifiers.
pub(crate) fn compile(pattern: &str, modifiers: &str) -> SrlResult<Regex> {
    let flags: String = modifiers.chars().filter(|c| "ims".contains(*c)).collect();
    let full = if flags.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{flags}){pattern}")
    };

    Regex::new(&full).map_err(map_error)
}

fn map_error(err: Error) -> SrlError {
    let kind = match &err {
        Error::ParseError(_, _) | Error::CompileError(_) => EngineErrorKind::InvalidPattern,
        Error::RuntimeError(RuntimeError::BacktrackLimitExceeded) => {
            EngineErrorKind::BacktrackLimit
        }
        Error::RuntimeError(RuntimeError::StackOverflow) => EngineErrorKind::RecursionLimit,
        _ => EngineErrorKind::Unknown,
    };
    SrlError::engine(kind, err.to_string())
}

/// Test whether the pattern matches anywhere in the subject.
pub(crate) fn is_matching(pattern: &str, modifiers: &str, subject: &str) -> SrlResult<bool> {
    compile(pattern, modifiers)?
        .is_match(subject)
        .map_err(map_error)
}

/// Collect every match in the subject as a [`MatchGroup`].
pub(crate) fn matches(
    pattern: &str,
    modifiers: &str,
    subject: &str,
) -> SrlResult<Vec<MatchGroup>> {
    let regex = compile(pattern, modifiers)?;
    let names = capture_names(&regex);

    let mut out = Vec::new();
    for captures in regex.captures_iter(subject) {
        let captures = captures.map_err(map_error)?;
        let whole = captures
            .get(0)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let values = (1..captures.len())
            .map(|i| captures.get(i).map(|m| m.as_str().to_string()))
            .collect();
        out.push(MatchGroup::new(whole, values, names.clone()));
    }
    Ok(out)
}

/// Replace every match with a literal replacement.
pub(crate) fn replace(
    pattern: &str,
    modifiers: &str,
    replacement: &str,
    subject: &str,
) -> SrlResult<String> {
    let regex = compile(pattern, modifiers)?;

    let mut out = String::with_capacity(subject.len());
    let mut last = 0;
    for found in regex.find_iter(subject) {
        let found = found.map_err(map_error)?;
        out.push_str(&subject[last..found.start()]);
        out.push_str(replacement);
        last = found.end();
    }
    out.push_str(&subject[last..]);
    Ok(out)
}

/// Replace every match with the callback's return value.
pub(crate) fn replace_with<F>(
    pattern: &str,
    modifiers: &str,
    mut replacement: F,
    subject: &str,
) -> SrlResult<String>
where
    F: FnMut(&MatchGroup) -> String,
{
    let regex = compile(pattern, modifiers)?;
    let names = capture_names(&regex);

    let mut out = String::with_capacity(subject.len());
    let mut last = 0;
    for captures in regex.captures_iter(subject) {
        let captures = captures.map_err(map_error)?;
        let whole = match captures.get(0) {
            Some(m) => m,
            None => continue,
        };
        let values = (1..captures.len())
            .map(|i| captures.get(i).map(|m| m.as_str().to_string()))
            .collect();
        let group = MatchGroup::new(whole.as_str().to_string(), values, names.clone());

        out.push_str(&subject[last..whole.start()]);
        out.push_str(&replacement(&group));
        last = whole.end();
    }
    out.push_str(&subject[last..]);
    Ok(out)
}

/// Split the subject around matches of the pattern.
pub(crate) fn split(pattern: &str, modifiers: &str, subject: &str) -> SrlResult<Vec<String>> {
    let regex = compile(pattern, modifiers)?;

    let mut out = Vec::new();
    let mut last = 0;
    for found in regex.find_iter(subject) {
        let found = found.map_err(map_error)?;
        out.push(subject[last..found.start()].to_string());
        last = found.end();
    }
    out.push(subject[last..].to_string());
    Ok(out)
}

/// Apply the replacement to each subject, keeping only subjects that matched.
pub(crate) fn filter(
    pattern: &str,
    modifiers: &str,
    replacement: &str,
    subjects: &[&str],
) -> SrlResult<Vec<String>> {
    let mut out = Vec::new();
    for subject in subjects {
        if is_matching(pattern, modifiers, subject)? {
            out.push(replace(pattern, modifiers, replacement, subject)?);
        }
    }
    Ok(out)
}

/// Named group positions, counted like [`MatchGroup`] captures: group 1 is
/// position 0.
fn capture_names(regex: &Regex) -> HashMap<String, usize> {
    regex
        .capture_names()
        .enumerate()
        .skip(1)
        .filter_map(|(i, name)| name.map(|n| (n.to_string(), i - 1)))
        .collect()
}
