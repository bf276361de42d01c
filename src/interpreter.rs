//! Query interpreter.
//!
//! Walks a resolved command sequence and drives the [`Builder`], binding
//! trailing parameters to each command according to its [`Policy`] and
//! dispatching on the canonical [`Op`]. Sub-queries recurse with the wrap
//! their enclosing command dictates.

use crate::ast::{CommandSpec, Op, Param, Policy, Resolved};
use crate::builder::{Builder, GroupWrap};
use crate::error::{SrlError, SrlResult};
use crate::parser;

/// Compile a raw SRL query into a finished builder.
pub fn interpret(query: &str) -> SrlResult<Builder> {
    let resolved = parser::parse(query)?;
    build_query(&resolved, Builder::new())
}

/// Run a resolved sequence against a builder.
pub fn build_query(sequence: &[Resolved], mut builder: Builder) -> SrlResult<Builder> {
    let mut i = 0;
    while i < sequence.len() {
        match &sequence[i] {
            Resolved::Group(inner) => {
                let sub = build_query(inner, Builder::with_wrap(GroupWrap::NonCapture))?;
                builder = builder.attach_group("group", &sub)?;
                i += 1;
            }
            Resolved::Command(spec) => {
                let (params, consumed) = gather_params(&sequence[i + 1..]);
                builder = apply(builder, spec, params)?;
                i += 1 + consumed;
            }
            Resolved::Text(text) => {
                return Err(SrlError::syntax(format!("unexpected statement: `{text}`")));
            }
            Resolved::Literal(literal) => {
                return Err(SrlError::syntax(format!(
                    "unexpected statement: `{literal}`"
                )));
            }
        }
    }
    Ok(builder)
}

/// Collect a command's trailing parameters.
///
/// Gathering stops at the next command. A sub-query group is only taken as a
/// parameter when it directly follows the command; a group showing up later
/// belongs to the sequence itself, not to the parameter list.
fn gather_params(trailing: &[Resolved]) -> (Vec<Param>, usize) {
    let mut params = Vec::new();
    let mut consumed = 0;

    for node in trailing {
        match node {
            Resolved::Command(_) => break,
            Resolved::Group(inner) => {
                if consumed != 0 {
                    break;
                }
                params.push(Param::Sequence(inner.clone()));
                consumed += 1;
            }
            Resolved::Text(text) => {
                params.push(Param::Text(text.clone()));
                consumed += 1;
            }
            Resolved::Literal(literal) => {
                params.push(Param::Literal(literal.clone()));
                consumed += 1;
            }
        }
    }

    (params, consumed)
}

fn apply(builder: Builder, spec: &'static CommandSpec, raw: Vec<Param>) -> SrlResult<Builder> {
    // A single sub-query after a paramless command is not a parameter error:
    // the command applies alone and the sub-query follows as a group.
    if spec.policy == Policy::NoParams && raw.len() == 1 {
        if let Param::Sequence(inner) = &raw[0] {
            let builder = dispatch(builder, spec, &[])?;
            let sub = build_query(inner, Builder::with_wrap(GroupWrap::NonCapture))?;
            return builder.attach_group("group", &sub);
        }
    }

    let params = apply_policy(spec, raw)?;
    dispatch(builder, spec, &params)
}

/// Filter filler words and enforce arity limits per command policy.
fn apply_policy(spec: &'static CommandSpec, params: Vec<Param>) -> SrlResult<Vec<Param>> {
    let filtered = match spec.policy {
        Policy::NoParams => {
            if !params.is_empty() {
                return Err(invalid(spec));
            }
            params
        }
        Policy::Default => params,
        Policy::StripAnd => strip(params, &["and", "times", "time"]),
        Policy::StripAs => strip(params, &["as"]),
        Policy::StripTo => strip(params, &["to"]),
        Policy::StripTimes => {
            let params = strip(params, &["times", "time"]);
            if params.len() > 1 {
                return Err(invalid(spec));
            }
            params
        }
    };
    Ok(filtered)
}

fn strip(params: Vec<Param>, fillers: &[&str]) -> Vec<Param> {
    params
        .into_iter()
        .filter(|p| match p {
            Param::Text(t) => !fillers.iter().any(|f| t.eq_ignore_ascii_case(f)),
            _ => true,
        })
        .collect()
}

fn dispatch(
    mut builder: Builder,
    spec: &'static CommandSpec,
    params: &[Param],
) -> SrlResult<Builder> {
    match spec.op {
        // Characters
        Op::Literally => builder.literally(one_str(spec, params)?),
        Op::OneOf => builder.one_of(one_str(spec, params)?),
        Op::NotOneOf => builder.not_one_of(one_str(spec, params)?),
        Op::Letter => builder.letter(),
        Op::LetterFrom => {
            let (min, max) = two_chars(spec, params)?;
            builder.letter_from(min, max)
        }
        Op::UppercaseLetter => builder.uppercase_letter(),
        Op::UppercaseLetterFrom => {
            let (min, max) = two_chars(spec, params)?;
            builder.uppercase_letter_from(min, max)
        }
        Op::NotLetter => builder.not_letter(),
        Op::NotLetterFrom => {
            let (min, max) = two_chars(spec, params)?;
            builder.not_letter_from(min, max)
        }
        Op::NotUppercaseLetter => builder.not_uppercase_letter(),
        Op::NotUppercaseLetterFrom => {
            let (min, max) = two_chars(spec, params)?;
            builder.not_uppercase_letter_from(min, max)
        }
        Op::Digit => builder.digit(),
        Op::DigitFrom => {
            let (min, max) = two_numbers(spec, params)?;
            builder.digit_from(min, max)
        }
        Op::NotDigit => builder.not_digit(),
        Op::NotDigitFrom => {
            let (min, max) = two_numbers(spec, params)?;
            builder.not_digit_from(min, max)
        }
        Op::AnyCharacter => builder.any_character(),
        Op::NoCharacter => builder.no_character(),
        Op::Anything => builder.anything(),
        Op::NewLine => builder.new_line(),
        Op::Whitespace => builder.whitespace(),
        Op::NoWhitespace => builder.no_whitespace(),
        Op::Tab => builder.tab(),
        Op::VerticalTab => builder.vertical_tab(),
        Op::Backslash => builder.backslash(),
        Op::Raw => builder.raw(one_str(spec, params)?),

        // Groups
        Op::AnyOf => {
            let sub = sub_pattern(GroupWrap::AnyOf, one_param(spec, params)?)?;
            builder.attach_group("any_of", &sub)
        }
        Op::Capture => {
            let (content, name) = match params {
                [content] => (content, None),
                [content, name] => (content, Some(name.as_str().ok_or_else(|| invalid(spec))?)),
                _ => return Err(invalid(spec)),
            };
            let wrap = GroupWrap::Capture {
                name: name.map(str::to_string),
            };
            let sub = sub_pattern(wrap, content)?;
            builder.attach_group("capture", &sub)
        }
        Op::Until => {
            let param = one_param(spec, params)?;
            if builder.laziness_applicable() {
                builder = builder.first_match()?;
            }
            let sub = sub_pattern(GroupWrap::Plain, param)?;
            builder.attach_group("until", &sub)
        }
        Op::IfFollowedBy => {
            let sub = sub_pattern(GroupWrap::PositiveLookahead, one_param(spec, params)?)?;
            builder.attach_group("if_followed_by", &sub)
        }
        Op::IfNotFollowedBy => {
            let sub = sub_pattern(GroupWrap::NegativeLookahead, one_param(spec, params)?)?;
            builder.attach_group("if_not_followed_by", &sub)
        }
        Op::IfAlreadyHad => {
            let sub = sub_pattern(GroupWrap::PositiveLookbehind, one_param(spec, params)?)?;
            builder.attach_behind("if_already_had", &sub)
        }
        Op::IfNotAlreadyHad => {
            let sub = sub_pattern(GroupWrap::NegativeLookbehind, one_param(spec, params)?)?;
            builder.attach_behind("if_not_already_had", &sub)
        }

        // Quantifiers
        Op::Optional => match params {
            [] => builder.optional(),
            [param] => {
                let sub = sub_pattern(GroupWrap::Optional, param)?;
                builder.attach_optional(&sub)
            }
            _ => Err(invalid(spec)),
        },
        Op::OnceOrMore => builder.once_or_more(),
        Op::NeverOrMore => builder.never_or_more(),
        Op::Once => builder.once(),
        Op::Twice => builder.twice(),
        Op::Exactly => builder.exactly(one_number(spec, params)?),
        Op::AtLeast => builder.at_least(one_number(spec, params)?),
        Op::Between => {
            let (min, max) = two_numbers(spec, params)?;
            builder.between(min, max)
        }
        Op::FirstMatch => builder.first_match(),

        // Anchors
        Op::BeginWith => builder.begin_with(),
        Op::MustEnd => builder.must_end(),

        // Modifiers
        Op::CaseInsensitive => Ok(builder.case_insensitive()),
        Op::MultiLine => Ok(builder.multi_line()),
        Op::SingleLine => Ok(builder.single_line()),
        Op::AllLazy => Ok(builder.all_lazy()),
        Op::Unicode => Ok(builder.unicode()),
        Op::All => Ok(builder.all()),
    }
}

/// Build a wrapped sub-pattern from one parameter. Bare text and literals
/// count as literal content.
fn sub_pattern(wrap: GroupWrap, param: &Param) -> SrlResult<Builder> {
    match param {
        Param::Sequence(inner) => build_query(inner, Builder::with_wrap(wrap)),
        Param::Text(s) | Param::Literal(s) => Builder::with_wrap(wrap).literally(s),
    }
}

fn invalid(spec: &CommandSpec) -> SrlError {
    SrlError::syntax(format!("invalid parameter given for `{}`", spec.phrase))
}

fn one_param<'a>(spec: &CommandSpec, params: &'a [Param]) -> SrlResult<&'a Param> {
    match params {
        [param] => Ok(param),
        _ => Err(invalid(spec)),
    }
}

fn one_str<'a>(spec: &CommandSpec, params: &'a [Param]) -> SrlResult<&'a str> {
    one_param(spec, params)?.as_str().ok_or_else(|| invalid(spec))
}

fn one_number(spec: &CommandSpec, params: &[Param]) -> SrlResult<u32> {
    one_str(spec, params)?.parse().map_err(|_| invalid(spec))
}

fn two_numbers(spec: &CommandSpec, params: &[Param]) -> SrlResult<(u32, u32)> {
    match params {
        [min, max] => {
            let min = min
                .as_str()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| invalid(spec))?;
            let max = max
                .as_str()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| invalid(spec))?;
            Ok((min, max))
        }
        _ => Err(invalid(spec)),
    }
}

fn two_chars(spec: &CommandSpec, params: &[Param]) -> SrlResult<(char, char)> {
    match params {
        [min, max] => Ok((single_char(spec, min)?, single_char(spec, max)?)),
        _ => Err(invalid(spec)),
    }
}

fn single_char(spec: &CommandSpec, param: &Param) -> SrlResult<char> {
    let s = param.as_str().ok_or_else(|| invalid(spec))?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid(spec)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pattern(query: &str) -> String {
        interpret(query).unwrap().pattern()
    }

    #[test]
    fn test_literally_with_optional() {
        assert_eq!(
            pattern("literally \"colo\", optional \"u\", literally \"r\""),
            "(?:colo)(?:(?:u))?(?:r)"
        );
    }

    #[test]
    fn test_anchored_counts() {
        assert_eq!(
            pattern("begin with digit exactly 2 times, letter at least 3 times"),
            "^[0-9]{2}[a-z]{3,}"
        );
    }

    #[test]
    fn test_group_then_quantifier() {
        assert_eq!(pattern("(literally \"foo\") twice"), "(?:(?:foo)){2}");
    }

    #[test]
    fn test_capture_named() {
        assert_eq!(
            pattern("capture (letter once or more) as \"word\""),
            "(?<word>[a-z]+)"
        );
    }

    #[test]
    fn test_capture_unnamed() {
        assert_eq!(pattern("capture (digit twice)"), "([0-9]{2})");
    }

    #[test]
    fn test_until_applies_laziness() {
        assert_eq!(
            pattern("anything once or more, until \"m\""),
            ".+?(?:m)"
        );
    }

    #[test]
    fn test_spans() {
        assert_eq!(pattern("digit from 0 to 8"), "[0-8]");
        assert_eq!(pattern("not digit from 0 to 2"), "[^0-2]");
        assert_eq!(pattern("letter from a to f"), "[a-f]");
        assert_eq!(pattern("uppercase letter from A to F"), "[A-F]");
    }

    #[test]
    fn test_number_alias() {
        assert_eq!(pattern("number from 0 to 8"), "[0-8]");
        assert_eq!(pattern("number"), "[0-9]");
    }

    #[test]
    fn test_between_strips_fillers() {
        assert_eq!(pattern("letter between 3 and 5 times"), "[a-z]{3,5}");
    }

    #[test]
    fn test_any_of_alternatives() {
        assert_eq!(
            pattern("any of (literally \"foo\", digit)"),
            "(?:(?:foo)|[0-9])"
        );
        assert_eq!(
            pattern("either of (literally \"a\", literally \"b\")"),
            "(?:(?:a)|(?:b))"
        );
    }

    #[test]
    fn test_lookarounds() {
        assert_eq!(
            pattern("literally \"foo\", if followed by (digit)"),
            "(?:foo)(?=[0-9])"
        );
        assert_eq!(
            pattern("literally \"bar\", if already had (literally \"foo\")"),
            "(?<=(?:foo))(?:bar)"
        );
    }

    #[test]
    fn test_paramless_command_followed_by_group() {
        assert_eq!(
            pattern("begin with (digit twice) must end"),
            "^(?:[0-9]{2})$"
        );
    }

    #[test]
    fn test_standalone_group_after_literal_param() {
        // The group does not become a parameter of `literally`.
        assert_eq!(
            pattern("literally \"a\", (digit) twice"),
            "(?:a)(?:[0-9]){2}"
        );
    }

    #[test]
    fn test_modifiers_collected() {
        let b = interpret("literally \"foo\", case insensitive, multi line").unwrap();
        assert_eq!(b.pattern(), "(?:foo)");
        assert_eq!(b.modifiers(), "im");
    }

    #[test]
    fn test_unexpected_statement() {
        let err = interpret("gibberish query").unwrap_err();
        assert!(err.to_string().contains("unexpected statement"));
    }

    #[test]
    fn test_invalid_parameter() {
        let err = interpret("digit exactly x times").unwrap_err();
        assert!(err.to_string().contains("invalid parameter given for `exactly`"));
    }

    #[test]
    fn test_quantifier_at_beginning_rejected() {
        let err = interpret("once or more").unwrap_err();
        assert!(matches!(err, SrlError::Implementation(_)));
    }
}
