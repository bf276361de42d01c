//! Data model for the SRL compiler.
//!
//! The pipeline moves through three representations: the [`Token`] tree
//! produced by the structural parser, the [`Resolved`] node sequence produced
//! by the resolver, and the regex fragments accumulated by the
//! [`Builder`](crate::builder::Builder). Command recognition is driven by the
//! static [`COMMANDS`] table; every recognized phrase maps to one canonical
//! [`Op`] carrying its parameter [`Policy`].

use serde::Serialize;

/// One element of the structural parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A plain text span, to be resolved into commands and parameters.
    Text(String),
    /// The content of one matched parenthesis pair.
    Group(Vec<Token>),
    /// A quoted literal. Opaque: never re-tokenized or matched as a command.
    Literal(String),
}

/// Canonical operation identifiers. One variant per fluent builder method.
///
/// The vocabulary is a closed enum; dispatch is a `match` in the
/// interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Op {
    // Characters
    Literally,
    OneOf,
    NotOneOf,
    Letter,
    LetterFrom,
    UppercaseLetter,
    UppercaseLetterFrom,
    NotLetter,
    NotLetterFrom,
    NotUppercaseLetter,
    NotUppercaseLetterFrom,
    Digit,
    DigitFrom,
    NotDigit,
    NotDigitFrom,
    AnyCharacter,
    NoCharacter,
    Anything,
    NewLine,
    Whitespace,
    NoWhitespace,
    Tab,
    VerticalTab,
    Backslash,
    Raw,
    // Groups
    AnyOf,
    Capture,
    Until,
    IfFollowedBy,
    IfNotFollowedBy,
    IfAlreadyHad,
    IfNotAlreadyHad,
    // Quantifiers
    Optional,
    OnceOrMore,
    NeverOrMore,
    Once,
    Twice,
    Exactly,
    AtLeast,
    Between,
    FirstMatch,
    // Anchors
    BeginWith,
    MustEnd,
    // Modifiers
    CaseInsensitive,
    MultiLine,
    SingleLine,
    AllLazy,
    Unicode,
    All,
}

/// Operation category, used for tooling output and documentation.
///
/// Positional legality is enforced separately by the builder's grammar table;
/// the category here describes what kind of fragment an operation emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Character,
    Group,
    Quantifier,
    Anchor,
    Modifier,
}

impl Op {
    /// The category this operation belongs to.
    pub fn category(self) -> Category {
        use Op::*;
        match self {
            Literally | OneOf | NotOneOf | Letter | LetterFrom | UppercaseLetter
            | UppercaseLetterFrom | NotLetter | NotLetterFrom | NotUppercaseLetter
            | NotUppercaseLetterFrom | Digit | DigitFrom | NotDigit | NotDigitFrom
            | AnyCharacter | NoCharacter | Anything | NewLine | Whitespace | NoWhitespace
            | Tab | VerticalTab | Backslash | Raw => Category::Character,
            AnyOf | Capture | Until | IfFollowedBy | IfNotFollowedBy | IfAlreadyHad
            | IfNotAlreadyHad => Category::Group,
            Optional | OnceOrMore | NeverOrMore | Once | Twice | Exactly | AtLeast | Between
            | FirstMatch => Category::Quantifier,
            BeginWith | MustEnd => Category::Anchor,
            CaseInsensitive | MultiLine | SingleLine | AllLazy | Unicode | All => {
                Category::Modifier
            }
        }
    }
}

/// Parameter policy applied to the raw trailing parameters of a command
/// before they are bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// The command takes no parameters at all.
    NoParams,
    /// Parameters are passed through unfiltered.
    Default,
    /// Drop the filler words "and", "times" and "time" (range commands).
    StripAnd,
    /// Drop the filler word "as" (naming commands).
    StripAs,
    /// Drop the filler word "to" (span commands).
    StripTo,
    /// Drop "times"/"time" and require at most one remaining parameter
    /// (repetition-count commands).
    StripTimes,
}

/// One entry of the command table: a recognized phrase bound to its canonical
/// operation and parameter policy.
#[derive(Debug)]
pub struct CommandSpec {
    /// The multi-word phrase recognized in a query.
    pub phrase: &'static str,
    /// The canonical operation the phrase names.
    pub op: Op,
    /// How raw trailing parameters are filtered before binding.
    pub policy: Policy,
}

const fn cmd(phrase: &'static str, op: Op, policy: Policy) -> CommandSpec {
    CommandSpec { phrase, op, policy }
}

/// The full command vocabulary.
///
/// Matching always prefers the phrase with the most matched words, so the
/// order here only matters for two phrases of equal word count: the earlier
/// entry wins. That tie-break is deliberate and must stay deterministic.
pub const COMMANDS: &[CommandSpec] = &[
    // Characters
    cmd("literally", Op::Literally, Policy::Default),
    cmd("one of", Op::OneOf, Policy::Default),
    cmd("not one of", Op::NotOneOf, Policy::Default),
    cmd("letter from", Op::LetterFrom, Policy::StripTo),
    cmd("letter", Op::Letter, Policy::NoParams),
    cmd("uppercase letter from", Op::UppercaseLetterFrom, Policy::StripTo),
    cmd("uppercase letter", Op::UppercaseLetter, Policy::NoParams),
    cmd("not letter from", Op::NotLetterFrom, Policy::StripTo),
    cmd("not letter", Op::NotLetter, Policy::NoParams),
    cmd("not uppercase letter from", Op::NotUppercaseLetterFrom, Policy::StripTo),
    cmd("not uppercase letter", Op::NotUppercaseLetter, Policy::NoParams),
    cmd("digit from", Op::DigitFrom, Policy::StripTo),
    cmd("digit", Op::Digit, Policy::NoParams),
    cmd("not digit from", Op::NotDigitFrom, Policy::StripTo),
    cmd("not digit", Op::NotDigit, Policy::NoParams),
    cmd("number from", Op::DigitFrom, Policy::StripTo),
    cmd("number", Op::Digit, Policy::NoParams),
    cmd("not number from", Op::NotDigitFrom, Policy::StripTo),
    cmd("not number", Op::NotDigit, Policy::NoParams),
    cmd("any character", Op::AnyCharacter, Policy::NoParams),
    cmd("no character", Op::NoCharacter, Policy::NoParams),
    cmd("anything", Op::Anything, Policy::NoParams),
    cmd("new line", Op::NewLine, Policy::NoParams),
    cmd("no whitespace", Op::NoWhitespace, Policy::NoParams),
    cmd("whitespace", Op::Whitespace, Policy::NoParams),
    cmd("tab", Op::Tab, Policy::NoParams),
    cmd("vertical tab", Op::VerticalTab, Policy::NoParams),
    cmd("backslash", Op::Backslash, Policy::NoParams),
    cmd("raw", Op::Raw, Policy::Default),
    // Groups
    cmd("any of", Op::AnyOf, Policy::Default),
    cmd("either of", Op::AnyOf, Policy::Default),
    cmd("capture", Op::Capture, Policy::StripAs),
    cmd("until", Op::Until, Policy::Default),
    cmd("if followed by", Op::IfFollowedBy, Policy::Default),
    cmd("if not followed by", Op::IfNotFollowedBy, Policy::Default),
    cmd("if already had", Op::IfAlreadyHad, Policy::Default),
    cmd("if not already had", Op::IfNotAlreadyHad, Policy::Default),
    // Quantifiers
    cmd("once or more", Op::OnceOrMore, Policy::NoParams),
    cmd("never or more", Op::NeverOrMore, Policy::NoParams),
    cmd("once", Op::Once, Policy::NoParams),
    cmd("twice", Op::Twice, Policy::NoParams),
    cmd("exactly", Op::Exactly, Policy::StripTimes),
    cmd("at least", Op::AtLeast, Policy::StripTimes),
    cmd("between", Op::Between, Policy::StripAnd),
    cmd("optional", Op::Optional, Policy::Default),
    cmd("first match", Op::FirstMatch, Policy::NoParams),
    // Anchors
    cmd("starts with", Op::BeginWith, Policy::NoParams),
    cmd("start with", Op::BeginWith, Policy::NoParams),
    cmd("begin with", Op::BeginWith, Policy::NoParams),
    cmd("begins with", Op::BeginWith, Policy::NoParams),
    cmd("must end", Op::MustEnd, Policy::NoParams),
    // Modifiers
    cmd("case insensitive", Op::CaseInsensitive, Policy::NoParams),
    cmd("multi line", Op::MultiLine, Policy::NoParams),
    cmd("single line", Op::SingleLine, Policy::NoParams),
    cmd("all lazy", Op::AllLazy, Policy::NoParams),
    cmd("unicode", Op::Unicode, Policy::NoParams),
    cmd("all", Op::All, Policy::NoParams),
    // "any" aliases "anything". Declared after "any character" and "any of";
    // those still win through the longest-match rule, this placement just
    // keeps the table readable.
    cmd("any", Op::Anything, Policy::NoParams),
];

/// One element of a resolved query sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A recognized command, parameters still trailing as separate elements.
    Command(&'static CommandSpec),
    /// Residual text. Becomes a parameter of the preceding command, or fails
    /// resolution if left in command position.
    Text(String),
    /// An opaque quoted literal.
    Literal(String),
    /// A parenthesized sub-query.
    Group(Vec<Resolved>),
}

impl PartialEq for CommandSpec {
    fn eq(&self, other: &Self) -> bool {
        // Table entries are static and unique by phrase.
        std::ptr::eq(self, other)
    }
}

/// A parameter bound to a command after policy filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// A bare word, e.g. a repetition count or span bound.
    Text(String),
    /// An unwrapped quoted literal.
    Literal(String),
    /// A parenthesized sub-query, compiled recursively by the interpreter.
    Sequence(Vec<Resolved>),
}

impl Param {
    /// The textual value of this parameter, if it has one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::Text(s) | Param::Literal(s) => Some(s),
            Param::Sequence(_) => None,
        }
    }
}
