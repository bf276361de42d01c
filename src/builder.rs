//! Regex assembler for SRL.
//!
//! [`Builder`] accumulates regex fragments, escapes literal text and enforces
//! the position grammar: every operation declares which kinds of operation
//! may precede it, tracked as a bitmask of the last emitted kind. The same
//! type doubles as the public fluent API; the string DSL drives it through
//! the interpreter, so both surfaces raise identical errors.

use std::fmt;

use crate::engine;
use crate::error::{SrlError, SrlResult};
use crate::matches::MatchGroup;

/// Characters that must be escaped in literal text.
const NON_LITERAL_CHARACTERS: &str = "[\\^$.|?*+()";

const TYPE_BEGIN: u8 = 0b000001;
const TYPE_CHARACTER: u8 = 0b000010;
const TYPE_GROUP: u8 = 0b000100;
const TYPE_QUANTIFIER: u8 = 0b001000;
const TYPE_ANCHOR: u8 = 0b010000;
const TYPE_ANCHOR_END: u8 = 0b100000;
const TYPE_UNKNOWN: u8 = 0b111111;

/// Characters and groups may appear anywhere except after a terminal `$`.
const ALLOWED_FOR_CHARACTERS: u8 =
    TYPE_BEGIN | TYPE_ANCHOR | TYPE_GROUP | TYPE_QUANTIFIER | TYPE_CHARACTER;
/// Quantifiers need something quantifiable directly before them.
const ALLOWED_FOR_QUANTIFIERS: u8 = TYPE_CHARACTER | TYPE_GROUP;
/// `$` may close a pattern after content or directly after `^`.
const ALLOWED_FOR_END_ANCHOR: u8 =
    TYPE_CHARACTER | TYPE_QUANTIFIER | TYPE_GROUP | TYPE_ANCHOR;

/// How a (sub-)pattern is wrapped when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupWrap {
    /// No wrapping; fragments are emitted as-is.
    Plain,
    /// `(?:...)`
    NonCapture,
    /// `(...)` or `(?<name>...)`
    Capture { name: Option<String> },
    /// `(?:...|...)`, fragments joined with `|`.
    AnyOf,
    /// `(?:...)?`
    Optional,
    /// `(?=...)`
    PositiveLookahead,
    /// `(?!...)`
    NegativeLookahead,
    /// `(?<=...)`
    PositiveLookbehind,
    /// `(?<!...)`
    NegativeLookbehind,
}

impl GroupWrap {
    fn render(&self, body: &str) -> String {
        match self {
            GroupWrap::Plain => body.to_string(),
            GroupWrap::NonCapture | GroupWrap::AnyOf => format!("(?:{body})"),
            GroupWrap::Capture { name: Some(name) } => format!("(?<{name}>{body})"),
            GroupWrap::Capture { name: None } => format!("({body})"),
            GroupWrap::Optional => format!("(?:{body})?"),
            GroupWrap::PositiveLookahead => format!("(?={body})"),
            GroupWrap::NegativeLookahead => format!("(?!{body})"),
            GroupWrap::PositiveLookbehind => format!("(?<={body})"),
            GroupWrap::NegativeLookbehind => format!("(?<!{body})"),
        }
    }

    fn joiner(&self) -> &'static str {
        match self {
            GroupWrap::AnyOf => "|",
            _ => "",
        }
    }
}

/// Regex fragment accumulator and fluent builder.
#[derive(Debug, Clone)]
pub struct Builder {
    parts: Vec<String>,
    modifiers: String,
    last: u8,
    wrap: GroupWrap,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::with_wrap(GroupWrap::Plain)
    }

    pub(crate) fn with_wrap(wrap: GroupWrap) -> Self {
        Self {
            parts: Vec::new(),
            modifiers: String::new(),
            last: TYPE_BEGIN,
            wrap,
        }
    }

    // ====================================================================
    // Characters
    // ====================================================================

    /// Match these characters literally, in this order.
    pub fn literally(mut self, chars: &str) -> SrlResult<Self> {
        self.check("literally", TYPE_CHARACTER, ALLOWED_FOR_CHARACTERS)?;
        Ok(self.add(format!("(?:{})", escape(chars))))
    }

    /// Match exactly one of these characters.
    pub fn one_of(mut self, chars: &str) -> SrlResult<Self> {
        self.check("one_of", TYPE_CHARACTER, ALLOWED_FOR_CHARACTERS)?;
        Ok(self.add(format!("[{}]", escape_class(chars))))
    }

    /// Match any character except these.
    pub fn not_one_of(mut self, chars: &str) -> SrlResult<Self> {
        self.check("not_one_of", TYPE_CHARACTER, ALLOWED_FOR_CHARACTERS)?;
        Ok(self.add(format!("[^{}]", escape_class(chars))))
    }

    /// Match any digit.
    pub fn digit(self) -> SrlResult<Self> {
        self.span("digit", '0', '9', false)
    }

    /// Match any digit in the given span.
    pub fn digit_from(self, min: u32, max: u32) -> SrlResult<Self> {
        self.number_span("digit_from", min, max, false)
    }

    /// Match any character that is not a digit.
    pub fn not_digit(self) -> SrlResult<Self> {
        self.span("not_digit", '0', '9', true)
    }

    /// Match any character outside the given digit span.
    pub fn not_digit_from(self, min: u32, max: u32) -> SrlResult<Self> {
        self.number_span("not_digit_from", min, max, true)
    }

    /// Match any lowercase letter.
    pub fn letter(self) -> SrlResult<Self> {
        self.span("letter", 'a', 'z', false)
    }

    /// Match any lowercase letter in the given span.
    pub fn letter_from(self, min: char, max: char) -> SrlResult<Self> {
        self.span("letter_from", min, max, false)
    }

    /// Match any uppercase letter.
    pub fn uppercase_letter(self) -> SrlResult<Self> {
        self.span("uppercase_letter", 'A', 'Z', false)
    }

    /// Match any uppercase letter in the given span.
    pub fn uppercase_letter_from(self, min: char, max: char) -> SrlResult<Self> {
        self.span("uppercase_letter_from", min, max, false)
    }

    /// Match any character that is not a lowercase letter.
    pub fn not_letter(self) -> SrlResult<Self> {
        self.span("not_letter", 'a', 'z', true)
    }

    /// Match any character outside the given lowercase span.
    pub fn not_letter_from(self, min: char, max: char) -> SrlResult<Self> {
        self.span("not_letter_from", min, max, true)
    }

    /// Match any character that is not an uppercase letter.
    pub fn not_uppercase_letter(self) -> SrlResult<Self> {
        self.span("not_uppercase_letter", 'A', 'Z', true)
    }

    /// Match any character outside the given uppercase span.
    pub fn not_uppercase_letter_from(self, min: char, max: char) -> SrlResult<Self> {
        self.span("not_uppercase_letter_from", min, max, true)
    }

    /// Match any word character (`\w`).
    pub fn any_character(self) -> SrlResult<Self> {
        self.character("any_character", "\\w")
    }

    /// Match any non-word character (`\W`).
    pub fn no_character(self) -> SrlResult<Self> {
        self.character("no_character", "\\W")
    }

    /// Match any character (`.`).
    pub fn anything(self) -> SrlResult<Self> {
        self.character("anything", ".")
    }

    /// Match a newline.
    pub fn new_line(self) -> SrlResult<Self> {
        self.character("new_line", "\\n")
    }

    /// Match any whitespace character.
    pub fn whitespace(self) -> SrlResult<Self> {
        self.character("whitespace", "\\s")
    }

    /// Match any non-whitespace character.
    pub fn no_whitespace(self) -> SrlResult<Self> {
        self.character("no_whitespace", "\\S")
    }

    /// Match a tab.
    pub fn tab(self) -> SrlResult<Self> {
        self.character("tab", "\\t")
    }

    /// Match a vertical tab.
    pub fn vertical_tab(self) -> SrlResult<Self> {
        self.character("vertical_tab", "\\v")
    }

    /// Match a literal backslash.
    pub fn backslash(self) -> SrlResult<Self> {
        self.character("backslash", "\\\\")
    }

    /// Append a pre-formed regex fragment.
    ///
    /// The fragment is trial-compiled against the engine; if the result is no
    /// longer a valid pattern the fragment is reverted and a builder error
    /// raised. Afterwards the position is unknown, so any operation is
    /// accepted next.
    pub fn raw(mut self, fragment: impl Into<String>) -> SrlResult<Self> {
        self.last = TYPE_UNKNOWN;
        self = self.add(fragment.into());

        if self.is_valid() {
            Ok(self)
        } else {
            self.parts.pop();
            Err(SrlError::builder(
                "adding raw would invalidate this regular expression, reverted",
            ))
        }
    }

    // ====================================================================
    // Groups
    // ====================================================================

    /// Match any one of the alternatives built by the closure.
    pub fn any_of<F>(mut self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.check("any_of", TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let sub = conditions(Builder::with_wrap(GroupWrap::AnyOf))?;
        Ok(self.add(sub.pattern()))
    }

    /// Match all of these conditions in a non-capturing group.
    pub fn group<F>(mut self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.check("group", TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let sub = conditions(Builder::with_wrap(GroupWrap::NonCapture))?;
        Ok(self.add(sub.pattern()))
    }

    /// Match all of these conditions without any grouping.
    pub fn and<F>(mut self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.check("and", TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let sub = conditions(Builder::new())?;
        Ok(self.add(sub.pattern()))
    }

    /// Open a capture group, optionally named.
    pub fn capture<F>(mut self, conditions: F, name: Option<&str>) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.check("capture", TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let wrap = GroupWrap::Capture {
            name: name.map(str::to_string),
        };
        let sub = conditions(Builder::with_wrap(wrap))?;
        Ok(self.add(sub.pattern()))
    }

    /// Positive lookahead: match only if followed by these conditions.
    pub fn if_followed_by<F>(self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.lookahead("if_followed_by", GroupWrap::PositiveLookahead, conditions)
    }

    /// Negative lookahead: match only if not followed by these conditions.
    pub fn if_not_followed_by<F>(self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.lookahead("if_not_followed_by", GroupWrap::NegativeLookahead, conditions)
    }

    /// Positive lookbehind: match the previous condition only if these
    /// conditions already occurred.
    pub fn if_already_had<F>(self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.lookbehind("if_already_had", GroupWrap::PositiveLookbehind, conditions)
    }

    /// Negative lookbehind: match the previous condition only if these
    /// conditions did not already occur.
    pub fn if_not_already_had<F>(self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.lookbehind("if_not_already_had", GroupWrap::NegativeLookbehind, conditions)
    }

    /// Match lazily up to the given condition.
    pub fn until<F>(mut self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        if self.laziness_applicable() {
            self = self.first_match()?;
        }
        self.check("until", TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let sub = conditions(Builder::new())?;
        Ok(self.add(sub.pattern()))
    }

    fn lookahead<F>(mut self, name: &str, wrap: GroupWrap, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.check(name, TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let sub = conditions(Builder::with_wrap(wrap))?;
        Ok(self.add(sub.pattern()))
    }

    /// Lookbehind groups assert before the previous condition, so the last
    /// fragment is lifted out and re-emitted after the assertion. Only one
    /// fragment is lifted: a quantifier emitted as its own fragment stays
    /// behind the assertion, so quantified conditions must be grouped before
    /// adding a lookbehind.
    fn lookbehind<F>(mut self, name: &str, wrap: GroupWrap, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.check(name, TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let previous = self.parts.pop();
        let sub = conditions(Builder::with_wrap(wrap))?;
        self = self.add(sub.pattern());
        Ok(match previous {
            Some(fragment) => self.add(fragment),
            None => self,
        })
    }

    // ====================================================================
    // Quantifiers
    // ====================================================================

    /// Make the previous condition optional.
    pub fn optional(self) -> SrlResult<Self> {
        self.quantify("optional", "?")
    }

    /// Match these conditions optionally, as one group.
    pub fn optional_of<F>(mut self, conditions: F) -> SrlResult<Self>
    where
        F: FnOnce(Builder) -> SrlResult<Builder>,
    {
        self.check("optional", TYPE_QUANTIFIER, ALLOWED_FOR_QUANTIFIERS)?;
        let sub = conditions(Builder::with_wrap(GroupWrap::Optional))?;
        Ok(self.add(sub.pattern()))
    }

    /// Previous condition must occur at least once.
    pub fn once_or_more(self) -> SrlResult<Self> {
        self.quantify("once_or_more", "+")
    }

    /// Previous condition may occur any number of times, including never.
    pub fn never_or_more(self) -> SrlResult<Self> {
        self.quantify("never_or_more", "*")
    }

    /// Previous condition must occur exactly once.
    pub fn once(self) -> SrlResult<Self> {
        self.quantify("once", "{1}")
    }

    /// Previous condition must occur exactly twice.
    pub fn twice(self) -> SrlResult<Self> {
        self.quantify("twice", "{2}")
    }

    /// Previous condition must occur exactly this often.
    pub fn exactly(self, count: u32) -> SrlResult<Self> {
        self.quantify("exactly", &format!("{{{count}}}"))
    }

    /// Previous condition must occur at least this often.
    pub fn at_least(self, min: u32) -> SrlResult<Self> {
        self.quantify("at_least", &format!("{{{min},}}"))
    }

    /// Previous condition must occur between `min` and `max` times.
    pub fn between(self, min: u32, max: u32) -> SrlResult<Self> {
        self.quantify("between", &format!("{{{min},{max}}}"))
    }

    /// Make the most recent quantifier non-greedy.
    ///
    /// Only applicable directly after a quantifier. If the last fragment is a
    /// group whose trailing character is a quantifier symbol, the laziness is
    /// applied inside that group's closing parenthesis.
    pub fn first_match(mut self) -> SrlResult<Self> {
        let last = match self.parts.last() {
            Some(part) => part.clone(),
            None => {
                return Err(SrlError::implementation(
                    "cannot apply laziness at this point, only applicable after quantifiers",
                ))
            }
        };

        if ends_with_quantifier(&last) {
            self.last = TYPE_QUANTIFIER;
            return Ok(self.add("?"));
        }

        if group_ends_with_quantifier(&last) {
            self.parts.pop();
            let mut lazy = last;
            lazy.pop();
            lazy.push_str("?)");
            self.last = TYPE_QUANTIFIER;
            self.parts.push(lazy);
            return Ok(self);
        }

        Err(SrlError::implementation(
            "cannot apply laziness at this point, only applicable after quantifiers",
        ))
    }

    /// Alias for [`Builder::first_match`].
    pub fn lazy(self) -> SrlResult<Self> {
        self.first_match()
    }

    /// Whether a laziness conversion would succeed right now.
    pub(crate) fn laziness_applicable(&self) -> bool {
        self.parts
            .last()
            .map(|p| ends_with_quantifier(p) || group_ends_with_quantifier(p))
            .unwrap_or(false)
    }

    fn quantify(mut self, name: &str, fragment: &str) -> SrlResult<Self> {
        self.check(name, TYPE_QUANTIFIER, ALLOWED_FOR_QUANTIFIERS)?;
        Ok(self.add(fragment))
    }

    // ====================================================================
    // Anchors
    // ====================================================================

    /// Expect the subject to start with the following pattern.
    pub fn begin_with(mut self) -> SrlResult<Self> {
        self.check("begin_with", TYPE_ANCHOR, TYPE_BEGIN)?;
        Ok(self.add("^"))
    }

    /// Alias for [`Builder::begin_with`].
    pub fn starts_with(self) -> SrlResult<Self> {
        self.begin_with()
    }

    /// Expect the subject to end here.
    pub fn must_end(mut self) -> SrlResult<Self> {
        self.check("must_end", TYPE_ANCHOR_END, ALLOWED_FOR_END_ANCHOR)?;
        Ok(self.add("$"))
    }

    // ====================================================================
    // Modifiers
    // ====================================================================

    /// Apply the `i` modifier.
    pub fn case_insensitive(self) -> Self {
        self.add_unique_modifier('i')
    }

    /// Apply the `m` modifier.
    pub fn multi_line(self) -> Self {
        self.add_unique_modifier('m')
    }

    /// Apply the `s` modifier.
    pub fn single_line(self) -> Self {
        self.add_unique_modifier('s')
    }

    /// Apply the `u` modifier.
    pub fn unicode(self) -> Self {
        self.add_unique_modifier('u')
    }

    /// Apply the `U` modifier.
    pub fn all_lazy(self) -> Self {
        self.add_unique_modifier('U')
    }

    /// Apply the `g` modifier.
    pub fn all(self) -> Self {
        self.add_unique_modifier('g')
    }

    // ====================================================================
    // Rendering
    // ====================================================================

    /// The raw pattern body, without delimiter or modifiers.
    pub fn pattern(&self) -> String {
        self.wrap.render(&self.parts.join(self.wrap.joiner()))
    }

    /// All modifiers applied so far.
    pub fn modifiers(&self) -> &str {
        &self.modifiers
    }

    /// Render the delimited pattern: `<delim><body><delim><modifiers>`, with
    /// the delimiter escaped inside the body. The pattern is validated
    /// against the engine first.
    ///
    /// An empty delimiter returns the bare body and drops the modifiers,
    /// since a bare body has nowhere to attach them.
    pub fn get(&self, delimiter: &str) -> SrlResult<String> {
        let body = self.pattern();
        if delimiter.is_empty() {
            return Ok(body);
        }

        engine::compile(&body, &self.modifiers)?;

        let escaped = body.replace(delimiter, &format!("\\{delimiter}"));
        Ok(format!("{delimiter}{escaped}{delimiter}{}", self.modifiers))
    }

    /// Whether the engine accepts the pattern built so far.
    pub fn is_valid(&self) -> bool {
        engine::compile(&self.pattern(), &self.modifiers).is_ok()
    }

    // ====================================================================
    // Matching
    // ====================================================================

    /// Test whether the pattern matches the given subject.
    pub fn is_matching(&self, subject: &str) -> SrlResult<bool> {
        engine::is_matching(&self.pattern(), &self.modifiers, subject)
    }

    /// All matches in the subject, with captured groups.
    pub fn get_matches(&self, subject: &str) -> SrlResult<Vec<MatchGroup>> {
        engine::matches(&self.pattern(), &self.modifiers, subject)
    }

    /// Replace every match with a literal replacement.
    pub fn replace(&self, replacement: &str, subject: &str) -> SrlResult<String> {
        engine::replace(&self.pattern(), &self.modifiers, replacement, subject)
    }

    /// Replace every match with the callback's return value.
    pub fn replace_with<F>(&self, replacement: F, subject: &str) -> SrlResult<String>
    where
        F: FnMut(&MatchGroup) -> String,
    {
        engine::replace_with(&self.pattern(), &self.modifiers, replacement, subject)
    }

    /// Split the subject around matches.
    pub fn split(&self, subject: &str) -> SrlResult<Vec<String>> {
        engine::split(&self.pattern(), &self.modifiers, subject)
    }

    /// Apply the replacement to each subject, keeping only those that
    /// matched.
    pub fn filter(&self, replacement: &str, subjects: &[&str]) -> SrlResult<Vec<String>> {
        engine::filter(&self.pattern(), &self.modifiers, replacement, subjects)
    }

    // ====================================================================
    // Internal
    // ====================================================================

    /// Append a sub-pattern built by the interpreter as a group.
    pub(crate) fn attach_group(mut self, name: &str, sub: &Builder) -> SrlResult<Self> {
        self.check(name, TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        Ok(self.add(sub.pattern()))
    }

    /// Append an optional group built by the interpreter.
    pub(crate) fn attach_optional(mut self, sub: &Builder) -> SrlResult<Self> {
        self.check("optional", TYPE_QUANTIFIER, ALLOWED_FOR_QUANTIFIERS)?;
        Ok(self.add(sub.pattern()))
    }

    /// Append a lookbehind group built by the interpreter, lifting the
    /// previous fragment behind the assertion. Lifts a single fragment, like
    /// the fluent lookbehinds.
    pub(crate) fn attach_behind(mut self, name: &str, sub: &Builder) -> SrlResult<Self> {
        self.check(name, TYPE_GROUP, ALLOWED_FOR_CHARACTERS)?;
        let previous = self.parts.pop();
        self = self.add(sub.pattern());
        Ok(match previous {
            Some(fragment) => self.add(fragment),
            None => self,
        })
    }

    fn character(mut self, name: &str, fragment: &str) -> SrlResult<Self> {
        self.check(name, TYPE_CHARACTER, ALLOWED_FOR_CHARACTERS)?;
        Ok(self.add(fragment))
    }

    fn span(mut self, name: &str, min: char, max: char, negated: bool) -> SrlResult<Self> {
        self.check(name, TYPE_CHARACTER, ALLOWED_FOR_CHARACTERS)?;
        let neg = if negated { "^" } else { "" };
        Ok(self.add(format!("[{neg}{min}-{max}]")))
    }

    fn number_span(mut self, name: &str, min: u32, max: u32, negated: bool) -> SrlResult<Self> {
        self.check(name, TYPE_CHARACTER, ALLOWED_FOR_CHARACTERS)?;
        let neg = if negated { "^" } else { "" };
        Ok(self.add(format!("[{neg}{min}-{max}]")))
    }

    fn add(mut self, fragment: impl Into<String>) -> Self {
        self.parts.push(fragment.into());
        self
    }

    fn add_unique_modifier(mut self, modifier: char) -> Self {
        if !self.modifiers.contains(modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// Validate that `ty` is legal after the last operation, then record it.
    fn check(&mut self, name: &str, ty: u8, allowed: u8) -> SrlResult<()> {
        if allowed & self.last != 0 {
            self.last = ty;
            return Ok(());
        }

        let position = match self.last {
            TYPE_BEGIN => "at the beginning",
            TYPE_CHARACTER => "after a literal character",
            TYPE_GROUP => "after a group",
            TYPE_QUANTIFIER => "after a quantifier",
            TYPE_ANCHOR | TYPE_ANCHOR_END => "after an anchor",
            _ => "here",
        };

        Err(SrlError::implementation(format!(
            "`{name}` is not allowed {position}"
        )))
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

fn ends_with_quantifier(fragment: &str) -> bool {
    matches!(fragment.chars().last(), Some('+' | '*' | '}' | '?'))
}

/// A group like `(?:x+)` carries its quantifier just before the closing
/// parenthesis.
fn group_ends_with_quantifier(fragment: &str) -> bool {
    if !fragment.ends_with(')') {
        return false;
    }
    let mut chars = fragment.chars().rev();
    chars.next();
    matches!(chars.next(), Some('+' | '*' | '}' | '?'))
}

/// Escape characters meaningful to the regex dialect.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if NON_LITERAL_CHARACTERS.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape for character classes: also `-` and `]`.
fn escape_class(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if NON_LITERAL_CHARACTERS.contains(c) || c == '-' || c == ']' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
