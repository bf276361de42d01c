//! Public facade.
//!
//! [`Srl`] ties the pipeline together: a query string goes in, a compiled
//! pattern with match operations comes out. The fluent [`Builder`] path
//! produces the same type via [`Srl::from_builder`].

use std::fmt;
use std::str::FromStr;

use crate::builder::Builder;
use crate::error::{SrlError, SrlResult};
use crate::interpreter;
use crate::matches::MatchGroup;

/// A compiled SRL query.
#[derive(Debug, Clone)]
pub struct Srl {
    /// The normalized query this was compiled from; `None` when built
    /// through the fluent API.
    query: Option<String>,
    builder: Builder,
}

impl Srl {
    /// Compile an English-like SRL query.
    ///
    /// ```
    /// use srl::Srl;
    ///
    /// let srl = Srl::new("begin with digit exactly 2 times, letter at least 3 times")?;
    /// assert_eq!(srl.pattern(), "^[0-9]{2}[a-z]{3,}");
    /// # Ok::<(), srl::SrlError>(())
    /// ```
    pub fn new(query: &str) -> SrlResult<Self> {
        let query = crate::parser::normalize(query);
        let builder = interpreter::interpret(&query)?;
        Ok(Self {
            query: Some(query),
            builder,
        })
    }

    /// Wrap a finished fluent builder.
    pub fn from_builder(builder: Builder) -> Self {
        Self {
            query: None,
            builder,
        }
    }

    /// The query this pattern was compiled from, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The underlying builder.
    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    /// The raw pattern body.
    pub fn pattern(&self) -> String {
        self.builder.pattern()
    }

    /// The modifiers applied to the pattern.
    pub fn modifiers(&self) -> &str {
        self.builder.modifiers()
    }

    /// The delimited pattern, validated against the engine.
    pub fn get(&self, delimiter: &str) -> SrlResult<String> {
        self.builder.get(delimiter)
    }

    /// Whether the engine accepts the pattern.
    pub fn is_valid(&self) -> bool {
        self.builder.is_valid()
    }

    /// Test the pattern against a subject.
    pub fn is_matching(&self, subject: &str) -> SrlResult<bool> {
        self.builder.is_matching(subject)
    }

    /// All matches in the subject.
    pub fn matches(&self, subject: &str) -> SrlResult<Vec<MatchGroup>> {
        self.builder.get_matches(subject)
    }

    /// Replace every match with a literal replacement.
    pub fn replace(&self, replacement: &str, subject: &str) -> SrlResult<String> {
        self.builder.replace(replacement, subject)
    }

    /// Replace every match with the callback's return value.
    pub fn replace_with<F>(&self, replacement: F, subject: &str) -> SrlResult<String>
    where
        F: FnMut(&MatchGroup) -> String,
    {
        self.builder.replace_with(replacement, subject)
    }

    /// Split the subject around matches.
    pub fn split(&self, subject: &str) -> SrlResult<Vec<String>> {
        self.builder.split(subject)
    }

    /// Apply the replacement to each subject, keeping only those that
    /// matched.
    pub fn filter(&self, replacement: &str, subjects: &[&str]) -> SrlResult<Vec<String>> {
        self.builder.filter(replacement, subjects)
    }
}

impl FromStr for Srl {
    type Err = SrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srl::new(s)
    }
}

impl fmt::Display for Srl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_and_pattern() {
        let srl = Srl::new("  literally \"foo\";  ").unwrap();
        assert_eq!(srl.query(), Some("literally \"foo\""));
        assert_eq!(srl.pattern(), "(?:foo)");
        assert_eq!(srl.to_string(), "(?:foo)");
    }

    #[test]
    fn test_from_str() {
        let srl: Srl = "digit once or more".parse().unwrap();
        assert_eq!(srl.pattern(), "[0-9]+");
        assert!("once or more".parse::<Srl>().is_err());
    }

    #[test]
    fn test_from_builder() {
        let builder = Builder::new().literally("x").unwrap();
        let srl = Srl::from_builder(builder);
        assert_eq!(srl.query(), None);
        assert_eq!(srl.pattern(), "(?:x)");
    }

    #[test]
    fn test_matching() {
        let srl = Srl::new("capture (letter once or more) as \"word\", case insensitive").unwrap();
        assert!(srl.is_matching("Hello").unwrap());
        let found = srl.matches("Hello world").unwrap();
        assert_eq!(found[0].get("word"), Some("Hello"));
    }
}
