use pretty_assertions::assert_eq;
use srl::Srl;

fn pattern(query: &str) -> String {
    Srl::new(query).expect("query should compile").pattern()
}

// ========================================================================
// Compilation
// ========================================================================

#[test]
fn test_optional_letter() {
    let srl = Srl::new("literally \"colo\", optional \"u\", literally \"r\"").unwrap();
    assert_eq!(srl.pattern(), "(?:colo)(?:(?:u))?(?:r)");
    assert!(srl.is_matching("my color is green").unwrap());
    assert!(srl.is_matching("my colour is green").unwrap());
    assert!(!srl.is_matching("my colouur is green").unwrap());
}

#[test]
fn test_anchored_digits_and_letters() {
    let srl = Srl::new("begin with digit exactly 2 times, letter at least 3 times").unwrap();
    assert_eq!(srl.pattern(), "^[0-9]{2}[a-z]{3,}");
    assert!(srl.is_matching("42abc").unwrap());
    assert!(!srl.is_matching("4abc").unwrap());
    assert!(!srl.is_matching("x42abc").unwrap());
}

#[test]
fn test_starts_with_alias() {
    let srl = Srl::new("starts with digit exactly 2 times, letter at least 3 time").unwrap();
    assert_eq!(srl.pattern(), "^[0-9]{2}[a-z]{3,}");
    assert!(srl.is_matching("12abc").unwrap());
    assert!(!srl.is_matching("1a").unwrap());
}

#[test]
fn test_website_url() {
    let srl = Srl::new(
        "begin with literally \"http\", optional \"s\", literally \"://\", \
         optional \"www.\", letter once or more, literally \".com\", must end",
    )
    .unwrap();
    assert_eq!(
        srl.pattern(),
        "^(?:http)(?:(?:s))?(?:://)(?:(?:www\\.))?[a-z]+(?:\\.com)$"
    );
    assert!(srl.is_matching("https://www.example.com").unwrap());
    assert!(srl.is_matching("http://example.com").unwrap());
    assert!(!srl.is_matching("htp://example.com").unwrap());
    assert!(!srl.is_matching("https://example.org").unwrap());
}

#[test]
fn test_group_quantified() {
    let srl = Srl::new("(literally \"foo\") twice").unwrap();
    assert_eq!(srl.pattern(), "(?:(?:foo)){2}");
    assert!(srl.is_matching("foofoo").unwrap());
    assert!(!srl.is_matching("foo").unwrap());
}

#[test]
fn test_spans_and_aliases() {
    assert_eq!(pattern("digit from 0 to 8"), "[0-8]");
    assert_eq!(pattern("number from 0 to 8"), "[0-8]");
    assert_eq!(pattern("not digit from 0 to 2"), "[^0-2]");
    assert_eq!(pattern("uppercase letter from A to F twice"), "[A-F]{2}");
    assert_eq!(pattern("letter between 3 and 5 times"), "[a-z]{3,5}");
    assert_eq!(pattern("letter at least 3 time"), "[a-z]{3,}");
}

#[test]
fn test_character_classes() {
    assert_eq!(pattern("one of \"abc\""), "[abc]");
    assert_eq!(pattern("not one of \"!@#/\""), "[^!@#/]");
    assert_eq!(pattern("any character"), "\\w");
    assert_eq!(pattern("no character"), "\\W");
    assert_eq!(pattern("whitespace"), "\\s");
    assert_eq!(pattern("no whitespace"), "\\S");
    assert_eq!(pattern("tab, new line, backslash"), "\\t\\n\\\\");
}

#[test]
fn test_alternation() {
    let srl = Srl::new("any of (literally \"gray\", literally \"grey\")").unwrap();
    assert_eq!(srl.pattern(), "(?:(?:gray)|(?:grey))");
    assert!(srl.is_matching("gray").unwrap());
    assert!(srl.is_matching("grey").unwrap());
    assert!(!srl.is_matching("groy").unwrap());

    assert_eq!(
        pattern("either of (literally \"a\", literally \"b\")"),
        "(?:(?:a)|(?:b))"
    );
}

#[test]
fn test_until_is_lazy() {
    let srl = Srl::new("begin with anything once or more, until \"m\"").unwrap();
    assert_eq!(srl.pattern(), "^.+?(?:m)");
    let found = srl.matches("team company").unwrap();
    assert_eq!(found[0].whole(), "team");
}

#[test]
fn test_lookahead() {
    let srl = Srl::new("capture (digit once or more), if followed by (literally \"px\")").unwrap();
    assert_eq!(srl.pattern(), "([0-9]+)(?=(?:px))");
    let found = srl.matches("20px wide, 30em tall").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].whole(), "20");
}

#[test]
fn test_lookbehind() {
    let srl = Srl::new("capture (digit once or more), if already had (literally \"$\")").unwrap();
    assert_eq!(srl.pattern(), "(?<=(?:\\$))([0-9]+)");
    let found = srl.matches("$25 or 30 units").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].whole(), "25");
}

#[test]
fn test_paramless_command_with_group() {
    let srl = Srl::new("begin with (digit twice) must end").unwrap();
    assert_eq!(srl.pattern(), "^(?:[0-9]{2})$");
    assert!(srl.is_matching("42").unwrap());
    assert!(!srl.is_matching("421").unwrap());
}

// ========================================================================
// Captures and match operations
// ========================================================================

#[test]
fn test_named_capture() {
    let srl = Srl::new(
        "literally \"color:\", whitespace, capture (letter once or more) as \"color\", \
         literally \".\"",
    )
    .unwrap();
    let found = srl.matches("color: orange.").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get("color"), Some("orange"));
    assert_eq!(found[0].position(0), Some("orange"));
}

#[test]
fn test_multiple_matches() {
    let srl = Srl::new("capture (letter once or more) as \"word\"").unwrap();
    let found = srl.matches("one two three").unwrap();
    let words: Vec<_> = found.iter().map(|m| m.get("word").unwrap()).collect();
    assert_eq!(words, vec!["one", "two", "three"]);
}

#[test]
fn test_replace() {
    let srl = Srl::new("digit once or more").unwrap();
    assert_eq!(srl.replace("#", "a1b22c333").unwrap(), "a#b#c#");
}

#[test]
fn test_replace_with_callback() {
    let srl = Srl::new("letter once or more").unwrap();
    let out = srl
        .replace_with(|m| m.whole().to_uppercase(), "ab 12 cd")
        .unwrap();
    assert_eq!(out, "AB 12 CD");
}

#[test]
fn test_split() {
    let srl = Srl::new("literally \",\"").unwrap();
    assert_eq!(srl.split("a,b,,c").unwrap(), vec!["a", "b", "", "c"]);
}

#[test]
fn test_filter() {
    let srl = Srl::new("digit once or more").unwrap();
    let kept = srl.filter("N", &["a1", "bb", "2c3"]).unwrap();
    assert_eq!(kept, vec!["aN", "NcN"]);
}

// ========================================================================
// Modifiers and rendering
// ========================================================================

#[test]
fn test_case_insensitive_modifier() {
    let srl = Srl::new("literally \"foo\", case insensitive").unwrap();
    assert_eq!(srl.modifiers(), "i");
    assert!(srl.is_matching("FOO").unwrap());
}

#[test]
fn test_delimited_rendering() {
    let srl = Srl::new("literally \"fo/o\", case insensitive").unwrap();
    assert_eq!(srl.get("/").unwrap(), "/(?:fo\\/o)/i");
    assert_eq!(srl.get("").unwrap(), "(?:fo/o)");
}

// ========================================================================
// Failure modes
// ========================================================================

#[test]
fn test_error_messages() {
    let err = Srl::new("capture (letter").unwrap_err();
    assert!(err.to_string().contains("non-matching parenthesis"));

    let err = Srl::new("literally \"open").unwrap_err();
    assert!(err.to_string().contains("unterminated string literal"));

    let err = Srl::new("something unknown").unwrap_err();
    assert!(err.to_string().contains("unexpected statement"));

    let err = Srl::new("digit exactly x times").unwrap_err();
    assert!(err.to_string().contains("invalid parameter given"));

    let err = Srl::new("begin with once or more").unwrap_err();
    assert!(err.to_string().contains("not allowed after an anchor"));
}
