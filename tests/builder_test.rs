use pretty_assertions::assert_eq;
use srl::{Builder, Srl, SrlError};

#[test]
fn test_fluent_matches_query_output() {
    let fluent = Builder::new()
        .literally("colo")
        .unwrap()
        .optional_of(|b| b.literally("u"))
        .unwrap()
        .literally("r")
        .unwrap();
    let query = Srl::new("literally \"colo\", optional \"u\", literally \"r\"").unwrap();
    assert_eq!(fluent.pattern(), query.pattern());
}

#[test]
fn test_fluent_anchored_counts() {
    let b = Builder::new()
        .begin_with()
        .unwrap()
        .digit()
        .unwrap()
        .exactly(2)
        .unwrap()
        .letter()
        .unwrap()
        .at_least(3)
        .unwrap();
    assert_eq!(b.pattern(), "^[0-9]{2}[a-z]{3,}");
    assert!(b.is_matching("42abc").unwrap());
}

#[test]
fn test_fluent_capture_and_match() {
    let b = Builder::new()
        .literally("price:")
        .unwrap()
        .whitespace()
        .unwrap()
        .capture(|b| b.digit()?.once_or_more(), Some("price"))
        .unwrap();
    let found = b.get_matches("price: 25").unwrap();
    assert_eq!(found[0].get("price"), Some("25"));
}

#[test]
fn test_fluent_any_of() {
    let b = Builder::new()
        .any_of(|b| b.literally("gray")?.literally("grey"))
        .unwrap();
    assert_eq!(b.pattern(), "(?:(?:gray)|(?:grey))");
    assert!(b.is_matching("grey").unwrap());
}

#[test]
fn test_fluent_lookarounds() {
    let b = Builder::new()
        .capture(|b| b.digit()?.once_or_more(), None)
        .unwrap()
        .if_followed_by(|b| b.literally("px"))
        .unwrap();
    assert_eq!(b.pattern(), "([0-9]+)(?=(?:px))");

    let b = Builder::new()
        .literally("bar")
        .unwrap()
        .if_not_already_had(|b| b.literally("foo"))
        .unwrap();
    assert_eq!(b.pattern(), "(?<!(?:foo))(?:bar)");
}

#[test]
fn test_fluent_until() {
    let b = Builder::new()
        .anything()
        .unwrap()
        .once_or_more()
        .unwrap()
        .until(|b| b.literally("m"))
        .unwrap();
    assert_eq!(b.pattern(), ".+?(?:m)");
}

#[test]
fn test_grammar_rejections() {
    assert!(matches!(
        Builder::new().once_or_more(),
        Err(SrlError::Implementation(_))
    ));
    assert!(matches!(
        Builder::new().literally("a").unwrap().begin_with(),
        Err(SrlError::Implementation(_))
    ));
    assert!(matches!(
        Builder::new()
            .literally("a")
            .unwrap()
            .must_end()
            .unwrap()
            .digit(),
        Err(SrlError::Implementation(_))
    ));
}

#[test]
fn test_raw_fragment() {
    let b = Builder::new()
        .literally("v")
        .unwrap()
        .raw("[0-9]{1,3}(\\.[0-9]{1,3}){3}")
        .unwrap();
    assert!(b.is_matching("v127.0.0.1").unwrap());

    assert!(matches!(
        Builder::new().raw("(unclosed"),
        Err(SrlError::Builder(_))
    ));
}

#[test]
fn test_modifiers_and_rendering() {
    let b = Builder::new()
        .literally("foo")
        .unwrap()
        .case_insensitive()
        .all();
    assert_eq!(b.modifiers(), "ig");
    assert_eq!(b.get("/").unwrap(), "/(?:foo)/ig");
    assert!(b.is_matching("FOO").unwrap());
}

#[test]
fn test_from_builder_facade() {
    let b = Builder::new()
        .letter()
        .unwrap()
        .once_or_more()
        .unwrap();
    let srl = Srl::from_builder(b);
    assert_eq!(srl.replace("X", "ab 12").unwrap(), "X 12");
    assert_eq!(srl.split("ab12cd").unwrap(), vec!["", "12", ""]);
}
