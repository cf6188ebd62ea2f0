//! Behavioural laws of the combinator algebra, exercised through the public
//! entry point.

use charcomb::{
    Cursor, FailureKind, Parser, TransformExt, any_except, build, entire_input,
    foldl_reject_incomplete, foldl_reject_incomplete1, literal, middle_of, one_of, transform,
};
use rstest::rstest;
use std::sync::Once;
use std::thread;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn concat(mut acc: String, ch: char) -> String {
    acc.push(ch);
    acc
}

#[rstest]
#[case('a', 'b')]
#[case('0', '1')]
#[case('λ', 'l')]
fn literal_distinguishes_characters(#[case] expected: char, #[case] other: char) {
    init_tracing();
    let parser = literal(expected);

    let mismatch = [other];
    let failure = parser.parse(Cursor::new(&mismatch)).unwrap_err();
    assert_eq!(failure.kind, FailureKind::NoMatch);

    let exact = [expected];
    let (value, cursor) = parser.parse(Cursor::new(&exact)).unwrap();
    assert_eq!(value, expected);
    assert!(cursor.is_at_end());
}

#[rstest]
#[case::first("a", 'a', 1)]
#[case::after_partial_branch("(b", 'B', 1)]
#[case::last("c", 'c', 1)]
fn alternation_returns_first_success(
    #[case] input: &str,
    #[case] expected: char,
    #[case] position: usize,
) {
    init_tracing();
    let data = chars(input);
    // The second branch consumes '(' before failing on "(b"
    let parser = one_of((
        literal('a'),
        middle_of(literal('('), literal('a'), literal(')')),
        literal('(').transform(|_| 'B'),
        literal('c'),
    ));

    let (value, cursor) = parser.parse(Cursor::new(&data)).unwrap();
    assert_eq!(value, expected);
    assert_eq!(cursor.position(), position);
}

#[rstest]
#[case("")]
#[case("a")]
#[case("b")]
#[case("ab")]
fn transform_identity_is_transparent(#[case] input: &str) {
    let data = chars(input);
    let parser = foldl_reject_incomplete1(literal('a'), String::new, concat);

    let plain = parser.parse(Cursor::new(&data));
    let identity = transform(&parser, |value| value).parse(Cursor::new(&data));
    assert_eq!(plain, identity);
}

#[test]
fn fold_stops_before_excluded_character() {
    init_tracing();
    let data = chars("abc)");
    let parser = foldl_reject_incomplete(any_except([')']), String::new, concat);

    let (value, cursor) = parser.parse(Cursor::new(&data)).unwrap();
    assert_eq!(value, "abc");
    assert_eq!(cursor.value(), Some(')'));
}

#[test]
fn fold_rejects_truncated_repetition() {
    init_tracing();
    // Each repetition spans three characters; the input ends inside the second
    let pair = middle_of(literal('<'), any_except([]), any_except([]));
    let parser = build(foldl_reject_incomplete(pair, String::new, concat));

    assert_eq!(parser.parse_str("<a.<b."), Ok("ab".to_string()));

    let error = parser.parse_str("<a.<b").unwrap_err();
    assert_eq!(error.kind(), FailureKind::Incomplete);
    assert_eq!(error.position(), 5);
}

#[test]
fn fold1_never_returns_bare_initial() {
    let parser = build(foldl_reject_incomplete1(
        any_except([')']),
        || String::from("initial"),
        concat,
    ));

    let error = parser.parse_str(")").unwrap_err();
    assert_eq!(error.kind(), FailureKind::NoMatch);
    assert_eq!(error.position(), 0);
}

#[test]
fn anchor_rejects_trailing_input() {
    let data = chars("ab");
    assert!(literal('a').parse(Cursor::new(&data)).is_ok());

    let error = build(entire_input(literal('a'))).parse(&data).unwrap_err();
    assert_eq!(error.kind(), FailureKind::NoMatch);
    assert_eq!(error.position(), 1);
}

#[test]
fn middle_of_extracts_folded_content() {
    let content = foldl_reject_incomplete(any_except([')']), String::new, concat);
    let parser = build(middle_of(literal('('), content, literal(')')));

    assert_eq!(parser.parse_str("(5)"), Ok("5".to_string()));
}

#[test]
fn parsing_is_deterministic() {
    let content = foldl_reject_incomplete(any_except([')']), String::new, concat);
    let parser = build(entire_input(middle_of(literal('('), content, literal(')'))));

    for input in ["(abc)", "(abc", "abc)", "(a)b", ""] {
        assert_eq!(parser.parse_str(input), parser.parse_str(input), "input: {input:?}");
    }
}

#[test]
fn built_parser_is_shared_across_threads() {
    init_tracing();
    let content = foldl_reject_incomplete1(any_except([')']), String::new, concat);
    let parser = build(entire_input(middle_of(literal('('), content, literal(')'))));

    let inputs: Vec<String> = (0..8).map(|n| format!("({})", "x".repeat(n + 1))).collect();
    let parser = &parser;

    thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || parser.parse_str(input)))
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let result = handle.join().expect("parser thread panicked");
            assert_eq!(result, Ok("x".repeat(n + 1)));
        }
    });
}
