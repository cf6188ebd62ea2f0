use crate::adapter::Nullary;
use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use crate::primitive::one_char;

/// Parser that matches a specific character and yields a produced value
/// instead of the character
///
/// Useful for tokens whose meaning comes from where they appear rather than
/// from the text they consume.
#[derive(Debug, Clone, Copy)]
pub struct Always<F> {
    expected: char,
    value: Nullary<F>,
}

impl<F> Always<F> {
    pub fn new<V>(expected: char, value: F) -> Self
    where
        F: Fn() -> V,
    {
        Always {
            expected,
            value: Nullary::new(value),
        }
    }
}

impl<'code, F, V> Parser<'code> for Always<F>
where
    F: Fn() -> V,
{
    type Output = V;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = one_char(cursor, |ch| ch == self.expected)?;
        Ok((self.value.produce(), cursor))
    }
}

/// Convenience function to create an Always parser
pub fn always<V, F>(expected: char, value: F) -> Always<F>
where
    F: Fn() -> V,
{
    Always::new(expected, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::one_of::one_of;
    use std::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Op {
        Add,
        Sub,
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_always_substitutes_value() {
        let data = chars("+1");
        let (op, cursor) = always('+', || Op::Add).parse(Cursor::new(&data)).unwrap();

        assert_eq!(op, Op::Add);
        assert_eq!(cursor.value(), Some('1'));
    }

    #[test]
    fn test_always_in_alternation() {
        let data = chars("-");
        let parser = one_of((always('+', || Op::Add), always('-', || Op::Sub)));

        let (op, cursor) = parser.parse(Cursor::new(&data)).unwrap();
        assert_eq!(op, Op::Sub);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_always_mismatch_is_no_match() {
        let data = chars("*");
        let failure = always('+', || Op::Add).parse(Cursor::new(&data)).unwrap_err();

        assert_eq!(failure.kind, FailureKind::NoMatch);
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_always_at_end_is_incomplete() {
        let data: Vec<char> = Vec::new();
        let failure = always('+', || Op::Add).parse(Cursor::new(&data)).unwrap_err();
        assert_eq!(failure.kind, FailureKind::Incomplete);
    }

    #[test]
    fn test_producer_only_runs_on_match() {
        let calls = Cell::new(0);
        let parser = always('+', || {
            calls.set(calls.get() + 1);
            Op::Add
        });

        let data = chars("-");
        assert!(parser.parse(Cursor::new(&data)).is_err());
        assert_eq!(calls.get(), 0);

        let data = chars("+");
        assert!(parser.parse(Cursor::new(&data)).is_ok());
        assert_eq!(calls.get(), 1);
    }
}
