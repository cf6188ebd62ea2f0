use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{Outcome, Parser};

/// Consume one character if `accept` holds for it
///
/// Running out of input is `Incomplete`, a rejected character is `NoMatch`.
/// Both are reported at the cursor that was asked for the character.
pub(crate) fn one_char<'code>(
    cursor: Cursor<'code>,
    accept: impl Fn(char) -> bool,
) -> Outcome<'code, char> {
    match cursor.value() {
        Some(ch) if accept(ch) => Ok((ch, cursor.next())),
        Some(_) => Err(Failure::no_match(cursor)),
        None => Err(Failure::incomplete(cursor)),
    }
}

/// Parser that matches a specific character
#[derive(Debug, Clone, Copy)]
pub struct Literal {
    expected: char,
}

impl Literal {
    pub fn new(expected: char) -> Self {
        Literal { expected }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        one_char(cursor, |ch| ch == self.expected)
    }
}

/// Parser that matches any single character outside an exclusion set
#[derive(Debug, Clone)]
pub struct AnyExcept {
    excluded: Box<[char]>,
}

impl AnyExcept {
    pub fn new(excluded: impl IntoIterator<Item = char>) -> Self {
        AnyExcept {
            excluded: excluded.into_iter().collect(),
        }
    }
}

impl<'code> Parser<'code> for AnyExcept {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        one_char(cursor, |ch| !self.excluded.contains(&ch))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: char) -> Literal {
    Literal::new(expected)
}

/// Convenience function to create an AnyExcept parser
///
/// An empty set accepts every character.
pub fn any_except(excluded: impl IntoIterator<Item = char>) -> AnyExcept {
    AnyExcept::new(excluded)
}
