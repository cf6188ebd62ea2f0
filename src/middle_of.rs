use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This parses: `left + middle + right` and returns just the `middle` value
/// with the delimiters discarded. The first failing part ends the sequence
/// and its failure is returned as is.
///
/// # Examples
/// - `"(value)"` → `"value"`
/// - `"[5]"` → `'5'`
#[derive(Debug, Clone, Copy)]
pub struct MiddleOf<L, M, R> {
    left: L,
    middle: M,
    right: R,
}

impl<L, M, R> MiddleOf<L, M, R> {
    pub fn new(left: L, middle: M, right: R) -> Self {
        MiddleOf {
            left,
            middle,
            right,
        }
    }
}

impl<'code, L, M, R> Parser<'code> for MiddleOf<L, M, R>
where
    L: Parser<'code>,
    M: Parser<'code>,
    R: Parser<'code>,
{
    type Output = M::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = self.left.parse(cursor)?;
        let (value, cursor) = self.middle.parse(cursor)?;
        let (_, cursor) = self.right.parse(cursor)?;

        Ok((value, cursor))
    }
}

/// Creates a parser that keeps only the middle of three sequenced parsers
pub fn middle_of<'code, L, M, R>(left: L, middle: M, right: R) -> MiddleOf<L, M, R>
where
    L: Parser<'code>,
    M: Parser<'code>,
    R: Parser<'code>,
{
    MiddleOf::new(left, middle, right)
}
