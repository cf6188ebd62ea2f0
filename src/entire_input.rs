use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{Outcome, Parser};

/// Parser combinator that requires its parser to consume the whole input
///
/// A match that leaves characters behind is rejected with `NoMatch` at the
/// first unconsumed character.
#[derive(Debug, Clone, Copy)]
pub struct EntireInput<P> {
    parser: P,
}

impl<P> EntireInput<P> {
    pub fn new(parser: P) -> Self {
        EntireInput { parser }
    }
}

impl<'code, P> Parser<'code> for EntireInput<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        if !cursor.is_at_end() {
            return Err(Failure::no_match(cursor));
        }
        Ok((value, cursor))
    }
}

/// Convenience function to create an EntireInput parser
pub fn entire_input<'code, P>(parser: P) -> EntireInput<P>
where
    P: Parser<'code>,
{
    EntireInput::new(parser)
}
