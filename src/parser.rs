use crate::cursor::Cursor;
use crate::error::Failure;

/// Result of running a parser: the value and the advanced cursor, or a
/// failure describing why and where parsing stopped
pub type Outcome<'code, T> = Result<(T, Cursor<'code>), Failure<'code>>;

/// Core parser trait for parser combinators
///
/// Parsers are stateless values. The same parser may be run any number of
/// times, from any thread, against independent inputs.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor after it on success. The input
    /// cursor is never mutated; callers keep it to backtrack.
    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.as_ref().parse(cursor)
    }
}
