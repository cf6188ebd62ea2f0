use crate::adapter::Unary;
use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that transforms the output of a parser using a function
#[derive(Debug, Clone, Copy)]
pub struct Transform<P, F> {
    parser: P,
    function: Unary<F>,
}

impl<P, F> Transform<P, F> {
    pub fn new<T, U>(parser: P, function: F) -> Self
    where
        F: Fn(T) -> U,
    {
        Transform {
            parser,
            function: Unary::new(function),
        }
    }
}

impl<'code, P, F, U> Parser<'code> for Transform<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok((self.function.apply(value), cursor))
    }
}

/// Convenience function to create a Transform parser
pub fn transform<'code, P, F, U>(parser: P, function: F) -> Transform<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Transform::new(parser, function)
}

/// Extension trait to add .transform() method support for parsers
pub trait TransformExt<'code>: Parser<'code> + Sized {
    fn transform<F, U>(self, function: F) -> Transform<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Transform::new(self, function)
    }
}

/// Implement TransformExt for all parsers
impl<'code, P> TransformExt<'code> for P where P: Parser<'code> {}
