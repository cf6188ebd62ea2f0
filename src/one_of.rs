use crate::cursor::Cursor;
use crate::error::{Failure, FailureKind};
use crate::parser::{Outcome, Parser};
use std::ops::ControlFlow;
use tracing::trace;

/// A non-empty, ordered list of alternative parsers sharing one output type
///
/// Implemented for tuples of 1 to 8 parsers. There is no empty alternation.
pub trait Branches<'code> {
    type Output;

    /// Try each branch in order from the same cursor
    fn alternate(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;
}

/// Failure bookkeeping across the branches of one alternation
///
/// The reported kind is the last branch's, the reported cursor the furthest
/// any branch reached.
struct Attempts<'code> {
    kind: FailureKind,
    furthest: Cursor<'code>,
}

impl<'code> Attempts<'code> {
    fn new(cursor: Cursor<'code>) -> Self {
        Attempts {
            kind: FailureKind::NoMatch,
            furthest: cursor,
        }
    }

    fn record(&mut self, failure: Failure<'code>) -> ControlFlow<Failure<'code>> {
        if failure.is_fatal() {
            return ControlFlow::Break(failure);
        }
        trace!(
            position = failure.position(),
            kind = %failure.kind,
            "alternative rejected, backtracking"
        );
        self.kind = failure.kind;
        if failure.position() > self.furthest.position() {
            self.furthest = failure.cursor;
        }
        ControlFlow::Continue(())
    }

    fn exhausted(self) -> Failure<'code> {
        Failure::new(self.kind, self.furthest)
    }
}

macro_rules! impl_branches {
    ($($parser:ident . $index:tt),+) => {
        impl<'code, O, $($parser),+> Branches<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code, Output = O>,)+
        {
            type Output = O;

            fn alternate(&self, cursor: Cursor<'code>) -> Outcome<'code, O> {
                let mut attempts = Attempts::new(cursor);
                $(
                    match self.$index.parse(cursor) {
                        Ok(found) => return Ok(found),
                        Err(failure) => {
                            if let ControlFlow::Break(fatal) = attempts.record(failure) {
                                return Err(fatal);
                            }
                        }
                    }
                )+
                Err(attempts.exhausted())
            }
        }
    };
}

impl_branches!(P1.0);
impl_branches!(P1.0, P2.1);
impl_branches!(P1.0, P2.1, P3.2);
impl_branches!(P1.0, P2.1, P3.2, P4.3);
impl_branches!(P1.0, P2.1, P3.2, P4.3, P5.4);
impl_branches!(P1.0, P2.1, P3.2, P4.3, P5.4, P6.5);
impl_branches!(P1.0, P2.1, P3.2, P4.3, P5.4, P6.5, P7.6);
impl_branches!(P1.0, P2.1, P3.2, P4.3, P5.4, P6.5, P7.6, P8.7);

/// Parser combinator that returns the first branch to succeed
///
/// Every branch starts from the original cursor, so partial progress made by
/// a rejected branch never leaks into the next one. A `Fatal` failure ends the
/// alternation immediately.
#[derive(Debug, Clone, Copy)]
pub struct OneOf<B> {
    branches: B,
}

impl<B> OneOf<B> {
    pub fn new(branches: B) -> Self {
        OneOf { branches }
    }
}

impl<'code, B> Parser<'code> for OneOf<B>
where
    B: Branches<'code>,
{
    type Output = B::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.branches.alternate(cursor)
    }
}

/// Convenience function to create a OneOf parser from a tuple of branches
pub fn one_of<'code, B>(branches: B) -> OneOf<B>
where
    B: Branches<'code>,
{
    OneOf::new(branches)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> OneOf<(Self, P)>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        OneOf::new((self, other))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
