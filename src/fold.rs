use crate::adapter::{Binary, Nullary};
use crate::cursor::Cursor;
use crate::error::FailureKind;
use crate::parser::{Outcome, Parser};
use tracing::trace;

/// Left fold over repeated applications of a parser
///
/// Stops with success when the repeated parser reports `NoMatch`. An
/// `Incomplete` or `Fatal` failure means a repetition was attempted but is
/// malformed, so the fold fails with it instead of returning a shorter match.
/// The one exception is `Incomplete` reported exactly where the attempt
/// started: the input ended between repetitions and nothing was cut short.
///
/// A repetition that succeeds without consuming input also ends the fold,
/// so folding always terminates.
fn fold_rest<'code, P, C, Acc>(
    parser: &P,
    combine: &Binary<C>,
    mut accumulator: Acc,
    mut cursor: Cursor<'code>,
) -> Outcome<'code, Acc>
where
    P: Parser<'code>,
    C: Fn(Acc, P::Output) -> Acc,
{
    loop {
        match parser.parse(cursor) {
            Ok((_, next)) if next.position() == cursor.position() => {
                trace!(position = cursor.position(), "repetition consumed nothing, stopping fold");
                return Ok((accumulator, cursor));
            }
            Ok((value, next)) => {
                accumulator = combine.combine(accumulator, value);
                cursor = next;
            }
            Err(failure) => {
                let clean = match failure.kind {
                    FailureKind::NoMatch => true,
                    FailureKind::Incomplete => failure.position() == cursor.position(),
                    FailureKind::Fatal => false,
                };
                if !clean {
                    return Err(failure);
                }
                trace!(position = cursor.position(), kind = %failure.kind, "fold stopped");
                return Ok((accumulator, cursor));
            }
        }
    }
}

/// Zero-or-more left fold
#[derive(Debug, Clone, Copy)]
pub struct FoldlRejectIncomplete<P, I, C> {
    parser: P,
    initial: Nullary<I>,
    combine: Binary<C>,
}

impl<P, I, C> FoldlRejectIncomplete<P, I, C> {
    pub fn new<T, Acc>(parser: P, initial: I, combine: C) -> Self
    where
        I: Fn() -> Acc,
        C: Fn(Acc, T) -> Acc,
    {
        FoldlRejectIncomplete {
            parser,
            initial: Nullary::new(initial),
            combine: Binary::new(combine),
        }
    }
}

impl<'code, P, I, C, Acc> Parser<'code> for FoldlRejectIncomplete<P, I, C>
where
    P: Parser<'code>,
    I: Fn() -> Acc,
    C: Fn(Acc, P::Output) -> Acc,
{
    type Output = Acc;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        fold_rest(&self.parser, &self.combine, self.initial.produce(), cursor)
    }
}

/// One-or-more left fold
///
/// Like [`FoldlRejectIncomplete`] but the first application must succeed;
/// its failure, whatever the kind, is the fold's failure.
#[derive(Debug, Clone, Copy)]
pub struct FoldlRejectIncomplete1<P, I, C> {
    parser: P,
    initial: Nullary<I>,
    combine: Binary<C>,
}

impl<P, I, C> FoldlRejectIncomplete1<P, I, C> {
    pub fn new<T, Acc>(parser: P, initial: I, combine: C) -> Self
    where
        I: Fn() -> Acc,
        C: Fn(Acc, T) -> Acc,
    {
        FoldlRejectIncomplete1 {
            parser,
            initial: Nullary::new(initial),
            combine: Binary::new(combine),
        }
    }
}

impl<'code, P, I, C, Acc> Parser<'code> for FoldlRejectIncomplete1<P, I, C>
where
    P: Parser<'code>,
    I: Fn() -> Acc,
    C: Fn(Acc, P::Output) -> Acc,
{
    type Output = Acc;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let accumulator = self.initial.produce();

        // First application must succeed
        let (value, cursor) = self.parser.parse(cursor)?;
        let accumulator = self.combine.combine(accumulator, value);

        fold_rest(&self.parser, &self.combine, accumulator, cursor)
    }
}

/// Convenience function to create a zero-or-more fold
pub fn foldl_reject_incomplete<'code, P, I, C, Acc>(
    parser: P,
    initial: I,
    combine: C,
) -> FoldlRejectIncomplete<P, I, C>
where
    P: Parser<'code>,
    I: Fn() -> Acc,
    C: Fn(Acc, P::Output) -> Acc,
{
    FoldlRejectIncomplete::new(parser, initial, combine)
}

/// Convenience function to create a one-or-more fold
pub fn foldl_reject_incomplete1<'code, P, I, C, Acc>(
    parser: P,
    initial: I,
    combine: C,
) -> FoldlRejectIncomplete1<P, I, C>
where
    P: Parser<'code>,
    I: Fn() -> Acc,
    C: Fn(Acc, P::Output) -> Acc,
{
    FoldlRejectIncomplete1::new(parser, initial, combine)
}
