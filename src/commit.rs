use crate::cursor::Cursor;
use crate::error::{Failure, FailureKind};
use crate::parser::{Outcome, Parser};
use tracing::trace;

/// Parser combinator that turns any failure of its parser into `Fatal`
///
/// Use it once enough input has been seen that no other alternative can
/// apply: enclosing alternations stop trying siblings and enclosing folds
/// stop repeating, so the failure reaches the caller with its position
/// intact.
#[derive(Debug, Clone, Copy)]
pub struct Commit<P> {
    parser: P,
}

impl<P> Commit<P> {
    pub fn new(parser: P) -> Self {
        Commit { parser }
    }
}

impl<'code, P> Parser<'code> for Commit<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|failure| {
            if failure.kind != FailureKind::Fatal {
                trace!(position = failure.position(), kind = %failure.kind, "committed parser failed");
            }
            Failure::fatal(failure.cursor)
        })
    }
}

/// Convenience function to create a Commit parser
pub fn commit<'code, P>(parser: P) -> Commit<P>
where
    P: Parser<'code>,
{
    Commit::new(parser)
}

/// Extension trait to add .commit() method support for parsers
pub trait CommitExt<'code>: Parser<'code> + Sized {
    fn commit(self) -> Commit<Self> {
        Commit::new(self)
    }
}

/// Implement CommitExt for all parsers
impl<'code, P> CommitExt<'code> for P where P: Parser<'code> {}
