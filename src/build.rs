use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use tracing::{debug, instrument};

/// A combinator expression packaged as a runnable parser
///
/// Every call starts from a fresh cursor at offset 0 and shares nothing with
/// any other call, so one `Built` can serve many inputs, also from several
/// threads at once when its host functions are `Send + Sync`.
#[derive(Debug, Clone, Copy)]
pub struct Built<P> {
    expr: P,
}

impl<P> Built<P> {
    pub fn new(expr: P) -> Self {
        Built { expr }
    }

    /// Parse a character sequence from the start
    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn parse<'code>(&self, input: &'code [char]) -> Result<P::Output, ParseError>
    where
        P: Parser<'code>,
    {
        match self.expr.parse(Cursor::new(input)) {
            Ok((value, cursor)) => {
                debug!(consumed = cursor.position(), "parse succeeded");
                Ok(value)
            }
            Err(failure) => {
                debug!(position = failure.position(), kind = %failure.kind, "parse failed");
                Err(ParseError::from(failure))
            }
        }
    }

    /// Parse a string, addressing positions in characters rather than bytes
    pub fn parse_str<O>(&self, input: &str) -> Result<O, ParseError>
    where
        P: for<'code> Parser<'code, Output = O>,
    {
        let chars: Vec<char> = input.chars().collect();
        self.parse(&chars)
    }
}

/// Wrap a combinator expression into a runnable parser
pub fn build<'code, P>(expr: P) -> Built<P>
where
    P: Parser<'code>,
{
    Built::new(expr)
}
