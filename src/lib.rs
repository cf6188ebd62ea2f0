//! # CharComb - Character Parser Combinators
//!
//! A small algebra of composable parsers over character sequences, with a
//! failure model precise enough to drive backtracking and repetition
//! correctly.
//!
//! Every parser either succeeds with a value and an advanced cursor, or fails
//! with one of three kinds:
//!
//! - **`NoMatch`**: the construct does not apply here; alternation tries the
//!   next branch and repetition stops cleanly
//! - **`Incomplete`**: the input ended in the middle of a construct; a fold
//!   refuses to silently truncate it into a shorter match
//! - **`Fatal`**: a committed construct failed; nothing backtracks over it
//!
//! Semantic actions are plain Rust closures. The adapter layer wraps them so
//! the combinators only ever see one calling convention.
//!
//! ```rust
//! use charcomb::{build, entire_input, foldl_reject_incomplete, middle_of};
//! use charcomb::{any_except, literal, FailureKind};
//!
//! let word = foldl_reject_incomplete(any_except([')']), String::new, |mut acc: String, ch| {
//!     acc.push(ch);
//!     acc
//! });
//! let parser = build(entire_input(middle_of(literal('('), word, literal(')'))));
//!
//! assert_eq!(parser.parse_str("(5)").unwrap(), "5");
//! assert_eq!(parser.parse_str("(5").unwrap_err().kind(), FailureKind::Incomplete);
//! ```

pub mod adapter;
pub mod always;
pub mod build;
pub mod commit;
pub mod cursor;
pub mod entire_input;
pub mod error;
pub mod fold;
pub mod middle_of;
pub mod one_of;
pub mod parser;
pub mod primitive;
pub mod transform;

pub use adapter::{Binary, Nullary, Unary};
pub use always::always;
pub use build::{Built, build};
pub use commit::{CommitExt, commit};
pub use cursor::Cursor;
pub use entire_input::entire_input;
pub use error::{Failure, FailureKind, Location, ParseError};
pub use fold::{foldl_reject_incomplete, foldl_reject_incomplete1};
pub use middle_of::middle_of;
pub use one_of::{OrExt, one_of};
pub use parser::{Outcome, Parser};
pub use primitive::{any_except, literal};
pub use transform::{TransformExt, transform};
