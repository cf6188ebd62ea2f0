//! Adapters lifting plain host functions into the shapes the combinators run.
//!
//! Every semantic action a combinator invokes goes through exactly one of
//! these wrappers: [`Nullary`] for producers (fold seeds, `always` values),
//! [`Unary`] for value transformations and [`Binary`] for fold steps. User
//! code is written against ordinary values; the wrappers only fix the arity.
//!
//! A function of the wrong arity is rejected when the expression is built:
//!
//! ```compile_fail
//! use charcomb::adapter::Nullary;
//!
//! // One argument where a producer takes none
//! let seed = Nullary::new(|x: u32| x);
//! ```
//!
//! ```compile_fail
//! use charcomb::adapter::Binary;
//!
//! // One argument where a fold step takes two
//! let step = Binary::new(|acc: String| acc);
//! ```

use std::fmt;

/// Zero-argument function producing a fresh value on every call
#[derive(Clone, Copy)]
pub struct Nullary<F> {
    function: F,
}

impl<F> Nullary<F> {
    pub fn new<V>(function: F) -> Self
    where
        F: Fn() -> V,
    {
        Nullary { function }
    }

    pub fn produce<V>(&self) -> V
    where
        F: Fn() -> V,
    {
        (self.function)()
    }
}

/// One-argument function applied to a parsed value
#[derive(Clone, Copy)]
pub struct Unary<F> {
    function: F,
}

impl<F> Unary<F> {
    pub fn new<A, B>(function: F) -> Self
    where
        F: Fn(A) -> B,
    {
        Unary { function }
    }

    pub fn apply<A, B>(&self, value: A) -> B
    where
        F: Fn(A) -> B,
    {
        (self.function)(value)
    }
}

/// Two-argument function folding a value into an accumulator
#[derive(Clone, Copy)]
pub struct Binary<F> {
    function: F,
}

impl<F> Binary<F> {
    pub fn new<Acc, V>(function: F) -> Self
    where
        F: Fn(Acc, V) -> Acc,
    {
        Binary { function }
    }

    pub fn combine<Acc, V>(&self, accumulator: Acc, value: V) -> Acc
    where
        F: Fn(Acc, V) -> Acc,
    {
        (self.function)(accumulator, value)
    }
}

impl<F> fmt::Debug for Nullary<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nullary")
            .field("function", &"<function>")
            .finish()
    }
}

impl<F> fmt::Debug for Unary<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unary")
            .field("function", &"<function>")
            .finish()
    }
}

impl<F> fmt::Debug for Binary<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binary")
            .field("function", &"<function>")
            .finish()
    }
}
