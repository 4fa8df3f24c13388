//! The expression capability and the parse driver.
//!
//! Every concrete expression implements [`Expression`]: a pure, stateless
//! function of `(input, position, end)` to [`Match`]. Composite expressions
//! hold their sub-expressions through the shared [`ExprRef`] handle, so one
//! expression value can appear under many parents and be invoked from many
//! threads at once.

use std::sync::Arc;

use crate::input::Input;
use crate::span::Match;

/// A single matching capability over input `I`.
///
/// Implementations must be reentrant: the same expression value is reused
/// across arbitrarily many parse attempts, including nested and recursive
/// ones, and never retains state between invocations.
pub trait Expression<I: Input + ?Sized> {
    /// Attempt a match at `at`, never looking at or beyond `end`.
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos>;
}

/// Shared handle to an expression node.
///
/// Grammars are acyclic expression trees built once at startup; `Arc` lets a
/// sub-expression be reused under multiple parents and shared across
/// threads, and gives recursive rules the indirection they need.
pub type ExprRef<I> = Arc<dyn Expression<I> + Send + Sync>;

impl<I, T> Expression<I> for Arc<T>
where
    I: Input + ?Sized,
    T: Expression<I> + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        (**self).apply(input, at, end)
    }
}

/// Apply `expr` to `input` over `[begin, end)`.
///
/// A single forwarding call: no retry, no iteration, no error translation.
/// All success/failure semantics live in the expression tree. Calling
/// `parse` again with the returned match's span end as the new `begin` is
/// the idiom for consuming successive tokens from one input; every call
/// yields a fresh, independent [`Match`].
pub fn parse<I, E>(expr: &E, input: &I, begin: I::Pos, end: I::Pos) -> Match<I::Pos>
where
    I: Input + ?Sized,
    E: Expression<I> + ?Sized,
{
    expr.apply(input, begin, end)
}
