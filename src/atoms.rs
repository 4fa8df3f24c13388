//! Atomic expressions: the single-step leaves every grammar bottoms out in.
//!
//! Each atomic tests at most one symbol; on failure the reported span
//! collapses at the attempted position.

use std::sync::Arc;

use crate::expression::{ExprRef, Expression};
use crate::input::Input;
use crate::span::{Match, Span};

struct Sym<S> {
    expected: S,
}

impl<I> Expression<I> for Sym<I::Symbol>
where
    I: Input + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        if at != end && input.symbol_at(at) == self.expected {
            Match::success(Span::new(at, input.advance(at)))
        } else {
            Match::failure(at)
        }
    }
}

struct AnySym;

impl<I> Expression<I> for AnySym
where
    I: Input + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        if at != end {
            Match::success(Span::new(at, input.advance(at)))
        } else {
            Match::failure(at)
        }
    }
}

struct EndOfInput;

impl<I> Expression<I> for EndOfInput
where
    I: Input + ?Sized,
{
    fn apply(&self, _input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        if at == end {
            Match::success(Span::collapsed(at))
        } else {
            Match::failure(at)
        }
    }
}

/// Match one literal symbol, consuming exactly one position on success.
pub fn sym<I>(expected: I::Symbol) -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
    I::Symbol: Send + Sync + 'static,
{
    Arc::new(Sym { expected })
}

/// Match any single symbol; fails only at end of input.
pub fn any_sym<I>() -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
{
    Arc::new(AnySym)
}

/// Succeed exactly at end of input, consuming nothing either way.
pub fn end_of_input<I>() -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
{
    Arc::new(EndOfInput)
}
