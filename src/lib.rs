//! # vyaka
//!
//! A small parsing expression grammar (PEG) combinator engine over
//! arbitrary symbol sequences. Expressions are immutable values composed
//! once at startup and applied through the single [`parse`] entry point;
//! every application reports a verdict plus the half-open span of consumed
//! input.
//!
//! The engine is purely functional: no I/O, no shared mutable state, and no
//! error channel beyond a failed [`Match`]. Ordered choice commits to the
//! first successful alternative, and composites fully backtrack on failure,
//! reporting a zero-width span at their own starting position. Recursion
//! depth follows grammar nesting and is bounded only by the host call
//! stack.

pub use crate::expression::{parse, ExprRef, Expression};
pub use crate::input::Input;
pub use crate::span::{Match, Span};

pub mod atoms;
pub mod cli;
pub mod combinators;
pub mod derived;
pub mod expression;
pub mod input;
pub mod span;
