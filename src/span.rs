//! Span and match result value types.
//!
//! Every expression application produces a [`Match`]: a verdict plus the
//! half-open [`Span`] of consumed input. These are pure value types; the
//! failure-side invariant lives in the constructors.

use serde::{Deserialize, Serialize};

/// A half-open interval over two input positions.
///
/// `begin == end` denotes an empty, zero-consumption span. Immutable once
/// constructed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span<P> {
    begin: P,
    end: P,
}

impl<P: Copy + Eq> Span<P> {
    pub fn new(begin: P, end: P) -> Self {
        Self { begin, end }
    }

    /// The empty span collapsed at a single position.
    pub fn collapsed(at: P) -> Self {
        Self { begin: at, end: at }
    }

    pub fn begin(&self) -> P {
        self.begin
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// The outcome of applying an expression: a verdict plus the consumed span.
///
/// On failure the span is always collapsed at the position where matching
/// was attempted; composite expressions never report partial progress, so a
/// consumer cannot distinguish "matched three of five members" from
/// "matched none".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match<P> {
    verdict: bool,
    span: Span<P>,
}

impl<P: Copy + Eq> Match<P> {
    pub fn success(span: Span<P>) -> Self {
        Self {
            verdict: true,
            span,
        }
    }

    /// A failed match attempted at `at`; the span collapses there.
    pub fn failure(at: P) -> Self {
        Self {
            verdict: false,
            span: Span::collapsed(at),
        }
    }

    pub fn is_match(&self) -> bool {
        self.verdict
    }

    pub fn span(&self) -> Span<P> {
        self.span
    }
}

impl<P> From<Match<P>> for bool {
    fn from(m: Match<P>) -> bool {
        m.verdict
    }
}
