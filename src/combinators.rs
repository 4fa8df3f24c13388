//! Combinators: composite expressions over one or more sub-expressions.
//!
//! All composites observe the PEG failure discipline: on any failure the
//! reported span collapses at the composite's own starting position, never
//! at the failing member's. A consumer cannot observe partial progress.

use std::sync::Arc;

use crate::expression::{ExprRef, Expression};
use crate::input::Input;
use crate::span::{Match, Span};

struct Sequence<I: Input + ?Sized> {
    parts: Vec<ExprRef<I>>,
}

impl<I> Expression<I> for Sequence<I>
where
    I: Input + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        let mut pos = at;
        for part in &self.parts {
            let m = part.apply(input, pos, end);
            if !m.is_match() {
                // Rewind to the sequence's own start, not the failing part's.
                return Match::failure(at);
            }
            pos = m.span().end();
        }
        Match::success(Span::new(at, pos))
    }
}

struct Choice<I: Input + ?Sized> {
    alternatives: Vec<ExprRef<I>>,
}

impl<I> Expression<I> for Choice<I>
where
    I: Input + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        for alternative in &self.alternatives {
            let m = alternative.apply(input, at, end);
            if m.is_match() {
                return m;
            }
        }
        Match::failure(at)
    }
}

struct Repetition<I: Input + ?Sized> {
    inner: ExprRef<I>,
}

impl<I> Expression<I> for Repetition<I>
where
    I: Input + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        let mut pos = at;
        loop {
            let m = self.inner.apply(input, pos, end);
            if !m.is_match() {
                // The terminating failed attempt contributes nothing.
                break;
            }
            let next = m.span().end();
            if next == pos {
                // Zero-consumption success: counted once, then stop.
                break;
            }
            pos = next;
        }
        Match::success(Span::new(at, pos))
    }
}

struct Difference<I: Input + ?Sized> {
    base: ExprRef<I>,
    excluded: ExprRef<I>,
}

impl<I> Expression<I> for Difference<I>
where
    I: Input + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        let m = self.base.apply(input, at, end);
        if !m.is_match() {
            return Match::failure(at);
        }
        if self.excluded.apply(input, at, end).is_match() {
            return Match::failure(at);
        }
        m
    }
}

type Hook<I> = Arc<dyn Fn(&I, Span<<I as Input>::Pos>) + Send + Sync>;

struct Action<I: Input + ?Sized> {
    inner: ExprRef<I>,
    hook: Hook<I>,
}

impl<I> Expression<I> for Action<I>
where
    I: Input + ?Sized,
{
    fn apply(&self, input: &I, at: I::Pos, end: I::Pos) -> Match<I::Pos> {
        let m = self.inner.apply(input, at, end);
        if m.is_match() {
            (self.hook)(input, m.span());
        }
        m
    }
}

/// Match `parts` one after another (n-ary AND).
///
/// Succeeds with the span from the starting position to the last part's end.
/// If any part fails, the whole sequence fails with a span collapsed at the
/// starting position; consumption by earlier parts is discarded from the
/// report. An empty sequence succeeds consuming nothing.
pub fn sequence<I>(parts: Vec<ExprRef<I>>) -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
{
    Arc::new(Sequence { parts })
}

/// Try `alternatives` strictly left to right (n-ary ordered OR).
///
/// The first success is returned unmodified; there is no longest-match
/// preference, so more specific alternatives must be listed before more
/// general ones. If all fail, the choice fails at the starting position.
/// An empty choice fails.
pub fn choice<I>(alternatives: Vec<ExprRef<I>>) -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
{
    Arc::new(Choice { alternatives })
}

/// Match `inner` zero or more times.
///
/// Always succeeds, even at zero iterations, spanning every symbol the
/// successful iterations consumed. `inner` should consume at least one
/// symbol whenever it succeeds; an iteration that succeeds without
/// consuming terminates the loop after that iteration instead of looping
/// forever, but grammars that rely on this stop rule are not portable PEG.
pub fn repetition<I>(inner: ExprRef<I>) -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
{
    Arc::new(Repetition { inner })
}

/// Match `base` only where `excluded` does not match.
///
/// Both are tested at the same starting position. On success the span is
/// `base`'s span; `excluded` never contributes consumption, it only gates
/// acceptance. Fails if `base` fails or both match.
pub fn difference<I>(base: ExprRef<I>, excluded: ExprRef<I>) -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
{
    Arc::new(Difference { base, excluded })
}

/// Invoke `hook` on each successful match of `inner`.
///
/// A pure observer at the success boundary: the inner match is forwarded
/// untouched, verdict and span alike, whether or not a hook is attached.
pub fn action<I, F>(inner: ExprRef<I>, hook: F) -> ExprRef<I>
where
    I: Input + ?Sized + 'static,
    F: Fn(&I, Span<I::Pos>) + Send + Sync + 'static,
{
    Arc::new(Action {
        inner,
        hook: Arc::new(hook),
    })
}
