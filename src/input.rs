//! Input abstraction: opaque positions over an arbitrary symbol sequence.
//!
//! The engine is generic over [`Input`]; the host supplies position
//! semantics (dereference, forward advance, equality) for whatever concrete
//! sequence it parses. Adapters for `str` and `[T]` cover the common cases.

/// A symbol sequence the engine traverses strictly forward.
///
/// Positions are opaque cursors: the engine assumes nothing beyond equality,
/// dereference via [`symbol_at`](Input::symbol_at), and advance-by-one.
/// Both methods are only ever called on positions strictly before the `end`
/// handed to [`parse`](crate::parse).
pub trait Input {
    /// One element of the sequence.
    type Symbol: PartialEq;
    /// Opaque cursor into the sequence.
    type Pos: Copy + Eq;

    /// The symbol under the cursor.
    fn symbol_at(&self, at: Self::Pos) -> Self::Symbol;

    /// The cursor one symbol forward.
    fn advance(&self, at: Self::Pos) -> Self::Pos;
}

/// Byte-offset positions over UTF-8 text; symbols are `char`s.
impl Input for str {
    type Symbol = char;
    type Pos = usize;

    fn symbol_at(&self, at: usize) -> char {
        // The engine never dereferences at or past end.
        self[at..].chars().next().unwrap()
    }

    fn advance(&self, at: usize) -> usize {
        at + self.symbol_at(at).len_utf8()
    }
}

/// Index positions over any cloneable symbol slice (bytes, token streams).
impl<T: PartialEq + Clone> Input for [T] {
    type Symbol = T;
    type Pos = usize;

    fn symbol_at(&self, at: usize) -> T {
        self[at].clone()
    }

    fn advance(&self, at: usize) -> usize {
        at + 1
    }
}
