//! Derived expressions: character-class rules built purely by composition.
//!
//! Nothing here introduces new primitive semantics; each rule is an
//! arrangement of atoms under sequence, choice and repetition. They are
//! usable over any input whose symbols are `char`s (`str`, `[char]`).

use crate::atoms::sym;
use crate::combinators::{choice, repetition, sequence};
use crate::expression::ExprRef;
use crate::input::Input;

/// One decimal digit, as ordered choice over the ten literals.
pub fn digit<I>() -> ExprRef<I>
where
    I: Input<Symbol = char> + ?Sized + 'static,
{
    choice(('0'..='9').map(|c| sym(c)).collect())
}

/// One ASCII letter.
pub fn letter<I>() -> ExprRef<I>
where
    I: Input<Symbol = char> + ?Sized + 'static,
{
    choice(('a'..='z').chain('A'..='Z').map(|c| sym(c)).collect())
}

/// The underscore literal.
pub fn underscore<I>() -> ExprRef<I>
where
    I: Input<Symbol = char> + ?Sized + 'static,
{
    sym('_')
}

/// An identifier: a letter or underscore, then any run of letters, digits
/// and underscores.
///
/// The first-symbol class differs from the subsequent-symbol class, hence
/// the sequence-of-choice shape. The match stops before the first symbol
/// outside the class; a trailing delimiter such as `.` is never absorbed.
pub fn name<I>() -> ExprRef<I>
where
    I: Input<Symbol = char> + ?Sized + 'static,
{
    sequence(vec![
        choice(vec![letter(), underscore()]),
        repetition(choice(vec![letter(), digit(), underscore()])),
    ])
}

/// One or more decimal digits.
pub fn number<I>() -> ExprRef<I>
where
    I: Input<Symbol = char> + ?Sized + 'static,
{
    sequence(vec![digit(), repetition(digit())])
}
