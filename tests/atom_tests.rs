// tests/atom_tests.rs

use vyaka::atoms::{any_sym, end_of_input, sym};
use vyaka::{parse, ExprRef};

// ---
// Literal symbol
// ---

#[test]
fn sym_consumes_exactly_one_matching_symbol() {
    let a: ExprRef<str> = sym('a');
    let m = parse(&a, "abc", 0, 3);
    assert!(m.is_match());
    assert_eq!(m.span().begin(), 0);
    assert_eq!(m.span().end(), 1);
}

#[test]
fn sym_fails_zero_width_on_mismatch() {
    let a: ExprRef<str> = sym('a');
    let m = parse(&a, "xbc", 0, 3);
    assert!(!m.is_match());
    assert!(m.span().is_empty());
    assert_eq!(m.span().begin(), 0);
}

#[test]
fn sym_fails_zero_width_at_end_of_input() {
    let a: ExprRef<str> = sym('a');
    let m = parse(&a, "abc", 3, 3);
    assert!(!m.is_match());
    assert!(m.span().is_empty());
    assert_eq!(m.span().begin(), 3);
}

#[test]
fn sym_works_over_non_text_symbols() {
    let bytes: &[u8] = b"ab";
    let a: ExprRef<[u8]> = sym(b'a');
    let m = parse(&a, bytes, 0, 2);
    assert!(m.is_match());
    assert_eq!(m.span().end(), 1);

    let b: ExprRef<[u8]> = sym(b'z');
    assert!(!parse(&b, bytes, 0, 2).is_match());
}

// ---
// Any symbol
// ---

#[test]
fn any_sym_consumes_whatever_symbol_is_present() {
    let any: ExprRef<str> = any_sym();
    for (pos, next) in [(0usize, 1usize), (1, 2), (2, 3)] {
        let m = parse(&any, "x?z", pos, 3);
        assert!(m.is_match());
        assert_eq!(m.span().begin(), pos);
        assert_eq!(m.span().end(), next);
    }
}

#[test]
fn any_sym_fails_zero_width_on_empty_remainder() {
    let any: ExprRef<str> = any_sym();
    let m = parse(&any, "x", 1, 1);
    assert!(!m.is_match());
    assert_eq!(m.span().begin(), 1);
    assert_eq!(m.span().end(), 1);
}

// ---
// End of input
// ---

#[test]
fn end_of_input_succeeds_only_at_end_and_never_consumes() {
    let eoi: ExprRef<str> = end_of_input();

    let m = parse(&eoi, "ab", 2, 2);
    assert!(m.is_match());
    assert!(m.span().is_empty());

    let m = parse(&eoi, "ab", 0, 2);
    assert!(!m.is_match());
    assert!(m.span().is_empty());
    assert_eq!(m.span().begin(), 0);
}

#[test]
fn end_of_input_is_idempotent_at_one_position() {
    let eoi: ExprRef<str> = end_of_input();
    let first = parse(&eoi, "ab", 2, 2);
    let second = parse(&eoi, "ab", 2, 2);
    assert_eq!(first, second);
}
