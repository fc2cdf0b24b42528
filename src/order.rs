//! The ordering relation a machine sorts by.
//!
//! A `TotalPreorder` is any reflexive, transitive, total comparison.  Unlike
//! `Ord`, two distinct elements may compare `Equal`; the machine makes no
//! promise about which of them comes out first.
use std::cmp::Ordering;

pub trait TotalPreorder<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Does `a` strictly precede `b`?
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

impl<T: ?Sized, F> TotalPreorder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Delegates to the element's `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> TotalPreorder<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder<O>(pub O);

impl<T: ?Sized, O: TotalPreorder<T>> TotalPreorder<T> for ReverseOrder<O> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Lexicographic order ignoring case, one character at a time.
///
/// Each character is folded by taking the first char of its uppercase
/// mapping, then the first char of that char's lowercase mapping.  A string
/// that runs out first ranks first.  "Blue" and "blue" rank equal, so this
/// is a preorder and not a total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitiveOrder;

fn fold_case(c: char) -> char {
    let upper = c.to_uppercase().next().unwrap_or(c);
    upper.to_lowercase().next().unwrap_or(upper)
}

impl<T: ?Sized + AsRef<str>> TotalPreorder<T> for CaseInsensitiveOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let a = a.as_ref().chars().map(fold_case);
        let b = b.as_ref().chars().map(fold_case);
        a.cmp(b)
    }
}
