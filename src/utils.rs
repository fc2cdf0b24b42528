use crate::order::TotalPreorder;
use std::cmp::Ordering;

/// Do `a` and `b` hold the same multiset of elements?
///
/// Storage order is irrelevant.  Both sides are sorted by `order`, then each
/// run of equal-ranked elements is matched up with `PartialEq`, since the
/// order alone cannot tell distinct equal-ranked elements apart.
pub(crate) fn same_multiset<T, O>(order: &O, a: &[T], b: &[T]) -> bool
where
    T: PartialEq,
    O: TotalPreorder<T>,
{
    if a.len() != b.len() {
        return false;
    }
    let a = sorted_refs(order, a);
    let b = sorted_refs(order, b);

    let mut start = 0;
    while start < a.len() {
        let rank = a[start];
        let end = start + run_length(order, &a[start..], rank);
        if run_length(order, &b[start..], rank) != end - start {
            return false;
        }
        if !same_run(&a[start..end], &b[start..end]) {
            return false;
        }
        start = end;
    }
    true
}

fn sorted_refs<'a, T, O: TotalPreorder<T>>(order: &O, items: &'a [T]) -> Vec<&'a T> {
    let mut refs: Vec<&T> = items.iter().collect();
    refs.sort_by(|x, y| order.compare(*x, *y));
    refs
}

fn run_length<T, O: TotalPreorder<T>>(order: &O, items: &[&T], rank: &T) -> usize {
    items
        .iter()
        .take_while(|x| order.compare(**x, rank) == Ordering::Equal)
        .count()
}

// Quadratic, but runs of equal rank are short in practice.
fn same_run<T: PartialEq>(a: &[&T], b: &[&T]) -> bool {
    let mut used = vec![false; b.len()];
    a.iter().all(|x| {
        match (0..b.len()).find(|&j| !used[j] && b[j] == *x) {
            Some(j) => {
                used[j] = true;
                true
            }
            None => false,
        }
    })
}
