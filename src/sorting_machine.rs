use crate::algorithms::MinHeap;
use crate::config::{BuildStrategy, MachineConfig};
use crate::errors::{MachineError, Mode};
use crate::machine_state::{Extraction, Insertion, MachineState};
use crate::order::TotalPreorder;
use crate::utils::same_multiset;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// A container that is filled in any order, then drained in sorted order.
///
/// The mode is part of the type: `add` only exists on
/// `SortingMachine<_, _, Insertion>`, and `remove_first` only on
/// `SortingMachine<_, _, Extraction>`.  `change_to_extraction_mode` consumes
/// the inserting machine, so the switch happens exactly once.
#[derive(Clone)]
pub struct SortingMachine<T, O, S = Insertion> {
    heap: MinHeap<T, O>,
    config: MachineConfig,
    state: PhantomData<S>,
}

impl<T, O: TotalPreorder<T>, S: MachineState> SortingMachine<T, O, S> {
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn mode(&self) -> Mode {
        S::MODE
    }

    pub fn is_in_insertion_mode(&self) -> bool {
        S::MODE == Mode::Insertion
    }

    pub fn order(&self) -> &O {
        self.heap.order()
    }

    pub fn config(&self) -> MachineConfig {
        self.config
    }

    /// The entries in storage order, which is unspecified.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.as_slice().iter()
    }

    /// Drop every entry.  The mode is unchanged.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// A new, empty machine in insertion mode with the same order and config.
    pub fn new_instance(&self) -> SortingMachine<T, O, Insertion>
    where
        O: Clone,
    {
        SortingMachine::with_config(self.order().clone(), self.config)
    }

    /// Replace this machine with the contents of `source`, leaving `source`
    /// empty.
    ///
    /// Both machines share a mode, and `source` keeps it: an extracting
    /// machine stays extracting, with nothing left to remove.
    pub fn transfer_from(&mut self, source: &mut Self)
    where
        O: Clone,
    {
        let empty = MinHeap::new(source.order().clone());
        self.heap = std::mem::replace(&mut source.heap, empty);
        self.config = source.config;
    }

    pub(crate) fn into_parts(self) -> (MinHeap<T, O>, MachineConfig) {
        (self.heap, self.config)
    }
}

impl<T, O: TotalPreorder<T>> SortingMachine<T, O, Insertion> {
    pub fn new(order: O) -> Self {
        Self::with_config(order, MachineConfig::default())
    }

    pub fn with_config(order: O, config: MachineConfig) -> Self {
        SortingMachine {
            heap: MinHeap::with_capacity(order, config.initial_capacity),
            config,
            state: PhantomData,
        }
    }

    pub fn add(&mut self, item: T) {
        match self.config.strategy {
            BuildStrategy::Incremental => self.heap.push(item),
            BuildStrategy::Deferred => self.heap.append_unordered(item),
        }
    }

    pub fn change_to_extraction_mode(mut self) -> SortingMachine<T, O, Extraction> {
        log::debug!(
            "changing to extraction mode with {} entries ({:?})",
            self.heap.len(),
            self.config.strategy
        );
        if self.config.strategy == BuildStrategy::Deferred {
            self.heap.heapify();
        }
        debug_assert!(self.heap.is_heap());
        SortingMachine {
            heap: self.heap,
            config: self.config,
            state: PhantomData,
        }
    }
}

impl<T, O: TotalPreorder<T>> SortingMachine<T, O, Extraction> {
    /// Remove and return a first entry under the order.
    pub fn remove_first(&mut self) -> Result<T, MachineError> {
        self.heap.pop().ok_or(MachineError::EmptyContainer)
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    pub(crate) fn from_heap(heap: MinHeap<T, O>, config: MachineConfig) -> Self {
        debug_assert!(heap.is_heap());
        SortingMachine {
            heap,
            config,
            state: PhantomData,
        }
    }
}

impl<T, O: TotalPreorder<T>> SortingMachine<T, O, Insertion> {
    pub(crate) fn from_heap_unordered(heap: MinHeap<T, O>, config: MachineConfig) -> Self {
        SortingMachine {
            heap,
            config,
            state: PhantomData,
        }
    }
}

impl<T, O: TotalPreorder<T> + Default> Default for SortingMachine<T, O, Insertion> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O: TotalPreorder<T>> Extend<T> for SortingMachine<T, O, Insertion> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, O: TotalPreorder<T> + Default> FromIterator<T> for SortingMachine<T, O, Insertion> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut machine = Self::default();
        machine.extend(iter);
        machine
    }
}

/// Drains an extracting machine in order.
pub struct IntoSorted<T, O> {
    heap: MinHeap<T, O>,
}

impl<T, O: TotalPreorder<T>> Iterator for IntoSorted<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, O: TotalPreorder<T>> ExactSizeIterator for IntoSorted<T, O> {}

impl<T, O: TotalPreorder<T>> IntoIterator for SortingMachine<T, O, Extraction> {
    type Item = T;
    type IntoIter = IntoSorted<T, O>;

    fn into_iter(self) -> IntoSorted<T, O> {
        IntoSorted { heap: self.heap }
    }
}

impl<T, O, S, S2> PartialEq<SortingMachine<T, O, S2>> for SortingMachine<T, O, S>
where
    T: PartialEq,
    O: TotalPreorder<T> + PartialEq,
    S: MachineState,
    S2: MachineState,
{
    fn eq(&self, other: &SortingMachine<T, O, S2>) -> bool {
        S::MODE == S2::MODE
            && self.order() == other.order()
            && same_multiset(self.order(), self.heap.as_slice(), other.heap.as_slice())
    }
}

impl<T: fmt::Debug, O, S: MachineState> fmt::Debug for SortingMachine<T, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortingMachine")
            .field("mode", &S::MODE)
            .field("entries", &self.heap.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{CaseInsensitiveOrder, NaturalOrder};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn machine_from(items: &[&'static str]) -> SortingMachine<&'static str, CaseInsensitiveOrder> {
        let mut machine = SortingMachine::new(CaseInsensitiveOrder);
        machine.extend(items.iter().copied());
        machine
    }

    fn drain<T, O: TotalPreorder<T>>(mut machine: SortingMachine<T, O, Extraction>) -> Vec<T> {
        let mut results = Vec::new();
        while !machine.is_empty() {
            results.push(machine.remove_first().expect("machine is non-empty"));
        }
        results
    }

    fn random_values(n: usize, seed: u64) -> Vec<u32> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n).map(|_| rng.gen_range(0, 64)).collect()
    }

    #[test]
    fn test_new_machine() {
        let machine: SortingMachine<&str, _> = SortingMachine::new(CaseInsensitiveOrder);
        assert_eq!(machine.size(), 0);
        assert!(machine.is_in_insertion_mode());
        assert_eq!(machine.mode(), Mode::Insertion);
        assert_eq!(machine, machine_from(&[]));
    }

    #[test]
    fn test_add_one() {
        let mut machine = machine_from(&[]);
        machine.add("green");
        assert_eq!(machine.size(), 1);
        assert!(machine.is_in_insertion_mode());
        assert_eq!(machine, machine_from(&["green"]));
    }

    #[test]
    fn test_add_more() {
        let mut machine = machine_from(&["green", "b"]);
        machine.add("c");
        assert_eq!(machine, machine_from(&["c", "b", "green"]));
        assert_ne!(machine, machine_from(&["c", "b"]));
    }

    #[test]
    fn test_change_to_extraction_mode() {
        let machine = machine_from(&["green", "b"]).change_to_extraction_mode();
        assert!(!machine.is_in_insertion_mode());
        assert_eq!(machine.mode(), Mode::Extraction);
        assert_eq!(machine.size(), 2);
        assert_eq!(machine, machine_from(&["b", "green"]).change_to_extraction_mode());
        // Same entries, different mode.
        assert_ne!(machine, machine_from(&["b", "green"]));
    }

    #[test]
    fn test_change_empty_machine() {
        let machine = machine_from(&[]).change_to_extraction_mode();
        assert_eq!(machine.size(), 0);
        assert_eq!(machine, machine_from(&[]).change_to_extraction_mode());
    }

    #[test]
    fn test_remove_first_two() {
        let mut machine = machine_from(&["green", "b"]).change_to_extraction_mode();
        assert_eq!(machine.remove_first(), Ok("b"));
        assert_eq!(machine, machine_from(&["green"]).change_to_extraction_mode());
    }

    #[test]
    fn test_remove_first_leaving_empty() {
        let mut machine = machine_from(&["green"]).change_to_extraction_mode();
        assert_eq!(machine.remove_first(), Ok("green"));
        assert_eq!(machine, machine_from(&[]).change_to_extraction_mode());
    }

    #[test]
    fn test_remove_first_multiple() {
        let machine = machine_from(&["hello", "blue", "green"]).change_to_extraction_mode();
        assert_eq!(drain(machine), vec!["blue", "green", "hello"]);
    }

    #[test]
    fn test_remove_first_from_empty() {
        let mut machine = machine_from(&[]).change_to_extraction_mode();
        assert_eq!(machine.remove_first(), Err(MachineError::EmptyContainer));
        assert_eq!(machine.size(), 0);
    }

    #[test]
    fn test_duplicates() {
        let mut machine = machine_from(&["c", "c", "a"]).change_to_extraction_mode();
        assert_eq!(machine.remove_first(), Ok("a"));
        assert_eq!(machine.remove_first(), Ok("c"));
        assert_eq!(machine.size(), 1);
        assert_eq!(machine.peek_first(), Some(&"c"));
    }

    #[test]
    fn test_order_and_queries() {
        let machine = machine_from(&["hi", "hello", "blue", "green"]);
        assert_eq!(machine.order(), &CaseInsensitiveOrder);
        assert_eq!(machine.size(), 4);
        assert_eq!(machine.size(), 4);
        assert!(machine.is_in_insertion_mode());
        let machine = machine.change_to_extraction_mode();
        assert_eq!(machine.order(), &CaseInsensitiveOrder);
        assert_eq!(machine.size(), 4);
        assert!(!machine.is_in_insertion_mode());
        assert!(!machine.is_in_insertion_mode());
    }

    #[test]
    fn test_mixed_case_equal_rank() {
        let machine = machine_from(&["b", "B", "a"]).change_to_extraction_mode();
        let results = drain(machine);
        assert_eq!(results[0], "a");
        let mut rest = results[1..].to_vec();
        rest.sort();
        assert_eq!(rest, vec!["B", "b"]);
    }

    #[test]
    fn test_strategies_agree() {
        let values = random_values(500, 11);
        let mut expected = values.clone();
        expected.sort();
        for strategy in [BuildStrategy::Incremental, BuildStrategy::Deferred].iter() {
            let config = MachineConfig::new().with_strategy(*strategy);
            let mut machine = SortingMachine::with_config(NaturalOrder, config);
            machine.extend(values.iter().copied());
            assert_eq!(machine.size(), values.len());
            let machine = machine.change_to_extraction_mode();
            assert_eq!(drain(machine), expected);
        }
    }

    #[test]
    fn test_random_drains() {
        for seed in 0..20 {
            let values = random_values(seed as usize * 13, seed);
            let machine: SortingMachine<u32, NaturalOrder> = values.iter().copied().collect();
            let machine = machine.change_to_extraction_mode();

            let extracted: Vec<u32> = machine.clone().into_iter().collect();
            assert_eq!(extracted.len(), values.len());
            assert!(extracted.windows(2).all(|w| w[0] <= w[1]));
            assert!(same_multiset(&NaturalOrder, &extracted, &values));
            assert_eq!(machine.into_sorted_vec(), extracted);
        }
    }

    #[test]
    fn test_size_conservation() {
        let mut machine = SortingMachine::new(NaturalOrder);
        for (k, v) in random_values(40, 5).into_iter().enumerate() {
            assert_eq!(machine.size(), k);
            machine.add(v);
        }
        let mut machine = machine.change_to_extraction_mode();
        for j in 0..40 {
            assert_eq!(machine.size(), 40 - j);
            assert!(machine.remove_first().is_ok());
        }
        assert_eq!(machine.remove_first(), Err(MachineError::EmptyContainer));
    }

    #[test]
    fn test_into_iter_size_hint() {
        let machine = machine_from(&["x", "y", "z"]).change_to_extraction_mode();
        let mut iter = machine.into_iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_new_instance_and_clear() {
        let mut machine = machine_from(&["a", "b"]).change_to_extraction_mode();
        let fresh = machine.new_instance();
        assert!(fresh.is_in_insertion_mode());
        assert_eq!(fresh.size(), 0);
        machine.clear();
        assert_eq!(machine.size(), 0);
        assert!(!machine.is_in_insertion_mode());
    }

    #[test]
    fn test_transfer_from() {
        let mut target = machine_from(&["q"]);
        let mut source = machine_from(&["b", "a"]);
        target.transfer_from(&mut source);
        assert_eq!(target, machine_from(&["a", "b"]));
        assert_eq!(source, machine_from(&[]));
    }

    #[test]
    fn test_transfer_from_in_extraction_mode() {
        let mut target = machine_from(&["q"]).change_to_extraction_mode();
        let mut source = machine_from(&["b", "c", "a"]).change_to_extraction_mode();
        assert_eq!(source.remove_first(), Ok("a"));
        target.transfer_from(&mut source);
        assert_eq!(target, machine_from(&["c", "b"]).change_to_extraction_mode());
        assert_eq!(source, machine_from(&[]).change_to_extraction_mode());
        assert_eq!(source.remove_first(), Err(MachineError::EmptyContainer));
        assert_eq!(target.remove_first(), Ok("b"));
        assert_eq!(target.remove_first(), Ok("c"));
    }

    #[test]
    fn test_iter_holds_all_entries() {
        let machine = machine_from(&["c", "a", "b"]).change_to_extraction_mode();
        let mut entries: Vec<&str> = machine.iter().copied().collect();
        entries.sort();
        assert_eq!(entries, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_debug() {
        let machine = machine_from(&["a"]);
        assert_eq!(
            format!("{:?}", machine),
            "SortingMachine { mode: Insertion, entries: [\"a\"] }"
        );
    }
}
