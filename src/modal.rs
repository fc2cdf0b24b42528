//! A sorting machine that tracks its mode at runtime.
//!
//! Prefer `SortingMachine` when the mode is known statically.  This variant
//! suits callers that store machines in one collection regardless of mode,
//! and reports misuse as `MachineError::IllegalState` instead of failing to
//! compile.
use crate::algorithms::MinHeap;
use crate::config::{BuildStrategy, MachineConfig};
use crate::errors::{MachineError, Mode, Operation};
use crate::machine_state::{Extraction, Insertion};
use crate::order::TotalPreorder;
use crate::sorting_machine::SortingMachine;
use crate::utils::same_multiset;
use std::fmt;

#[derive(Clone)]
pub struct ModalSortingMachine<T, O> {
    heap: MinHeap<T, O>,
    config: MachineConfig,
    mode: Mode,
}

impl<T, O: TotalPreorder<T>> ModalSortingMachine<T, O> {
    pub fn new(order: O) -> Self {
        Self::with_config(order, MachineConfig::default())
    }

    pub fn with_config(order: O, config: MachineConfig) -> Self {
        ModalSortingMachine {
            heap: MinHeap::with_capacity(order, config.initial_capacity),
            config,
            mode: Mode::Insertion,
        }
    }

    fn require(&self, operation: Operation, mode: Mode) -> Result<(), MachineError> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(MachineError::IllegalState {
                operation,
                mode: self.mode,
            })
        }
    }

    pub fn add(&mut self, item: T) -> Result<(), MachineError> {
        self.require(Operation::Add, Mode::Insertion)?;
        match self.config.strategy {
            BuildStrategy::Incremental => self.heap.push(item),
            BuildStrategy::Deferred => self.heap.append_unordered(item),
        }
        Ok(())
    }

    pub fn change_to_extraction_mode(&mut self) -> Result<(), MachineError> {
        self.require(Operation::ChangeToExtractionMode, Mode::Insertion)?;
        log::debug!(
            "changing to extraction mode with {} entries ({:?})",
            self.heap.len(),
            self.config.strategy
        );
        if self.config.strategy == BuildStrategy::Deferred {
            self.heap.heapify();
        }
        debug_assert!(self.heap.is_heap());
        self.mode = Mode::Extraction;
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T, MachineError> {
        self.require(Operation::RemoveFirst, Mode::Extraction)?;
        self.heap.pop().ok_or(MachineError::EmptyContainer)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_in_insertion_mode(&self) -> bool {
        self.mode == Mode::Insertion
    }

    pub fn order(&self) -> &O {
        self.heap.order()
    }

    /// The entries in storage order, which is unspecified.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.as_slice().iter()
    }

    /// Take the entries and mode of `source`, resetting it to an empty
    /// machine in insertion mode.
    pub fn transfer_from(&mut self, source: &mut Self)
    where
        O: Clone,
    {
        let empty = ModalSortingMachine::with_config(source.order().clone(), source.config);
        *self = std::mem::replace(source, empty);
    }
}

impl<T, O: TotalPreorder<T>> From<SortingMachine<T, O, Insertion>> for ModalSortingMachine<T, O> {
    fn from(machine: SortingMachine<T, O, Insertion>) -> Self {
        let (heap, config) = machine.into_parts();
        ModalSortingMachine {
            heap,
            config,
            mode: Mode::Insertion,
        }
    }
}

impl<T, O: TotalPreorder<T>> From<SortingMachine<T, O, Extraction>> for ModalSortingMachine<T, O> {
    fn from(machine: SortingMachine<T, O, Extraction>) -> Self {
        let (heap, config) = machine.into_parts();
        ModalSortingMachine {
            heap,
            config,
            mode: Mode::Extraction,
        }
    }
}

/// The statically-typed machine, split by mode.
pub enum TypedMachine<T, O> {
    Insertion(SortingMachine<T, O, Insertion>),
    Extraction(SortingMachine<T, O, Extraction>),
}

impl<T, O: TotalPreorder<T>> From<ModalSortingMachine<T, O>> for TypedMachine<T, O> {
    fn from(machine: ModalSortingMachine<T, O>) -> Self {
        match machine.mode {
            Mode::Insertion => TypedMachine::Insertion(SortingMachine::from_heap_unordered(
                machine.heap,
                machine.config,
            )),
            Mode::Extraction => {
                TypedMachine::Extraction(SortingMachine::from_heap(machine.heap, machine.config))
            }
        }
    }
}

impl<T: PartialEq, O: TotalPreorder<T> + PartialEq> PartialEq for ModalSortingMachine<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.order() == other.order()
            && same_multiset(self.order(), self.heap.as_slice(), other.heap.as_slice())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for ModalSortingMachine<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalSortingMachine")
            .field("mode", &self.mode)
            .field("entries", &self.heap.as_slice())
            .finish()
    }
}
