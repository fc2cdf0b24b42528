use crate::order::TotalPreorder;
use std::fmt;

/// An array-backed binary min-heap under a caller-supplied order.
///
/// The children of position `i` live at `2i + 1` and `2i + 2`.  Every
/// operation except `append_unordered` leaves the heap order intact; after
/// appending unordered elements, call `heapify` before `push`, `pop` or `peek`.
#[derive(Clone)]
pub struct MinHeap<T, O> {
    data: Vec<T>,
    order: O,
}

impl<T, O> MinHeap<T, O> {
    pub fn order(&self) -> &O {
        &self.order
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, O: TotalPreorder<T>> MinHeap<T, O> {
    pub fn new(order: O) -> Self {
        MinHeap {
            data: Vec::new(),
            order,
        }
    }

    pub fn with_capacity(order: O, capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Build a heap from an arbitrary vector in linear time.
    pub fn from_vec(order: O, data: Vec<T>) -> Self {
        let mut heap = MinHeap { data, order };
        heap.heapify();
        heap
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Append without restoring heap order.
    pub fn append_unordered(&mut self, item: T) {
        self.data.push(item);
    }

    /// Remove and return a minimal element, or None if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0, self.data.len());
        }
        min
    }

    /// Re-establish heap order over the whole array.
    ///
    /// Bottom-up: sift down every non-leaf, from the last one to the root.
    pub fn heapify(&mut self) {
        let len = self.data.len();
        log::trace!("heapifying {} elements", len);
        for pos in (0..len / 2).rev() {
            self.sift_down(pos, len);
        }
    }

    /// Does every element precede or tie both of its children?
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            self.order.le(&self.data[parent], &self.data[child])
        })
    }

    /// Consume the heap, returning its elements in non-decreasing order.
    ///
    /// This is an in-place heapsort: the minimum is swapped to the end of
    /// the shrinking heap, then the result is reversed.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down(0, end);
        }
        self.data.reverse();
        self.data
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.order.lt(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    // Only positions below `end` belong to the heap.
    fn sift_down(&mut self, mut pos: usize, end: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= end {
                return;
            }
            let right = left + 1;
            let child = if right < end && self.order.lt(&self.data[right], &self.data[left]) {
                right
            } else {
                left
            };
            if !self.order.lt(&self.data[child], &self.data[pos]) {
                return;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for MinHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("data", &self.data).finish()
    }
}
