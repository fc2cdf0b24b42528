mod heapsort;
mod min_heap;

pub use heapsort::heapsort;
pub use min_heap::MinHeap;
