/// When the heap order is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStrategy {
    /// Sift up on every add; the mode change is free.
    Incremental,
    /// Append on add; heapify bottom-up at the mode change.
    Deferred,
}

impl Default for BuildStrategy {
    fn default() -> Self {
        BuildStrategy::Deferred
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MachineConfig {
    pub strategy: BuildStrategy,
    pub initial_capacity: usize,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
