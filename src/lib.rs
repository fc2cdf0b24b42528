mod machine_state;
mod modal;
mod sorting_machine;
mod utils;

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod order;

pub use crate::sorting_machine::{IntoSorted, SortingMachine};
pub use config::{BuildStrategy, MachineConfig};
pub use errors::{MachineError, Mode, Operation};
pub use machine_state::{Extraction, Insertion, MachineState};
pub use modal::{ModalSortingMachine, TypedMachine};
pub use order::{CaseInsensitiveOrder, NaturalOrder, ReverseOrder, TotalPreorder};
