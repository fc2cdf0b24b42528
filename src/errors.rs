use std::fmt;
use thiserror::Error;

/// Which mode a machine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Insertion,
    Extraction,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Insertion => write!(f, "insertion mode"),
            Mode::Extraction => write!(f, "extraction mode"),
        }
    }
}

/// The mode-gated operations of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    ChangeToExtractionMode,
    RemoveFirst,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::ChangeToExtractionMode => write!(f, "change_to_extraction_mode"),
            Operation::RemoveFirst => write!(f, "remove_first"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MachineError {
    #[error("Operation {operation} not permitted in {mode}")]
    IllegalState { operation: Operation, mode: Mode },

    #[error("Cannot remove from an empty machine")]
    EmptyContainer,
}
