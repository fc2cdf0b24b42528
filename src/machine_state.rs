use crate::errors::Mode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insertion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extraction;

pub trait MachineState: private::Sealed {
    const MODE: Mode;
}

impl MachineState for Insertion {
    const MODE: Mode = Mode::Insertion;
}

impl MachineState for Extraction {
    const MODE: Mode = Mode::Extraction;
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Insertion {}
    impl Sealed for super::Extraction {}
}
