pub mod app;
pub mod selector;

/// Which selection slot a value or fetch belongs to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    Source,
    Destination,
}

impl Slot {
    /// The opposite slot
    pub fn other(self) -> Slot {
        match self {
            Slot::Source => Slot::Destination,
            Slot::Destination => Slot::Source,
        }
    }
}
