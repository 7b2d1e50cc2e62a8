//! External dependency boundaries (ports) and the adapters this crate ships.

pub mod clock;
pub mod error;
pub mod ports;

pub use error::PortError;
pub use ports::{AnnotationTypeStore, ClockPort, ConfirmOutcome, ModalPort, RemovableEntity};

#[cfg(test)]
pub use ports::{MockAnnotationTypeStore, MockClockPort, MockModalPort, MockRemovableEntity};
