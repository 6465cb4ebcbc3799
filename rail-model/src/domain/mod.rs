//! Domain types for the rail model.
//!
//! Value types that the rest of the crate builds on. Identifiers enforce
//! their format at construction time, so code that receives them can trust
//! their validity.

mod error;
mod kind;
mod manufacturer;
mod number;

pub use error::TrainError;
pub use kind::{InvalidKind, RollingStockKind};
pub use manufacturer::Manufacturer;
pub use number::{InvalidTrainNumber, TrainNumber};
