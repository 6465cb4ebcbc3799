//! Domain error types.
//!
//! Only train construction can fail. Everything a train does after it has
//! been registered degrades to a no-op instead of erroring.

use super::TrainNumber;

/// Reasons a train could not be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    /// No kind was given
    #[error("train kind is missing")]
    MissingKind,

    /// Kind is not `cargo` or `passenger`
    #[error("invalid train kind: {0:?}")]
    InvalidKind(String),

    /// No number was given
    #[error("train number is missing")]
    MissingNumber,

    /// Number is not in the XXXXX or XXX-XX format
    #[error("train number {0:?} must be in the format XXXXX or XXX-XX")]
    InvalidNumberFormat(String),

    /// Another train already holds this number
    #[error("a train with number {0} already exists")]
    DuplicateNumber(TrainNumber),
}
