//! Rolling stock kind shared by trains and wagons.

use std::fmt;

/// Error returned when parsing an unknown rolling stock kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rolling stock kind: {input:?}")]
pub struct InvalidKind {
    input: String,
}

/// What a train or wagon carries.
///
/// A wagon can only be coupled to a train of the same kind.
///
/// # Examples
///
/// ```
/// use rail_model::domain::RollingStockKind;
///
/// assert_eq!(RollingStockKind::parse("cargo").unwrap(), RollingStockKind::Cargo);
/// assert!(RollingStockKind::parse("mail").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RollingStockKind {
    Cargo,
    Passenger,
}

impl RollingStockKind {
    /// Parse a kind from its lowercase name (`cargo` or `passenger`).
    pub fn parse(s: &str) -> Result<Self, InvalidKind> {
        match s {
            "cargo" => Ok(RollingStockKind::Cargo),
            "passenger" => Ok(RollingStockKind::Passenger),
            _ => Err(InvalidKind {
                input: s.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RollingStockKind::Cargo => "cargo",
            RollingStockKind::Passenger => "passenger",
        }
    }

    /// Unit in which wagons of this kind measure capacity.
    pub fn capacity_unit(&self) -> &'static str {
        match self {
            RollingStockKind::Cargo => "volume",
            RollingStockKind::Passenger => "seats",
        }
    }
}

impl fmt::Display for RollingStockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
