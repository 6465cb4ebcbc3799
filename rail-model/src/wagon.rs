//! Wagons and their capacity.
//!
//! Cargo wagons measure capacity in volume units, passenger wagons in seats.
//! Apart from the unit label the two behave the same, so both are a single
//! `Wagon` tagged with its [`RollingStockKind`].

use crate::domain::{Manufacturer, RollingStockKind};

/// Errors from loading or unloading a wagon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    /// Request would exceed the wagon's total capacity
    #[error("cannot occupy {requested} {unit}: only {free} free")]
    Exceeded {
        requested: u32,
        free: u32,
        unit: &'static str,
    },

    /// Request would release more than is in use
    #[error("cannot release {requested} {unit}: only {used} in use")]
    Underflow {
        requested: u32,
        used: u32,
        unit: &'static str,
    },

    /// Operation only applies to the other kind of wagon
    #[error("operation requires a {expected} wagon")]
    WrongKind { expected: RollingStockKind },
}

/// A single wagon.
///
/// Invariant: `used_capacity <= total_capacity`. Every mutator that would
/// break it is rejected and leaves the wagon untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wagon {
    kind: RollingStockKind,
    total_capacity: u32,
    used_capacity: u32,
    manufacturer: Option<Manufacturer>,
}

impl Wagon {
    /// Create an empty wagon.
    pub fn new(kind: RollingStockKind, total_capacity: u32) -> Self {
        Self {
            kind,
            total_capacity,
            used_capacity: 0,
            manufacturer: None,
        }
    }

    /// Create an empty cargo wagon with the given volume.
    pub fn cargo(volume: u32) -> Self {
        Self::new(RollingStockKind::Cargo, volume)
    }

    /// Create an empty passenger wagon with the given number of seats.
    pub fn passenger(seats: u32) -> Self {
        Self::new(RollingStockKind::Passenger, seats)
    }

    pub fn kind(&self) -> RollingStockKind {
        self.kind
    }

    pub fn total_capacity(&self) -> u32 {
        self.total_capacity
    }

    pub fn used_capacity(&self) -> u32 {
        self.used_capacity
    }

    pub fn free_capacity(&self) -> u32 {
        self.total_capacity - self.used_capacity
    }

    /// Fill `amount` units of capacity.
    pub fn occupy(&mut self, amount: u32) -> Result<(), CapacityError> {
        let free = self.free_capacity();
        if amount > free {
            return Err(CapacityError::Exceeded {
                requested: amount,
                free,
                unit: self.kind.capacity_unit(),
            });
        }
        self.used_capacity += amount;
        Ok(())
    }

    /// Free `amount` units of capacity.
    pub fn release(&mut self, amount: u32) -> Result<(), CapacityError> {
        if amount > self.used_capacity {
            return Err(CapacityError::Underflow {
                requested: amount,
                used: self.used_capacity,
                unit: self.kind.capacity_unit(),
            });
        }
        self.used_capacity -= amount;
        Ok(())
    }

    /// Occupy one seat of a passenger wagon.
    pub fn take_seat(&mut self) -> Result<(), CapacityError> {
        self.expect_kind(RollingStockKind::Passenger)?;
        self.occupy(1)
    }

    /// Load `volume` units into a cargo wagon.
    pub fn load(&mut self, volume: u32) -> Result<(), CapacityError> {
        self.expect_kind(RollingStockKind::Cargo)?;
        self.occupy(volume)
    }

    pub fn free_seats(&self) -> u32 {
        self.free_capacity()
    }

    pub fn used_seats(&self) -> u32 {
        self.used_capacity()
    }

    pub fn free_volume(&self) -> u32 {
        self.free_capacity()
    }

    pub fn used_volume(&self) -> u32 {
        self.used_capacity()
    }

    pub fn manufacturer(&self) -> Option<&Manufacturer> {
        self.manufacturer.as_ref()
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<Manufacturer>) {
        self.manufacturer = Some(manufacturer.into());
    }

    fn expect_kind(&self, expected: RollingStockKind) -> Result<(), CapacityError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(CapacityError::WrongKind { expected })
        }
    }
}
