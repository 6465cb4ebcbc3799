//! Instance counting for trains.

use crate::domain::RollingStockKind;

/// Counts how many trains of each kind have been created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceCounter {
    cargo: usize,
    passenger: usize,
}

impl InstanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more instance of `kind`.
    pub fn register_instance(&mut self, kind: RollingStockKind) {
        match kind {
            RollingStockKind::Cargo => self.cargo += 1,
            RollingStockKind::Passenger => self.passenger += 1,
        }
    }

    /// Instances of one kind created so far.
    pub fn instances(&self, kind: RollingStockKind) -> usize {
        match kind {
            RollingStockKind::Cargo => self.cargo,
            RollingStockKind::Passenger => self.passenger,
        }
    }

    /// Instances of every kind created so far.
    pub fn total(&self) -> usize {
        self.cargo + self.passenger
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_kind() {
        let mut counter = InstanceCounter::new();
        counter.register_instance(RollingStockKind::Cargo);
        counter.register_instance(RollingStockKind::Passenger);
        counter.register_instance(RollingStockKind::Passenger);

        assert_eq!(counter.instances(RollingStockKind::Cargo), 1);
        assert_eq!(counter.instances(RollingStockKind::Passenger), 2);
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn reset_clears_counts() {
        let mut counter = InstanceCounter::new();
        counter.register_instance(RollingStockKind::Cargo);
        counter.reset();
        assert_eq!(counter.total(), 0);
    }
}
