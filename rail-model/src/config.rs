//! Per-kind defaults applied when trains are created.

use crate::domain::RollingStockKind;

/// Starting state for newly created trains, by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainDefaults {
    /// Speed a cargo train has right after construction.
    pub cargo_initial_speed: i32,

    /// Speed a passenger train has right after construction.
    pub passenger_initial_speed: i32,

    /// Route index a cargo train is placed at when given a route.
    /// Clamped to the route's last station.
    pub cargo_source_index: usize,

    /// Route index a passenger train is placed at when given a route.
    /// Clamped to the route's last station.
    pub passenger_source_index: usize,
}

impl TrainDefaults {
    /// Create a configuration with the given parameters.
    pub fn new(
        cargo_initial_speed: i32,
        passenger_initial_speed: i32,
        cargo_source_index: usize,
        passenger_source_index: usize,
    ) -> Self {
        Self {
            cargo_initial_speed,
            passenger_initial_speed,
            cargo_source_index,
            passenger_source_index,
        }
    }

    pub fn initial_speed(&self, kind: RollingStockKind) -> i32 {
        match kind {
            RollingStockKind::Cargo => self.cargo_initial_speed,
            RollingStockKind::Passenger => self.passenger_initial_speed,
        }
    }

    pub fn source_station_index(&self, kind: RollingStockKind) -> usize {
        match kind {
            RollingStockKind::Cargo => self.cargo_source_index,
            RollingStockKind::Passenger => self.passenger_source_index,
        }
    }
}

impl Default for TrainDefaults {
    /// Every train starts stopped at the first station of its route.
    fn default() -> Self {
        Self {
            cargo_initial_speed: 0,
            passenger_initial_speed: 0,
            cargo_source_index: 0,
            passenger_source_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TrainDefaults::default();

        assert_eq!(config.initial_speed(RollingStockKind::Cargo), 0);
        assert_eq!(config.initial_speed(RollingStockKind::Passenger), 0);
        assert_eq!(config.source_station_index(RollingStockKind::Cargo), 0);
        assert_eq!(config.source_station_index(RollingStockKind::Passenger), 0);
    }

    #[test]
    fn custom_config() {
        let config = TrainDefaults::new(5, 10, 1, 2);

        assert_eq!(config.initial_speed(RollingStockKind::Cargo), 5);
        assert_eq!(config.initial_speed(RollingStockKind::Passenger), 10);
        assert_eq!(config.source_station_index(RollingStockKind::Cargo), 1);
        assert_eq!(config.source_station_index(RollingStockKind::Passenger), 2);
    }
}
