//! The rail network: stations and the routes through them.
//!
//! Stations are owned by a [`Stations`] arena and addressed by
//! [`StationId`]. Routes and trains only hold ids, so several trains can
//! share a route while the arena remains the single owner of station state.

mod route;
mod station;

pub use route::{EmptyRoute, Route};
pub use station::Station;

use std::fmt;

/// Handle to a station inside a [`Stations`] arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(usize);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

/// Owner of every station in the network.
///
/// Stations are never removed, so a `StationId` handed out by an arena
/// stays valid for the arena's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Stations {
    stations: Vec<Station>,
}

impl Stations {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station and return its id.
    pub fn add(&mut self, name: impl Into<String>) -> StationId {
        self.stations.push(Station::new(name));
        StationId(self.stations.len() - 1)
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    pub fn get_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.get_mut(id.0)
    }

    /// Find the first station with the given name.
    pub fn find(&self, name: &str) -> Option<StationId> {
        self.stations
            .iter()
            .position(|s| s.name() == name)
            .map(StationId)
    }

    /// Iterate over all stations with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &Station)> + '_ {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i), s))
    }

    /// Empty every station's presence set, e.g. after the trains that
    /// stood there have been discarded by a registry reset.
    pub fn clear_trains(&mut self) {
        for station in &mut self.stations {
            station.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut stations = Stations::new();
        assert!(stations.is_empty());

        let a = stations.add("Moscow");
        let b = stations.add("Tver");

        assert_eq!(stations.len(), 2);
        assert_ne!(a, b);
        assert_eq!(stations.get(a).unwrap().name(), "Moscow");
        assert_eq!(stations.find("Tver"), Some(b));
        assert_eq!(stations.find("Klin"), None);
    }

    #[test]
    fn iter_yields_ids_in_insertion_order() {
        let mut stations = Stations::new();
        let a = stations.add("A");
        let b = stations.add("B");

        let ids: Vec<StationId> = stations.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn foreign_id_is_absent() {
        let mut big = Stations::new();
        big.add("A");
        let second = big.add("B");

        let small = Stations::new();
        assert!(small.get(second).is_none());
    }
}
