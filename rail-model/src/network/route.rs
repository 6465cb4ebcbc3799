//! Routes between stations.

use std::sync::Arc;

use super::StationId;

/// Error returned when building a route with no stations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a route needs at least one station")]
pub struct EmptyRoute;

/// An ordered, immutable sequence of stations.
///
/// The first station is the departure, the last the destination. Cloning a
/// route is cheap and clones share the same sequence, so one route can be
/// handed to many trains (or threads).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Arc<[StationId]>,
}

impl Route {
    /// Build a route through the given stations.
    ///
    /// A single-station route is accepted; trains bound to it never move.
    pub fn new(stations: impl Into<Vec<StationId>>) -> Result<Self, EmptyRoute> {
        let stations: Vec<StationId> = stations.into();
        if stations.is_empty() {
            return Err(EmptyRoute);
        }
        Ok(Self {
            stations: stations.into(),
        })
    }

    /// All stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Station at a position along the route.
    pub fn get(&self, index: usize) -> Option<StationId> {
        self.stations.get(index).copied()
    }

    /// Departure station.
    pub fn source(&self) -> StationId {
        self.stations[0]
    }

    /// Destination station.
    pub fn destination(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// Index of the destination station.
    pub fn last_index(&self) -> usize {
        self.stations.len() - 1
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: empty routes cannot be built.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Stations;

    #[test]
    fn empty_route_rejected() {
        assert_eq!(Route::new(Vec::<StationId>::new()), Err(EmptyRoute));
        assert_eq!(
            EmptyRoute.to_string(),
            "a route needs at least one station"
        );
    }

    #[test]
    fn source_and_destination() {
        let mut stations = Stations::new();
        let a = stations.add("Moscow");
        let b = stations.add("Tver");
        let c = stations.add("Saint Petersburg");

        let route = Route::new(vec![a, b, c]).unwrap();
        assert_eq!(route.source(), a);
        assert_eq!(route.destination(), c);
        assert_eq!(route.len(), 3);
        assert_eq!(route.last_index(), 2);
        assert_eq!(route.stations(), &[a, b, c]);
        assert_eq!(route.get(1), Some(b));
        assert_eq!(route.get(3), None);
    }

    #[test]
    fn single_station_route() {
        let mut stations = Stations::new();
        let a = stations.add("Depot");

        let route = Route::new([a]).unwrap();
        assert_eq!(route.source(), route.destination());
        assert!(!route.is_empty());
    }

    #[test]
    fn clones_share_stations() {
        let mut stations = Stations::new();
        let a = stations.add("A");
        let b = stations.add("B");

        let route = Route::new(vec![a, b]).unwrap();
        let shared = route.clone();
        assert!(std::ptr::eq(route.stations(), shared.stations()));
    }

    #[test]
    fn route_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Route>();
    }
}
