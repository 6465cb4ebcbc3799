//! Trains and the registry that creates them.
//!
//! A [`Train`] is strict only when it is built: the registry validates the
//! number and kind and refuses to create anything on failure. After that,
//! every operation is total. Changing speed, coupling wagons and moving
//! along the route all quietly do nothing when their precondition does not
//! hold.

mod counter;
mod registry;


pub use counter::InstanceCounter;
pub use registry::{TrainRegistry, validate};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::config::TrainDefaults;
use crate::domain::{Manufacturer, RollingStockKind, TrainNumber};
use crate::network::{Route, StationId, Stations};
use crate::wagon::Wagon;

static NEXT_TRAIN_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a train.
///
/// Unlike the number, an id is never reused: not after a registry reset and
/// not across registries. Stations record presence by id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(u64);

impl TrainId {
    fn next() -> Self {
        TrainId(NEXT_TRAIN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

/// Where a train is along its route.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Position {
    route: Route,
    /// Always `< route.len()`.
    index: usize,
}

/// A train: a number, a kind, a speed, a list of wagons and, once it has
/// been given a route, a position along it.
///
/// Not `Clone`: every train's [`TrainId`] must be unique.
#[derive(Debug, PartialEq, Eq)]
pub struct Train {
    id: TrainId,
    number: TrainNumber,
    kind: RollingStockKind,
    speed: i32,
    wagons: Vec<Wagon>,
    position: Option<Position>,
    source_index: usize,
    manufacturer: Option<Manufacturer>,
}

impl Train {
    /// Build an unregistered train. Only the registry calls this, after
    /// validation.
    pub(crate) fn new(
        number: TrainNumber,
        kind: RollingStockKind,
        defaults: &TrainDefaults,
    ) -> Self {
        Self {
            id: TrainId::next(),
            number,
            kind,
            speed: defaults.initial_speed(kind),
            wagons: Vec::new(),
            position: None,
            source_index: defaults.source_station_index(kind),
            manufacturer: None,
        }
    }

    pub fn id(&self) -> TrainId {
        self.id
    }

    pub fn number(&self) -> &TrainNumber {
        &self.number
    }

    pub fn kind(&self) -> RollingStockKind {
        self.kind
    }

    pub fn is_cargo(&self) -> bool {
        self.kind == RollingStockKind::Cargo
    }

    pub fn is_passenger(&self) -> bool {
        self.kind == RollingStockKind::Passenger
    }

    // ---- speed ----

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// A stopped train is the only kind that can be recoupled.
    pub fn stopped(&self) -> bool {
        self.speed == 0
    }

    /// Add `delta` to the speed. Negative deltas are allowed.
    pub fn gain_speed(&mut self, delta: i32) {
        self.speed = self.speed.saturating_add(delta);
    }

    /// Slow down by `delta`, or stop outright if `delta` is not strictly
    /// less than the current speed.
    pub fn reset_speed(&mut self, delta: i32) {
        self.speed = if delta < self.speed {
            self.speed.saturating_sub(delta)
        } else {
            0
        };
    }

    // ---- wagons ----

    pub fn wagons(&self) -> &[Wagon] {
        &self.wagons
    }

    /// Mutable access to the coupled wagons, for loading and unloading.
    /// The composition itself can only change through attach and detach.
    pub fn wagons_mut(&mut self) -> &mut [Wagon] {
        &mut self.wagons
    }

    /// Couple a wagon to the end of the train.
    ///
    /// Only a stopped train accepts wagons, and only wagons of its own kind.
    /// A refused wagon is handed back unchanged.
    pub fn attach_wagon(&mut self, wagon: Wagon) -> Result<(), Wagon> {
        if !self.stopped() {
            debug!(train = %self.number, speed = self.speed, "Train is moving, wagon not attached");
            return Err(wagon);
        }
        if wagon.kind() != self.kind {
            debug!(
                train = %self.number,
                train_kind = %self.kind,
                wagon_kind = %wagon.kind(),
                "Wagon kind does not match train, not attached"
            );
            return Err(wagon);
        }
        self.wagons.push(wagon);
        trace!(train = %self.number, wagons = self.wagons.len(), "Wagon attached");
        Ok(())
    }

    /// Uncouple the first wagon equal to `wagon`.
    ///
    /// Returns `None` when the train is moving or no wagon matches.
    pub fn detach_wagon(&mut self, wagon: &Wagon) -> Option<Wagon> {
        if !self.stopped() || self.wagons.is_empty() {
            debug!(train = %self.number, speed = self.speed, "Wagon not detached");
            return None;
        }
        let idx = self.wagons.iter().position(|w| w == wagon)?;
        let detached = self.wagons.remove(idx);
        trace!(train = %self.number, wagons = self.wagons.len(), "Wagon detached");
        Some(detached)
    }

    // ---- route ----

    pub fn route(&self) -> Option<&Route> {
        self.position.as_ref().map(|p| &p.route)
    }

    /// Index of the current station along the route.
    pub fn station_index(&self) -> Option<usize> {
        self.position.as_ref().map(|p| p.index)
    }

    /// Put the train on a route, placing it at its source station.
    ///
    /// A train that was already standing somewhere leaves that station
    /// first, so it is never present at two stations at once.
    pub fn set_route(&mut self, route: Route, stations: &mut Stations) {
        if let Some(current) = self.current_station() {
            send(stations, current, self);
        }

        let index = self.source_index.min(route.last_index());
        let source = route.stations()[index];
        self.position = Some(Position { route, index });
        take(stations, source, self);

        debug!(train = %self.number, station = ?source, index, "Route assigned");
    }

    pub fn current_station(&self) -> Option<StationId> {
        let position = self.position.as_ref()?;
        position.route.get(position.index)
    }

    /// The station after the current one, or `None` at the destination.
    pub fn next_station(&self) -> Option<StationId> {
        let position = self.position.as_ref()?;
        position.route.get(position.index + 1)
    }

    /// The station before the current one, or `None` at the departure.
    pub fn previous_station(&self) -> Option<StationId> {
        let position = self.position.as_ref()?;
        let index = position.index.checked_sub(1)?;
        position.route.get(index)
    }

    /// Move one station towards the destination.
    ///
    /// Returns false, changing nothing, if there is no next station.
    pub fn forward(&mut self, stations: &mut Stations) -> bool {
        let (Some(current), Some(next)) = (self.current_station(), self.next_station()) else {
            trace!(train = %self.number, "No next station, staying put");
            return false;
        };
        self.move_between(stations, current, next, |index| index + 1);
        true
    }

    /// Move one station back towards the departure.
    ///
    /// Returns false, changing nothing, if there is no previous station.
    pub fn backward(&mut self, stations: &mut Stations) -> bool {
        let (Some(current), Some(previous)) = (self.current_station(), self.previous_station())
        else {
            trace!(train = %self.number, "No previous station, staying put");
            return false;
        };
        self.move_between(stations, current, previous, |index| index - 1);
        true
    }

    fn move_between(
        &mut self,
        stations: &mut Stations,
        from: StationId,
        to: StationId,
        step: impl FnOnce(usize) -> usize,
    ) {
        send(stations, from, self);
        take(stations, to, self);
        if let Some(position) = self.position.as_mut() {
            position.index = step(position.index);
        }
        debug!(train = %self.number, from = ?from, to = ?to, "Train moved");
    }

    // ---- metadata ----

    pub fn manufacturer(&self) -> Option<&Manufacturer> {
        self.manufacturer.as_ref()
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<Manufacturer>) {
        self.manufacturer = Some(manufacturer.into());
    }
}

fn take(stations: &mut Stations, id: StationId, train: &Train) {
    match stations.get_mut(id) {
        Some(station) => station.take(train),
        None => debug!(train = %train.number, station = ?id, "Unknown station, presence not recorded"),
    }
}

fn send(stations: &mut Stations, id: StationId, train: &Train) {
    match stations.get_mut(id) {
        Some(station) => station.send(train),
        None => debug!(train = %train.number, station = ?id, "Unknown station, presence not cleared"),
    }
}
