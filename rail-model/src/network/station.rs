//! Station presence tracking.

use crate::domain::{RollingStockKind, TrainNumber};
use crate::train::{Train, TrainId};

/// One train standing at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Presence {
    id: TrainId,
    number: TrainNumber,
    kind: RollingStockKind,
}

/// A station and the trains currently standing at it.
///
/// The station only records membership. Trains themselves live in the
/// [`TrainRegistry`](crate::train::TrainRegistry). Membership is keyed on
/// [`TrainId`], so two trains sharing a number never collide here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    /// Present trains in arrival order.
    trains: Vec<Presence>,
}

impl Station {
    /// Create an empty station.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trains: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record that a train has arrived.
    ///
    /// Taking a train that is already here does nothing.
    pub fn take(&mut self, train: &Train) {
        if self.contains(train) {
            return;
        }
        self.trains.push(Presence {
            id: train.id(),
            number: train.number().clone(),
            kind: train.kind(),
        });
    }

    /// Record that a train has left.
    ///
    /// Sending a train that is not here does nothing.
    pub fn send(&mut self, train: &Train) {
        self.trains.retain(|p| p.id != train.id());
    }

    /// Does this station currently hold the given train?
    pub fn contains(&self, train: &Train) -> bool {
        self.trains.iter().any(|p| p.id == train.id())
    }

    /// Numbers of all present trains, in arrival order.
    pub fn trains(&self) -> impl Iterator<Item = &TrainNumber> + '_ {
        self.trains.iter().map(|p| &p.number)
    }

    /// Numbers of present trains of one kind, in arrival order.
    pub fn trains_of_type(
        &self,
        kind: RollingStockKind,
    ) -> impl Iterator<Item = &TrainNumber> + '_ {
        self.trains
            .iter()
            .filter(move |p| p.kind == kind)
            .map(|p| &p.number)
    }

    /// Number of present trains.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Forget every train standing here.
    pub fn clear(&mut self) {
        self.trains.clear();
    }
}
