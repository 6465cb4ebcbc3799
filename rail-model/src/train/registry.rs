//! Train registry and construction-time validation.

use std::collections::HashMap;

use tracing::debug;

use crate::config::TrainDefaults;
use crate::domain::{RollingStockKind, TrainError, TrainNumber};

use super::{InstanceCounter, Train};

/// Check that a train could be created from the given inputs.
///
/// Checks run in a fixed order: kind present, kind known, number present,
/// number well-formed, number unused. The first failure is returned.
pub fn validate(
    number: Option<&str>,
    kind: Option<&str>,
    registry: &TrainRegistry,
) -> Result<(TrainNumber, RollingStockKind), TrainError> {
    let kind = kind.ok_or(TrainError::MissingKind)?;
    let kind =
        RollingStockKind::parse(kind).map_err(|_| TrainError::InvalidKind(kind.to_string()))?;

    let number = number.ok_or(TrainError::MissingNumber)?;
    let number = TrainNumber::parse(number)
        .map_err(|_| TrainError::InvalidNumberFormat(number.to_string()))?;

    if registry.contains(number.as_str()) {
        return Err(TrainError::DuplicateNumber(number));
    }

    Ok((number, kind))
}

/// Every train created so far, keyed by number.
///
/// The registry owns its trains; callers borrow them through
/// [`find`](Self::find) and [`find_mut`](Self::find_mut). Tests get a fresh
/// registry per case, or call [`reset`](Self::reset).
#[derive(Debug, Default)]
pub struct TrainRegistry {
    trains: HashMap<TrainNumber, Train>,
    counter: InstanceCounter,
    defaults: TrainDefaults,
}

impl TrainRegistry {
    /// Create an empty registry using the default train settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with custom per-kind settings.
    pub fn with_defaults(defaults: TrainDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Validate, build and register a new train.
    ///
    /// On error nothing is registered and the instance count is unchanged.
    pub fn create(
        &mut self,
        number: Option<&str>,
        kind: Option<&str>,
    ) -> Result<&mut Train, TrainError> {
        let (number, kind) = validate(number, kind, self)?;
        let train = Train::new(number.clone(), kind, &self.defaults);

        self.counter.register_instance(kind);
        debug!(train = %number, kind = %kind, total = self.counter.total(), "Train registered");

        Ok(self.trains.entry(number).or_insert(train))
    }

    /// Look up a train by number.
    pub fn find(&self, number: &str) -> Option<&Train> {
        self.trains.get(number)
    }

    pub fn find_mut(&mut self, number: &str) -> Option<&mut Train> {
        self.trains.get_mut(number)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.trains.contains_key(number)
    }

    /// Iterate over all registered trains, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Train> + '_ {
        self.trains.values()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Instance counts by kind.
    pub fn counter(&self) -> &InstanceCounter {
        &self.counter
    }

    pub fn defaults(&self) -> &TrainDefaults {
        &self.defaults
    }

    /// Forget every train and zero the instance counts. Defaults are kept.
    ///
    /// Stations may still list the discarded trains; new trains never
    /// collide with them. Use [`Stations::clear_trains`] to drop them too.
    ///
    /// [`Stations::clear_trains`]: crate::network::Stations::clear_trains
    pub fn reset(&mut self) {
        self.trains.clear();
        self.counter.reset();
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any well-formed, unused number yields a train that can be found again
        #[test]
        fn valid_inputs_register(
            number in "[A-Za-z0-9]{3}-?[A-Za-z0-9]{2}",
            cargo in any::<bool>(),
        ) {
            let kind = if cargo { "cargo" } else { "passenger" };
            let mut registry = TrainRegistry::new();
            registry.create(Some(number.as_str()), Some(kind)).unwrap();

            let found = registry.find(&number).unwrap();
            prop_assert_eq!(found.number().as_str(), number.as_str());
            prop_assert_eq!(found.is_cargo(), cargo);
        }

        /// Rejected inputs never touch the registry
        #[test]
        fn invalid_inputs_leave_registry_unchanged(
            number in proptest::option::of("[A-Za-z0-9_ -]{0,8}"),
            kind in proptest::option::of("(cargo|passenger|tram)?"),
        ) {
            let mut registry = TrainRegistry::new();
            registry.create(Some("KEP01"), Some("cargo")).unwrap();
            let before = registry.len();

            if registry.create(number.as_deref(), kind.as_deref()).is_err() {
                prop_assert_eq!(registry.len(), before);
                prop_assert_eq!(registry.counter().total(), before);
            }
        }
    }
}
