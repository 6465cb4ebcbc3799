//! Manufacturer label for trains and wagons.

use std::fmt;

/// Name of the company that built a train or wagon.
///
/// Pure metadata: nothing in the model reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Manufacturer(String);

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Manufacturer(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Manufacturer {
    fn from(name: &str) -> Self {
        Manufacturer::new(name)
    }
}
