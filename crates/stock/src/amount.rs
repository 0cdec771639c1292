use serde::{Deserialize, Serialize};

use colorstock_core::ValueObject;

/// Non-negative quantity held for a single color.
///
/// Kept distinct from bare integers so counts do not get mixed with unrelated
/// numbers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u32);

impl Amount {
    pub const fn new(quantity: u32) -> Self {
        Self(quantity)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl ValueObject for Amount {}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Amount> for u32 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
