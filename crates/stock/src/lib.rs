//! Color stock domain module.
//!
//! An immutable inventory of colors and amounts, built either from typed
//! [`Color`] keys or from raw strings validated against the enumeration.
//! Pure domain logic (no IO, no storage).

pub mod amount;
pub mod color;
pub mod stock;

pub use amount::Amount;
pub use color::{Color, parse_color_name};
pub use colorstock_core::{DomainError, DomainResult};
pub use stock::ColorStock;
