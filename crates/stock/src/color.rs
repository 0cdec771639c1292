use core::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, IntoStaticStr};

use colorstock_core::{DomainError, DomainResult, ValueObject};

/// Closed set of colors a stock can hold.
///
/// The membership is fixed per deployment; string input is resolved against
/// the upper-case variant names (`"RED"`, `"WHITE"`, `"GREEN"`).
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    IntoStaticStr,
)]
#[serde(try_from = "String", into = "&'static str")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Color {
    Red,
    White,
    Green,
}

impl Color {
    /// Every member, in declaration order.
    pub const ALL: [Color; Color::COUNT] = [Color::Red, Color::White, Color::Green];

    /// Canonical name used for string input and serialization.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl ValueObject for Color {}

/// Resolve a color by exact name match.
///
/// This is the single entry point from untrusted strings into `Color`; every
/// string-accepting constructor goes through it.
pub fn parse_color_name(name: &str) -> DomainResult<Color> {
    match Color::ALL.into_iter().find(|c| c.name() == name) {
        Some(color) => Ok(color),
        None => {
            tracing::warn!(name, "rejected unknown color name");
            Err(DomainError::invalid_color_name(name))
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color_name(s)
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color_name(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_member_by_its_name() {
        for color in Color::ALL {
            assert_eq!(parse_color_name(color.name()).unwrap(), color);
        }
    }

    #[test]
    fn name_matches_display() {
        assert_eq!(Color::White.name(), "WHITE");
        assert_eq!(Color::White.to_string(), "WHITE");
    }

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        for input in ["red", "Red", " RED", "RED ", ""] {
            let err = parse_color_name(input).unwrap_err();
            assert_eq!(err, DomainError::InvalidColorName(input.to_string()));
        }
    }

    #[test]
    fn colors_outside_the_deployment_set_are_rejected() {
        let err = "BLUE".parse::<Color>().unwrap_err();
        match err {
            DomainError::InvalidColorName(name) => assert_eq!(name, "BLUE"),
            _ => panic!("Expected InvalidColorName for BLUE"),
        }
    }

    #[test]
    fn serde_uses_the_canonical_name() {
        assert_eq!(serde_json::to_string(&Color::Green).unwrap(), r#""GREEN""#);
        let parsed: Color = serde_json::from_str(r#""RED""#).unwrap();
        assert_eq!(parsed, Color::Red);
        assert!(serde_json::from_str::<Color>(r#""YELLOW""#).is_err());
    }
}
