use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use colorstock_core::{DomainError, DomainResult, ValueObject};

use crate::amount::Amount;
use crate::color::{Color, parse_color_name};

/// Immutable inventory of colors and their amounts.
///
/// Each color appears at most once. The mapping is owned and private; there
/// are no mutating methods, so a constructed stock can be shared freely
/// between readers.
///
/// Deserialization goes through [`ColorStock::from_string_map`], so external
/// input is validated the same way as the string constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Amount>",
    into = "BTreeMap<Color, Amount>"
)]
pub struct ColorStock {
    values: BTreeMap<Color, Amount>,
}

impl ColorStock {
    /// Build from a typed mapping. Always succeeds.
    pub fn from_color_map(values: BTreeMap<Color, Amount>) -> Self {
        tracing::debug!(colors = values.len(), "color stock constructed");
        Self { values }
    }

    /// Build from typed pairs; a repeated color keeps its last amount.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Color, Amount)>,
    {
        Self::from_color_map(pairs.into_iter().collect())
    }

    /// Build from a string-keyed mapping, resolving every key to a [`Color`].
    ///
    /// Fails with [`DomainError::InvalidColorName`] on the first key (in key
    /// order) that names no color. No stock is produced on failure.
    pub fn from_string_map<K>(values: BTreeMap<K, Amount>) -> DomainResult<Self>
    where
        K: AsRef<str>,
    {
        let typed = values
            .into_iter()
            .map(|(name, amount)| parse_color_name(name.as_ref()).map(|color| (color, amount)))
            .collect::<DomainResult<BTreeMap<Color, Amount>>>()?;
        Ok(Self::from_color_map(typed))
    }

    /// Build from string-keyed pairs; a repeated name keeps its last amount
    /// before validation runs.
    pub fn from_string_pairs<K, I>(pairs: I) -> DomainResult<Self>
    where
        K: AsRef<str> + Ord,
        I: IntoIterator<Item = (K, Amount)>,
    {
        Self::from_string_map(pairs.into_iter().collect::<BTreeMap<K, Amount>>())
    }

    /// Colors present in the stock.
    pub fn colors(&self) -> BTreeSet<Color> {
        self.values.keys().copied().collect()
    }

    /// Amount held for `color`.
    pub fn amount_for(&self, color: Color) -> DomainResult<Amount> {
        self.values
            .get(&color)
            .copied()
            .ok_or_else(|| DomainError::not_found(color))
    }

    pub fn contains(&self, color: Color) -> bool {
        self.values.contains_key(&color)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries ordered by color declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, Amount)> + '_ {
        self.values.iter().map(|(c, a)| (*c, *a))
    }
}

impl ValueObject for ColorStock {}

impl From<BTreeMap<Color, Amount>> for ColorStock {
    fn from(values: BTreeMap<Color, Amount>) -> Self {
        Self::from_color_map(values)
    }
}

impl From<ColorStock> for BTreeMap<Color, Amount> {
    fn from(stock: ColorStock) -> Self {
        stock.values
    }
}

impl TryFrom<BTreeMap<String, Amount>> for ColorStock {
    type Error = DomainError;

    fn try_from(values: BTreeMap<String, Amount>) -> Result<Self, Self::Error> {
        Self::from_string_map(values)
    }
}

impl FromIterator<(Color, Amount)> for ColorStock {
    fn from_iter<T: IntoIterator<Item = (Color, Amount)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}
