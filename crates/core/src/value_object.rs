//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are never mutated in place: two values
/// built from the same inputs compare equal, and "changing" one means building
/// a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount(u32);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(10), Amount(10));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
