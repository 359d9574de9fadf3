//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// A `Money` of 65 000 cents equals any other `Money` of 65 000 cents;
/// there is no identity beyond the value itself. Implementors stay
/// immutable: "modifying" a value object means constructing a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
