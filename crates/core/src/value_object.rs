//! Value object trait: equality by value, not identity.
//!
//! Preference sets, browse filters and prices are value objects: they carry no
//! identity and are rebuilt from scratch for every call into the storefront.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two preference
/// sets with the same flags filter a catalog identically, no matter where they
/// were built.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`PreferenceSet { vegetarian: true, .. }`)
/// - **Entity**: has identity (a `Product`, keyed by its name)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceCeiling(f64);
///
/// impl ValueObject for PriceCeiling {}
///
/// assert_eq!(PriceCeiling(2.5), PriceCeiling(2.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
