//! `grocer-core`: foundation building blocks for the grocery storefront.
//!
//! This crate contains **pure** primitives shared by the catalog, storefront and
//! cart crates (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod text;
pub mod value_object;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use text::{contains_ignore_case, locale_cmp, normalize_label};
pub use value_object::ValueObject;
