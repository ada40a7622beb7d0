//! Products domain module: catalog records and the catalog itself.
//!
//! Pure data plus tolerant loading (no rendering, no filtering policy).

pub mod catalog;
pub mod loader;
pub mod product;
pub mod restriction;
pub mod seed;

pub use catalog::{Catalog, CatalogIndex};
pub use product::{Flag, Price, Product, ProductBuilder};
pub use restriction::{Restriction, restricted_names};
pub use seed::demo_catalog;
