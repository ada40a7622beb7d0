//! Cart module: price aggregation over an explicit selection of product names.
//!
//! The cart knows nothing about dietary preferences or browse filters; it
//! only resolves names against the catalog.

pub mod selection;
pub mod summary;
pub mod total;

pub use selection::Selection;
pub use summary::{CartLine, CartSummary};
pub use total::total_price;
