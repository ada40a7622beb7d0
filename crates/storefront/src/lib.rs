//! Storefront domain module: dietary filtering, browsing, ordering and grouping.
//!
//! Everything here is a pure function of an immutable catalog and freshly built
//! value objects (no IO, no rendering, no shared state).

pub mod browse;
pub mod category;
pub mod filter;
mod lenient;
pub mod preferences;
pub mod sort;
pub mod view;

pub use browse::{ALL_CATEGORIES, BrowseFilterSet, CategoryFilter, apply_browse_filters};
pub use category::{
    CategoryGroup, FALLBACK_CATEGORY, PRIORITY_CATEGORIES, category_order, distinct_categories,
    group_by_category,
};
pub use filter::{ProductFilter, retain_matching};
pub use preferences::{OrganicPreference, PreferenceSet, apply_preferences};
pub use sort::{price_order, sort_by_price};
pub use view::{Layout, StorefrontView};
