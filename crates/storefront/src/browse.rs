use serde::{Deserialize, Deserializer, Serialize, Serializer};

use grocer_core::{ValueObject, contains_ignore_case};
use grocer_products::Product;

use crate::filter::{ProductFilter, retain_matching};
use crate::lenient;

/// Sentinel selector value meaning "every category".
pub const ALL_CATEGORIES: &str = "All";

/// Category selection for browsing.
///
/// Serialized as the selector value itself: `"All"` or the category label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Only products whose trimmed category equals the trimmed label.
    Only(String),
}

impl CategoryFilter {
    /// Map a selector value to a filter; the selector's "All" entry (and an
    /// absent selection) means no category constraint.
    pub fn from_selector(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(label) => CategoryFilter::Only(label.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => product.category().unwrap_or("").trim() == label.trim(),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategoryFilter::All => serializer.serialize_str(ALL_CATEGORIES),
            CategoryFilter::Only(label) => serializer.serialize_str(label),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    /// Any non-string selector (null, number, ...) means every category.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selector: Option<String> = lenient::or_default(deserializer)?;
        Ok(CategoryFilter::from_selector(selector.as_deref()))
    }
}

/// Display-side narrowing applied after the dietary filter.
///
/// Deserializes from the presentation shape (`search`, `selectedCategory`,
/// `maxPrice`, `groupByCategory`); a field of the wrong type reads as its
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowseFilterSet {
    /// Case-insensitive substring of the product name; blank means no constraint.
    #[serde(deserialize_with = "lenient::or_default")]
    pub search: String,
    #[serde(rename = "selectedCategory")]
    pub category: CategoryFilter,
    /// Inclusive price ceiling. Ignored unless finite.
    #[serde(deserialize_with = "lenient::or_default")]
    pub max_price: Option<f64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub group_by_category: bool,
}

impl BrowseFilterSet {
    /// Grouped display only applies when browsing every category.
    pub fn should_group(&self) -> bool {
        self.group_by_category && self.category.is_all()
    }

    fn search_admits(&self, product: &Product) -> bool {
        contains_ignore_case(product.name(), self.search.trim())
    }

    fn budget_admits(&self, product: &Product) -> bool {
        match (self.max_price.filter(|m| m.is_finite()), product.price().value()) {
            (Some(max), Some(price)) => price <= max,
            // Invalid prices are not this rule's concern.
            _ => true,
        }
    }
}

impl ProductFilter for BrowseFilterSet {
    fn permits(&self, product: &Product) -> bool {
        self.category.admits(product) && self.search_admits(product) && self.budget_admits(product)
    }
}

impl ValueObject for BrowseFilterSet {}

/// Browse filter: order-preserving subsequence of `products` admitted by `filters`.
pub fn apply_browse_filters<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    filters: &BrowseFilterSet,
) -> Vec<&'a Product> {
    retain_matching(products, filters)
}
