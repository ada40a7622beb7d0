use serde::Serialize;

use grocer_products::{Catalog, Product};

use crate::browse::{BrowseFilterSet, apply_browse_filters};
use crate::category::{CategoryGroup, distinct_categories, group_by_category};
use crate::preferences::{PreferenceSet, apply_preferences};
use crate::sort::sort_by_price;

/// How the resulting products are laid out for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout<'a> {
    Flat(Vec<&'a Product>),
    Grouped(Vec<CategoryGroup<'a>>),
}

/// Products to display for one set of preferences and browse filters.
///
/// Pipeline: dietary filter, price sort, browse filter, then optional grouping.
/// Only the sort decides order; later stages drop or partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontView<'a> {
    categories: Vec<String>,
    layout: Layout<'a>,
}

impl<'a> StorefrontView<'a> {
    #[tracing::instrument(level = "debug", skip_all, fields(catalog = catalog.len()))]
    pub fn build(catalog: &'a Catalog, prefs: &PreferenceSet, browse: &BrowseFilterSet) -> Self {
        let suitable = apply_preferences(catalog, prefs);
        let sorted = sort_by_price(suitable);
        let categories = distinct_categories(sorted.iter().copied());
        let visible = apply_browse_filters(sorted.iter().copied(), browse);

        tracing::debug!(
            suitable = sorted.len(),
            visible = visible.len(),
            grouped = browse.should_group(),
            "storefront view built"
        );

        let layout = if browse.should_group() {
            Layout::Grouped(group_by_category(visible))
        } else {
            Layout::Flat(visible)
        };

        Self { categories, layout }
    }

    /// Categories of every product that passed the dietary filter, for the
    /// category selector. Browse filters do not narrow this list.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn layout(&self) -> &Layout<'a> {
        &self.layout
    }

    /// All displayed products, section by section.
    pub fn products(&self) -> Vec<&'a Product> {
        match &self.layout {
            Layout::Flat(products) => products.clone(),
            Layout::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.products.iter().copied())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.layout {
            Layout::Flat(products) => products.is_empty(),
            Layout::Grouped(groups) => groups.is_empty(),
        }
    }
}
