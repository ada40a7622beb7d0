//! Single-restriction name listing.
//!
//! Predates the combined preference filter: one restriction at a time, and a
//! product qualifies when the matching attribute is truthy (`true`, or a
//! malformed value such as `"yes"`).

use crate::catalog::Catalog;
use crate::product::{Flag, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Restriction {
    Vegetarian,
    GlutenFree,
    LactoseIntolerant,
    Diabetic,
    /// No restriction: every product qualifies.
    None,
}

impl Restriction {
    fn flag(self, product: &Product) -> Option<Flag> {
        match self {
            Restriction::Vegetarian => Some(product.vegetarian()),
            Restriction::GlutenFree => Some(product.gluten_free()),
            Restriction::LactoseIntolerant => Some(product.lactose_intolerant()),
            Restriction::Diabetic => Some(product.diabetic()),
            Restriction::None => None,
        }
    }

    pub fn permits(self, product: &Product) -> bool {
        self.flag(product).is_none_or(Flag::is_truthy)
    }
}

/// Names of the products satisfying `restriction`, in catalog order.
pub fn restricted_names(catalog: &Catalog, restriction: Restriction) -> Vec<String> {
    catalog
        .iter()
        .filter(|p| restriction.permits(p))
        .map(|p| p.name().to_string())
        .collect()
}
