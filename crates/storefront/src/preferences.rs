use serde::{Deserialize, Serialize};

use grocer_core::ValueObject;
use grocer_products::Product;

use crate::filter::{ProductFilter, retain_matching};
use crate::lenient;

/// Organic preference (tri-state). Unrecognized values read as `Any`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrganicPreference {
    Organic,
    NonOrganic,
    /// No constraint.
    #[default]
    #[serde(other)]
    Any,
}

/// Dietary preferences, rebuilt from caller state for every filter call.
///
/// All rules are AND-combined. Absence handling differs per axis:
/// - vegetarian is opt-in, so a product must declare `vegetarian: true`;
/// - lactose and diabetic treat a missing attribute as compatible;
/// - gluten prefers `contains_wheat` and only falls back to `gluten_free`
///   when the wheat attribute is missing;
/// - the organic preference ignores products that declare nothing.
///
/// Fields holding anything but a boolean (or, for `organicPref`, a known
/// choice) read as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceSet {
    #[serde(deserialize_with = "lenient::or_default")]
    pub vegetarian: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub gluten_intolerance: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub lactose_intolerance: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub diabetic_friendly: bool,
    #[serde(rename = "organicPref", deserialize_with = "lenient::or_default")]
    pub organic: OrganicPreference,
}

impl PreferenceSet {
    /// True when no rule is enabled; filtering is then the identity.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    fn vegetarian_ok(&self, p: &Product) -> bool {
        !self.vegetarian || p.vegetarian().is_true()
    }

    fn gluten_ok(&self, p: &Product) -> bool {
        if !self.gluten_intolerance {
            return true;
        }
        let wheat = p.contains_wheat();
        if wheat.is_present() {
            !wheat.is_true()
        } else {
            p.gluten_free().is_true()
        }
    }

    fn lactose_ok(&self, p: &Product) -> bool {
        let flag = p.lactose_intolerant();
        !self.lactose_intolerance || !flag.is_present() || flag.is_true()
    }

    fn diabetic_ok(&self, p: &Product) -> bool {
        let flag = p.diabetic();
        !self.diabetic_friendly || !flag.is_present() || flag.is_true()
    }

    fn organic_ok(&self, p: &Product) -> bool {
        let flag = p.organic();
        if !flag.is_present() {
            return true;
        }
        match self.organic {
            OrganicPreference::Any => true,
            OrganicPreference::Organic => flag.is_true(),
            OrganicPreference::NonOrganic => flag.is_false(),
        }
    }
}

impl ProductFilter for PreferenceSet {
    fn permits(&self, product: &Product) -> bool {
        self.vegetarian_ok(product)
            && self.gluten_ok(product)
            && self.lactose_ok(product)
            && self.diabetic_ok(product)
            && self.organic_ok(product)
    }
}

impl ValueObject for PreferenceSet {}

/// Dietary filter: order-preserving subsequence of `products` that satisfies `prefs`.
pub fn apply_preferences<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    prefs: &PreferenceSet,
) -> Vec<&'a Product> {
    retain_matching(products, prefs)
}
