use serde::{Serialize, Serializer};

use grocer_core::{CatalogError, CatalogResult, Entity, ValueObject};

/// Tri-state dietary/production attribute.
///
/// Absence means "this axis does not apply to the record"; `Set(false)` means
/// the record actively fails the axis. `Malformed` is a declared value that is
/// neither true nor false: it counts as present but never as a match. It keeps
/// the value's truthiness for the places that only ask "is it set at all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flag {
    #[default]
    Absent,
    Set(bool),
    Malformed(bool),
}

impl Flag {
    pub fn is_present(self) -> bool {
        !matches!(self, Flag::Absent)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Flag::Absent)
    }

    /// Exactly `true`.
    pub fn is_true(self) -> bool {
        matches!(self, Flag::Set(true))
    }

    /// Exactly `false`.
    pub fn is_false(self) -> bool {
        matches!(self, Flag::Set(false))
    }

    /// Loose reading: `true` or a truthy malformed value.
    pub fn is_truthy(self) -> bool {
        match self {
            Flag::Absent => false,
            Flag::Set(b) | Flag::Malformed(b) => b,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag::Set(value)
    }
}

impl From<Option<bool>> for Flag {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Flag::Absent, Flag::Set)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Flag::Set(b) => serializer.serialize_bool(*b),
            Flag::Absent | Flag::Malformed(_) => serializer.serialize_none(),
        }
    }
}

impl ValueObject for Flag {}

/// Unit price in the catalog's single implicit currency.
///
/// Any `f64` can be stored; only finite values count as a price. Invalid
/// prices sort last and contribute nothing to totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn invalid() -> Self {
        Self(f64::NAN)
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite()
    }

    /// The amount, if finite.
    pub fn value(self) -> Option<f64> {
        self.is_valid().then_some(self.0)
    }

    /// Contribution to a total: the amount if finite, zero otherwise.
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::invalid()
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl ValueObject for Price {}

/// Catalog record. Identity is the product name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Flag::is_absent")]
    vegetarian: Flag,
    #[serde(skip_serializing_if = "Flag::is_absent")]
    gluten_free: Flag,
    #[serde(skip_serializing_if = "Flag::is_absent")]
    lactose_intolerant: Flag,
    #[serde(skip_serializing_if = "Flag::is_absent")]
    diabetic: Flag,
    #[serde(skip_serializing_if = "Flag::is_absent")]
    organic: Flag,
    #[serde(skip_serializing_if = "Flag::is_absent")]
    contains_wheat: Flag,
    price: Price,
    image: String,
}

impl Product {
    /// Start building a product. All flags default to absent and the price to invalid.
    pub fn builder(name: impl Into<String>) -> ProductBuilder {
        ProductBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw category label, as declared.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Trimmed category label; blank labels are treated as absent.
    pub fn category_label(&self) -> Option<&str> {
        grocer_core::normalize_label(self.category())
    }

    pub fn vegetarian(&self) -> Flag {
        self.vegetarian
    }

    pub fn gluten_free(&self) -> Flag {
        self.gluten_free
    }

    pub fn lactose_intolerant(&self) -> Flag {
        self.lactose_intolerant
    }

    pub fn diabetic(&self) -> Flag {
        self.diabetic
    }

    pub fn organic(&self) -> Flag {
        self.organic
    }

    pub fn contains_wheat(&self) -> Flag {
        self.contains_wheat
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Display tag for the organic attribute, if the record declares one.
    pub fn organic_label(&self) -> Option<&'static str> {
        match self.organic {
            Flag::Absent => None,
            flag if flag.is_truthy() => Some("Organic"),
            _ => Some("Non-organic"),
        }
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

/// Builder for [`Product`].
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            product: Product {
                name: name.into(),
                category: None,
                vegetarian: Flag::Absent,
                gluten_free: Flag::Absent,
                lactose_intolerant: Flag::Absent,
                diabetic: Flag::Absent,
                organic: Flag::Absent,
                contains_wheat: Flag::Absent,
                price: Price::invalid(),
                image: String::new(),
            },
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.product.category = Some(category.into());
        self
    }

    pub fn vegetarian(mut self, flag: impl Into<Flag>) -> Self {
        self.product.vegetarian = flag.into();
        self
    }

    pub fn gluten_free(mut self, flag: impl Into<Flag>) -> Self {
        self.product.gluten_free = flag.into();
        self
    }

    pub fn lactose_intolerant(mut self, flag: impl Into<Flag>) -> Self {
        self.product.lactose_intolerant = flag.into();
        self
    }

    pub fn diabetic(mut self, flag: impl Into<Flag>) -> Self {
        self.product.diabetic = flag.into();
        self
    }

    pub fn organic(mut self, flag: impl Into<Flag>) -> Self {
        self.product.organic = flag.into();
        self
    }

    pub fn contains_wheat(mut self, flag: impl Into<Flag>) -> Self {
        self.product.contains_wheat = flag.into();
        self
    }

    pub fn price(mut self, price: impl Into<Price>) -> Self {
        self.product.price = price.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.product.image = image.into();
        self
    }

    /// Finish the record. The name is the selection key, so it must not be blank.
    pub fn build(self) -> CatalogResult<Product> {
        if self.product.name.trim().is_empty() {
            return Err(CatalogError::validation("product name cannot be empty"));
        }
        Ok(self.finish())
    }

    /// Finish without validation; for records whose names are known literals.
    pub(crate) fn finish(self) -> Product {
        self.product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_absent_flags_and_invalid_price() {
        let p = Product::builder("Mystery").build().unwrap();
        assert!(p.vegetarian().is_absent());
        assert!(p.organic().is_absent());
        assert!(!p.price().is_valid());
        assert_eq!(p.price().or_zero(), 0.0);
        assert_eq!(p.category(), None);
    }

    #[test]
    fn builder_rejects_blank_name() {
        let err = Product::builder("   ").build().unwrap_err();
        match err {
            CatalogError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn flag_distinguishes_absent_from_false() {
        assert!(!Flag::Absent.is_present());
        assert!(Flag::Set(false).is_present());
        assert!(Flag::Set(false).is_false());
        assert!(Flag::Malformed(true).is_present());
        assert!(!Flag::Malformed(true).is_true());
        assert!(!Flag::Malformed(false).is_false());
        assert_eq!(Flag::from(None), Flag::Absent);
        assert_eq!(Flag::from(Some(true)), Flag::Set(true));
    }

    #[test]
    fn price_validity() {
        assert_eq!(Price::new(1.5).value(), Some(1.5));
        assert_eq!(Price::new(f64::INFINITY).value(), None);
        assert_eq!(Price::invalid().or_zero(), 0.0);
    }

    #[test]
    fn category_label_is_trimmed() {
        let p = Product::builder("Kale").category("  Vegetables ").build().unwrap();
        assert_eq!(p.category_label(), Some("Vegetables"));

        let blank = Product::builder("Thing").category("  ").build().unwrap();
        assert_eq!(blank.category_label(), None);
    }

    #[test]
    fn organic_label_follows_flag() {
        let organic = Product::builder("Apples").organic(true).build().unwrap();
        let regular = Product::builder("Bananas").organic(false).build().unwrap();
        let unknown = Product::builder("Salt").build().unwrap();
        assert_eq!(organic.organic_label(), Some("Organic"));
        assert_eq!(regular.organic_label(), Some("Non-organic"));
        assert_eq!(unknown.organic_label(), None);
    }

    #[test]
    fn organic_label_reads_malformed_values_loosely() {
        let tagged = Product::builder("Tofu").organic(Flag::Malformed(true)).build().unwrap();
        let blank = Product::builder("Tempeh").organic(Flag::Malformed(false)).build().unwrap();
        assert_eq!(tagged.organic_label(), Some("Organic"));
        assert_eq!(blank.organic_label(), Some("Non-organic"));
        assert!(Flag::Malformed(true).is_truthy());
        assert!(!Flag::Absent.is_truthy());
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_flags() {
        let p = Product::builder("Bread")
            .category("Bakery")
            .contains_wheat(true)
            .price(2.0)
            .image("images/bread.png")
            .build()
            .unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["containsWheat"], serde_json::json!(true));
        assert_eq!(json["price"], serde_json::json!(2.0));
        assert!(json.get("vegetarian").is_none());
    }

    #[test]
    fn entity_id_is_name() {
        let p = Product::builder("Milk").build().unwrap();
        assert_eq!(p.id(), "Milk");
    }
}
