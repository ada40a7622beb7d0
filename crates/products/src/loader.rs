//! Tolerant JSON catalog loading.
//!
//! Catalog documents are accepted in the storefront's camelCase shape
//! (`glutenFree`, `containsWheat`, ...) as well as snake_case. Nothing here
//! rejects a record for a bad attribute: flags with non-boolean values load as
//! [`Flag::Malformed`] carrying the value's truthiness, and prices are read
//! leniently (`null`, `""` and `false` are 0, `true` is 1, numeric strings
//! parse, a missing or unparseable price is invalid). Only records without a usable name are
//! dropped, because the name is the selection key.

use serde_json::{Map, Value};

use grocer_core::{CatalogError, CatalogResult};

use crate::catalog::Catalog;
use crate::product::{Flag, Price, Product};

impl Catalog {
    /// Parse a JSON catalog document.
    ///
    /// Fails only if `json` is not JSON at all; any JSON value that is not an
    /// array yields an empty catalog.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CatalogError::malformed(e.to_string()))?;
        Ok(Self::from_json_value(&value))
    }

    /// Build a catalog from an already-parsed JSON value.
    pub fn from_json_value(value: &Value) -> Self {
        let Some(entries) = value.as_array() else {
            tracing::warn!("catalog document is not an array; treating as empty");
            return Self::empty();
        };

        let products: Vec<Product> = entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                let product = product_from_value(entry);
                if product.is_none() {
                    tracing::warn!(position, "skipping catalog entry without a usable name");
                }
                product
            })
            .collect();

        tracing::debug!(loaded = products.len(), entries = entries.len(), "catalog loaded");
        Self::new(products)
    }
}

fn product_from_value(value: &Value) -> Option<Product> {
    let fields = value.as_object()?;
    let name = fields.get("name")?.as_str()?;

    let mut builder = Product::builder(name)
        .vegetarian(flag(fields, &["vegetarian"]))
        .gluten_free(flag(fields, &["glutenFree", "gluten_free"]))
        .lactose_intolerant(flag(fields, &["lactoseIntolerant", "lactose_intolerant"]))
        .diabetic(flag(fields, &["diabetic"]))
        .organic(flag(fields, &["organic"]))
        .contains_wheat(flag(fields, &["containsWheat", "contains_wheat"]))
        .price(price(fields.get("price")));

    if let Some(category) = fields.get("category").and_then(Value::as_str) {
        builder = builder.category(category);
    }
    if let Some(image) = fields.get("image").and_then(Value::as_str) {
        builder = builder.image(image);
    }

    builder.build().ok()
}

fn flag(fields: &Map<String, Value>, keys: &[&str]) -> Flag {
    match keys.iter().find_map(|k| fields.get(*k)) {
        None => Flag::Absent,
        Some(Value::Bool(b)) => Flag::Set(*b),
        Some(other) => Flag::Malformed(truthy(other)),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn price(value: Option<&Value>) -> Price {
    value.map_or_else(Price::invalid, |v| Price::new(number(v)))
}

/// Lenient numeric reading of a JSON value; NaN when no number can be read.
fn number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [one @ (Value::Null | Value::String(_) | Value::Number(_) | Value::Array(_))] => {
                number(one)
            }
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    match radix {
        Some(_) if text[2..].starts_with('+') => f64::NAN,
        Some(radix) => u64::from_str_radix(&text[2..], radix).map_or(f64::NAN, |n| n as f64),
        None => text.parse().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_camel_case_records() {
        let catalog = Catalog::from_json_value(&json!([
            {
                "name": "Bread",
                "category": "Bakery",
                "vegetarian": true,
                "glutenFree": false,
                "lactoseIntolerant": true,
                "diabetic": true,
                "organic": false,
                "containsWheat": true,
                "price": 2.0,
                "image": "images/bread.png"
            }
        ]));

        let bread = catalog.get("Bread").unwrap();
        assert_eq!(bread.category(), Some("Bakery"));
        assert!(bread.contains_wheat().is_true());
        assert!(bread.gluten_free().is_false());
        assert_eq!(bread.price().value(), Some(2.0));
        assert_eq!(bread.image(), "images/bread.png");
    }

    #[test]
    fn missing_attributes_stay_absent() {
        let catalog = Catalog::from_json_value(&json!([{ "name": "Salt", "price": 0.25 }]));
        let salt = catalog.get("Salt").unwrap();
        assert!(salt.lactose_intolerant().is_absent());
        assert!(salt.organic().is_absent());
        assert_eq!(salt.category(), None);
    }

    #[test]
    fn non_boolean_flag_is_malformed() {
        let catalog = Catalog::from_json_value(&json!([{ "name": "Tofu", "organic": "yes", "vegetarian": null }]));
        let tofu = catalog.get("Tofu").unwrap();
        assert_eq!(tofu.organic(), Flag::Malformed(true));
        assert_eq!(tofu.vegetarian(), Flag::Malformed(false));
    }

    #[test]
    fn prices_follow_number_conversion() {
        let catalog = Catalog::from_json_value(&json!([
            { "name": "A", "price": " 2.5 " },
            { "name": "B", "price": "free" },
            { "name": "C", "price": null },
            { "name": "D" },
            { "name": "E", "price": "" },
            { "name": "F", "price": true },
            { "name": "G", "price": "0x10" },
            { "name": "H", "price": "inf" },
            { "name": "I", "price": ["3"] },
            { "name": "J", "price": { "amount": 1 } }
        ]));
        let price = |name: &str| catalog.get(name).unwrap().price().value();
        assert_eq!(price("A"), Some(2.5));
        assert_eq!(price("B"), None);
        assert_eq!(price("C"), Some(0.0));
        assert_eq!(price("D"), None);
        assert_eq!(price("E"), Some(0.0));
        assert_eq!(price("F"), Some(1.0));
        assert_eq!(price("G"), Some(16.0));
        assert_eq!(price("H"), None);
        assert_eq!(price("I"), Some(3.0));
        assert_eq!(price("J"), None);
    }

    #[test]
    fn flag_truthiness_follows_json_value() {
        let catalog = Catalog::from_json_value(&json!([{
            "name": "Tofu",
            "organic": 0,
            "diabetic": "",
            "vegetarian": [],
            "glutenFree": 2
        }]));
        let tofu = catalog.get("Tofu").unwrap();
        assert_eq!(tofu.organic(), Flag::Malformed(false));
        assert_eq!(tofu.diabetic(), Flag::Malformed(false));
        assert_eq!(tofu.vegetarian(), Flag::Malformed(true));
        assert_eq!(tofu.gluten_free(), Flag::Malformed(true));
    }

    #[test]
    fn skips_entries_without_usable_name() {
        let catalog = Catalog::from_json_value(&json!([
            42,
            null,
            { "price": 1.0 },
            { "name": "   " },
            { "name": "Milk", "price": 4.0 }
        ]));
        assert_eq!(catalog.names(), vec!["Milk"]);
    }

    #[test]
    fn non_array_document_is_empty_catalog() {
        assert!(Catalog::from_json_value(&json!({ "name": "Milk" })).is_empty());
        assert!(Catalog::from_json_str("\"products\"").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_malformed_error() {
        let err = Catalog::from_json_str("[{").unwrap_err();
        match err {
            CatalogError::Malformed(_) => {}
            _ => panic!("Expected Malformed error for invalid JSON"),
        }
    }
}
