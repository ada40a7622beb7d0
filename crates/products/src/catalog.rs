use std::collections::HashMap;
use std::sync::Arc;

use grocer_core::{CatalogError, CatalogResult, Entity};

use crate::product::Product;

/// Immutable, ordered product catalog.
///
/// Loaded once and shared by reference; every derived list (filtered, sorted,
/// grouped) is a new sequence, the catalog order itself never changes.
/// Duplicate names are not rejected: name lookups resolve to the last record
/// carrying that name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by name (last-write-wins on duplicates).
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().rev().find(|p| p.name() == name)
    }

    /// Like [`Catalog::get`], but a missing name is an error.
    pub fn require(&self, name: &str) -> CatalogResult<&Product> {
        self.get(name).ok_or_else(|| CatalogError::not_found(name))
    }

    /// Build a name -> product index for repeated lookups.
    pub fn index(&self) -> CatalogIndex<'_> {
        CatalogIndex::new(&self.products)
    }

    /// Product names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(Product::name).collect()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Name -> product lookup borrowed from a catalog.
#[derive(Debug, Clone)]
pub struct CatalogIndex<'a> {
    by_name: HashMap<&'a str, &'a Product>,
}

impl<'a> CatalogIndex<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        let mut by_name = HashMap::with_capacity(products.len());
        for p in products {
            // Later records overwrite earlier ones with the same name.
            by_name.insert(p.id(), p);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Product> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
