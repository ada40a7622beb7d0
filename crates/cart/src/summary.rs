use serde::Serialize;

use grocer_products::{Catalog, Price};

use crate::selection::Selection;
use crate::total::total_price;

/// One line of the cart listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CartLine {
    /// Name found in the catalog.
    Known { name: String, price: Price },
    /// Name the catalog does not know; listed without a price.
    Unknown { name: String },
}

impl CartLine {
    pub fn name(&self) -> &str {
        match self {
            CartLine::Known { name, .. } | CartLine::Unknown { name } => name,
        }
    }

    pub fn price(&self) -> Option<Price> {
        match self {
            CartLine::Known { price, .. } => Some(*price),
            CartLine::Unknown { .. } => None,
        }
    }
}

/// Cart contents resolved against the catalog, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    lines: Vec<CartLine>,
    total: f64,
}

impl CartSummary {
    pub fn build(catalog: &Catalog, selection: &Selection) -> Self {
        let index = catalog.index();
        let lines = selection
            .names()
            .iter()
            .map(|name| match index.get(name) {
                Some(product) => CartLine::Known {
                    name: name.clone(),
                    price: product.price(),
                },
                None => CartLine::Unknown { name: name.clone() },
            })
            .collect();

        Self {
            lines,
            total: total_price(catalog, selection.names()),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
