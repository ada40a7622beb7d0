//! Plain-text rendering of storefront and cart results.

use std::fmt::Write as _;

use grocer_cart::{CartLine, CartSummary};
use grocer_products::{Flag, Product};
use grocer_storefront::{ALL_CATEGORIES, Layout, StorefrontView};

use crate::config::DisplayConfig;
use crate::money::format_price;

pub const NO_MATCHES: &str =
    "No products match your preferences. Try changing your dietary filters.";

/// `Broccoli - $0.50 (Organic)`
pub fn product_line(product: &Product, display: &DisplayConfig) -> String {
    let mut line = format!(
        "{} - {}",
        product.name(),
        format_price(product.price().or_zero(), display)
    );
    if let Some(label) = product.organic_label() {
        let _ = write!(line, " ({label})");
    }
    line
}

fn flag_text(flag: Flag) -> &'static str {
    match flag {
        Flag::Set(true) => "yes",
        Flag::Set(false) => "no",
        Flag::Absent => "-",
        Flag::Malformed(_) => "?",
    }
}

/// Every attribute of one product, one per line.
pub fn product_detail(product: &Product, display: &DisplayConfig) -> String {
    let price = match product.price().value() {
        Some(v) => format_price(v, display),
        None => "-".to_string(),
    };
    let rows = [
        ("category", product.category_label().unwrap_or("-").to_string()),
        ("price", price),
        ("vegetarian", flag_text(product.vegetarian()).to_string()),
        ("gluten free", flag_text(product.gluten_free()).to_string()),
        ("lactose free", flag_text(product.lactose_intolerant()).to_string()),
        ("diabetic", flag_text(product.diabetic()).to_string()),
        ("organic", flag_text(product.organic()).to_string()),
        ("contains wheat", flag_text(product.contains_wheat()).to_string()),
    ];

    let mut out = format!("{}\n", product.name());
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<16}{value}", format!("{label}:"));
    }
    out
}

pub fn storefront(view: &StorefrontView<'_>, display: &DisplayConfig) -> String {
    if view.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let mut out = String::new();
    match view.layout() {
        Layout::Flat(products) => {
            for p in products {
                let _ = writeln!(out, "{}", product_line(p, display));
            }
        }
        Layout::Grouped(groups) => {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}", group.category);
                for p in &group.products {
                    let _ = writeln!(out, "  {}", product_line(p, display));
                }
            }
        }
    }
    out
}

pub fn categories(categories: &[String]) -> String {
    let mut out = format!("{ALL_CATEGORIES}\n");
    for c in categories {
        let _ = writeln!(out, "{c}");
    }
    out
}

pub fn cart(summary: &CartSummary, display: &DisplayConfig) -> String {
    if summary.is_empty() {
        return "Your cart is empty.\n".to_string();
    }

    let mut out = String::from("You selected:\n");
    for line in summary.lines() {
        match line {
            CartLine::Known { name, price } => {
                let _ = writeln!(out, "  {name} - {}", format_price(price.or_zero(), display));
            }
            CartLine::Unknown { name } => {
                let _ = writeln!(out, "  {name}");
            }
        }
    }
    let _ = writeln!(out, "Total Price: {}", format_price(summary.total(), display));
    out
}
