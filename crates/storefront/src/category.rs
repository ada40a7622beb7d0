//! Category ordering and grouped display.

use core::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use grocer_core::locale_cmp;
use grocer_products::Product;

/// Fixed display precedence, ahead of every other category.
pub const PRIORITY_CATEGORIES: [&str; 4] = ["Vegetables", "Fruits", "Dairy", "Meats"];

/// Bucket for products without a category when grouping.
pub const FALLBACK_CATEGORY: &str = "Other";

fn priority_rank(label: &str) -> Option<usize> {
    PRIORITY_CATEGORIES.iter().position(|c| *c == label)
}

/// Priority categories first (in their fixed order), then the rest by
/// locale-style ascending text order.
pub fn category_order(a: &str, b: &str) -> Ordering {
    match (priority_rank(a), priority_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_cmp(a, b),
    }
}

/// Unique, trimmed category labels present in `products`, in display order.
///
/// Blank or missing categories are left out; those products still show up
/// under [`FALLBACK_CATEGORY`] when grouping.
pub fn distinct_categories<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    let mut labels: Vec<&str> = Vec::new();
    for label in products.into_iter().filter_map(Product::category_label) {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels.sort_by(|a, b| category_order(a, b));
    labels.into_iter().map(str::to_string).collect()
}

/// One display section of a grouped listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: String,
    pub products: Vec<&'a Product>,
}

/// Partition an already sorted list into category sections.
///
/// Sections follow [`category_order`], keep the input order within each
/// section, and are never empty. Products without a category land in
/// [`FALLBACK_CATEGORY`], which is ordered like any other non-priority label.
pub fn group_by_category<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> Vec<CategoryGroup<'a>> {
    let mut buckets: HashMap<&'a str, Vec<&'a Product>> = HashMap::new();
    for product in products {
        let label = product.category_label().unwrap_or(FALLBACK_CATEGORY);
        buckets.entry(label).or_default().push(product);
    }

    let mut groups: Vec<CategoryGroup<'a>> = buckets
        .into_iter()
        .map(|(category, products)| CategoryGroup {
            category: category.to_string(),
            products,
        })
        .collect();
    groups.sort_by(|a, b| category_order(&a.category, &b.category));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: Option<&str>, price: f64) -> Product {
        let builder = Product::builder(name).price(price);
        let builder = match category {
            Some(c) => builder.category(c),
            None => builder,
        };
        builder.build().unwrap()
    }

    #[test]
    fn priority_categories_come_first() {
        let products = vec![
            item("Steak", Some("Meats"), 9.0),
            item("Kale", Some("Vegetables"), 1.0),
            item("Club", Some("Zucchini-Club"), 2.0),
        ];
        assert_eq!(
            distinct_categories(&products),
            vec!["Vegetables", "Meats", "Zucchini-Club"]
        );
    }

    #[test]
    fn non_priority_categories_sort_alphabetically() {
        let products = vec![
            item("Soap", Some("household"), 1.0),
            item("Bread", Some("Bakery"), 1.0),
            item("Milk", Some("Dairy"), 1.0),
            item("Chips", Some("Snacks"), 1.0),
        ];
        assert_eq!(
            distinct_categories(&products),
            vec!["Dairy", "Bakery", "household", "Snacks"]
        );
    }

    #[test]
    fn distinct_categories_trim_dedupe_and_skip_blank() {
        let products = vec![
            item("Milk", Some(" Dairy"), 1.0),
            item("Cheese", Some("Dairy "), 1.0),
            item("Salt", Some("  "), 1.0),
            item("Pepper", None, 1.0),
        ];
        assert_eq!(distinct_categories(&products), vec!["Dairy"]);
    }

    #[test]
    fn empty_input_has_no_categories() {
        let products: Vec<Product> = Vec::new();
        assert!(distinct_categories(&products).is_empty());
        assert!(group_by_category(&products).is_empty());
    }

    #[test]
    fn groups_keep_input_order_within_section() {
        let products = vec![
            item("Broccoli", Some("Vegetables"), 0.5),
            item("Apples", Some("Fruits"), 1.5),
            item("Carrots", Some("Vegetables"), 1.0),
            item("Bananas", Some("Fruits"), 2.0),
        ];
        let groups = group_by_category(&products);
        let sections: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.category.as_str(), g.products.iter().map(|&p| p.name()).collect()))
            .collect();
        assert_eq!(
            sections,
            vec![
                ("Vegetables", vec!["Broccoli", "Carrots"]),
                ("Fruits", vec!["Apples", "Bananas"]),
            ]
        );
    }

    #[test]
    fn uncategorized_products_fall_under_other_alphabetically() {
        let products = vec![
            item("Salt", None, 0.5),
            item("Soap", Some("Household"), 1.0),
            item("Milk", Some("Dairy"), 2.0),
            item("Tape", Some("Supplies"), 3.0),
            item("Pepper", Some(" "), 4.0),
        ];
        let groups = group_by_category(&products);
        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["Dairy", "Household", "Other", "Supplies"]);

        let other = &groups[2];
        let names: Vec<&str> = other.products.iter().map(|&p| p.name()).collect();
        assert_eq!(names, vec!["Salt", "Pepper"]);
    }

    #[test]
    fn explicit_other_category_merges_with_uncategorized() {
        let products = vec![item("Gift Card", Some("Other"), 10.0), item("Salt", None, 0.5)];
        let groups = group_by_category(&products);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].products.len(), 2);
    }

    #[test]
    fn category_order_is_consistent() {
        assert_eq!(category_order("Dairy", "Fruits"), Ordering::Greater);
        assert_eq!(category_order("Meats", "Bakery"), Ordering::Less);
        assert_eq!(category_order("Bakery", "Other"), Ordering::Less);
        assert_eq!(category_order("Other", "Other"), Ordering::Equal);
    }
}
