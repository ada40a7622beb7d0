//! Predicate seam shared by the dietary and browse filters.

use grocer_products::Product;

/// A per-product admission rule.
///
/// Filters are pure: they never reorder and never look at other products, so
/// applying one yields an order-preserving subsequence of its input.
pub trait ProductFilter {
    fn permits(&self, product: &Product) -> bool;
}

/// Keep the products `filter` admits, preserving input order.
pub fn retain_matching<'a, F>(
    products: impl IntoIterator<Item = &'a Product>,
    filter: &F,
) -> Vec<&'a Product>
where
    F: ProductFilter + ?Sized,
{
    products.into_iter().filter(|p| filter.permits(p)).collect()
}
