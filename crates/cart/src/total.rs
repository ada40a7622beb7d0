use grocer_products::Catalog;

/// Sum of the catalog prices of the selected names.
///
/// Names resolve through a last-write-wins index. Unknown names and invalid
/// prices contribute zero; nothing is rounded. Each occurrence of a name in
/// the selection is counted.
pub fn total_price<I>(catalog: &Catalog, selected: I) -> f64
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut selected = selected.into_iter().peekable();
    if selected.peek().is_none() {
        return 0.0;
    }

    let index = catalog.index();
    let mut total = 0.0;
    let mut unresolved = 0usize;
    for name in selected {
        match index.get(name.as_ref()) {
            Some(product) => total += product.price().or_zero(),
            None => unresolved += 1,
        }
    }

    if unresolved > 0 {
        tracing::debug!(unresolved, "selection contains names missing from the catalog");
    }
    total
}
