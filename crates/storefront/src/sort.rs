use core::cmp::Ordering;

use grocer_core::locale_cmp;
use grocer_products::Product;

/// Display order: ascending finite price; invalid prices sink to the end and
/// order among themselves by name.
///
/// Two finite prices that compare equal are `Equal`, so a stable sort keeps
/// their input order.
pub fn price_order(a: &Product, b: &Product) -> Ordering {
    match (a.price().value(), b.price().value()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_cmp(a.name(), b.name()),
    }
}

/// Sort into display order. Returns a new sequence; the input is untouched.
pub fn sort_by_price<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
    let mut sorted: Vec<&Product> = products.into_iter().collect();
    sorted.sort_by(|a, b| price_order(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_products::Price;

    fn priced(name: &str, price: impl Into<Price>) -> Product {
        Product::builder(name).price(price).build().unwrap()
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|&p| p.name()).collect()
    }

    #[test]
    fn sorts_ascending_by_price() {
        let products = vec![priced("c", 1.5), priced("a", 0.5), priced("b", 1.0)];
        assert_eq!(names(&sort_by_price(&products)), vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let products = vec![priced("Yogurt", 4.0), priced("Milk", 4.0), priced("Apples", 1.5)];
        assert_eq!(names(&sort_by_price(&products)), vec!["Apples", "Yogurt", "Milk"]);
    }

    #[test]
    fn invalid_prices_sink_and_order_by_name() {
        let products = vec![
            priced("Zest", Price::invalid()),
            priced("Kale", 2.0),
            priced("apple", f64::INFINITY),
            priced("Bread", 1.0),
        ];
        assert_eq!(
            names(&sort_by_price(&products)),
            vec!["Bread", "Kale", "apple", "Zest"]
        );
    }

    #[test]
    fn input_is_not_reordered() {
        let products = vec![priced("b", 2.0), priced("a", 1.0)];
        let _ = sort_by_price(&products);
        assert_eq!(products[0].name(), "b");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn price() -> impl Strategy<Value = f64> {
            prop_oneof![
                4 => 0.0f64..50.0,
                1 => Just(f64::NAN),
                1 => Just(f64::INFINITY),
            ]
        }

        proptest! {
            /// Property: output is a permutation of the input.
            #[test]
            fn sort_is_permutation(entries in prop::collection::vec(("[a-z]{1,5}", price()), 0..30)) {
                let products: Vec<Product> = entries.iter().map(|(n, p)| priced(n, *p)).collect();
                let sorted = sort_by_price(&products);

                prop_assert_eq!(sorted.len(), products.len());
                for p in &products {
                    let in_input = products.iter().filter(|q| core::ptr::eq(*q, p)).count();
                    let in_output = sorted.iter().filter(|&&q| core::ptr::eq(q, p)).count();
                    prop_assert_eq!(in_input, in_output);
                }
            }

            /// Property: finite prices are non-decreasing and precede invalid ones.
            #[test]
            fn finite_prices_ascend(entries in prop::collection::vec(("[a-z]{1,5}", price()), 0..30)) {
                let products: Vec<Product> = entries.iter().map(|(n, p)| priced(n, *p)).collect();
                let sorted = sort_by_price(&products);

                for pair in sorted.windows(2) {
                    match (pair[0].price().value(), pair[1].price().value()) {
                        (Some(a), Some(b)) => prop_assert!(a <= b),
                        (None, Some(_)) => prop_assert!(false, "invalid price sorted before a valid one"),
                        _ => {}
                    }
                }
            }
        }
    }
}
