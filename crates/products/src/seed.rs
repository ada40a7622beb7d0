//! Built-in demo catalog.

use crate::catalog::Catalog;
use crate::product::Product;

/// The storefront's demo assortment, in display-definition order.
pub fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        seed("Broccoli", "Vegetables", [true, true, true, true, true, false], 0.5, "images/broccoli.png"),
        seed("Carrots", "Vegetables", [true, true, true, true, false, false], 1.0, "images/carrot.png"),
        seed("Lettuce", "Vegetables", [true, true, true, true, true, false], 1.0, "images/lettuce.png"),
        seed("Apples", "Fruits", [true, true, true, true, true, false], 1.5, "images/apples.png"),
        seed("Bananas", "Fruits", [true, true, true, true, false, false], 2.0, "images/banana.png"),
        seed("Strawberries", "Fruits", [true, true, true, true, true, false], 2.0, "images/strawberry.png"),
        seed("Bread", "Bakery", [true, false, true, true, false, true], 2.0, "images/bread.png"),
        seed("Muffin", "Bakery", [true, false, false, false, false, true], 2.5, "images/muffin.png"),
        seed("Croissant", "Bakery", [true, false, true, true, false, true], 3.0, "images/croissant.png"),
        seed("Cheese", "Dairy", [true, true, false, false, true, false], 3.5, "images/cheese.png"),
        seed("Yogurt", "Dairy", [true, true, false, false, false, false], 4.0, "images/yogurt.png"),
        seed("Milk", "Dairy", [true, true, false, false, false, false], 4.0, "images/milk.png"),
        seed("Pork Chops", "Meats", [false, true, true, true, false, false], 4.0, "images/porkchop.png"),
        seed("Salmon", "Meats", [false, true, true, true, false, false], 6.0, "images/salmon.png"),
        seed("Chicken Wing", "Meats", [false, true, true, true, false, false], 14.0, "images/chickenwing.png"),
    ])
}

/// Flags in order: vegetarian, gluten free, lactose friendly, diabetic friendly,
/// organic, contains wheat.
fn seed(name: &str, category: &str, flags: [bool; 6], price: f64, image: &str) -> Product {
    let [vegetarian, gluten_free, lactose_intolerant, diabetic, organic, contains_wheat] = flags;
    Product::builder(name)
        .category(category)
        .vegetarian(vegetarian)
        .gluten_free(gluten_free)
        .lactose_intolerant(lactose_intolerant)
        .diabetic(diabetic)
        .organic(organic)
        .contains_wheat(contains_wheat)
        .price(price)
        .image(image)
        .finish()
}
