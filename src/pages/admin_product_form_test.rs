use super::*;

fn filled_form() -> ProductForm {
    ProductForm {
        name: "Velvet Matte".into(),
        category: "lipstick".into(),
        price: "125000".into(),
        stock: "40".into(),
        description: String::new(),
        palettes: vec!["winter clear".into(), "summer cool".into()],
    }
}

fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.into(),
        category: "serum".into(),
        price: 90_000.0,
        stock: 3,
        brand: None,
        image_url: None,
        palette_category: String::new(),
        palettes: Vec::new(),
        description: None,
        created_at: None,
        updated_at: None,
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn accepts_a_filled_form() {
    assert_eq!(validate_form(&filled_form()), Ok(()));
}

#[test]
fn requires_at_least_one_palette() {
    let mut form = filled_form();
    form.palettes.clear();
    assert_eq!(
        validate_form(&form),
        Err("Name, category, palettes, price and stock are all required.")
    );
}

#[test]
fn rejects_a_price_that_is_not_a_number() {
    let mut form = filled_form();
    form.price = "about 100k".into();
    assert_eq!(validate_form(&form), Err("The price must be a number."));
}

#[test]
fn rejects_a_negative_price() {
    let mut form = filled_form();
    form.price = "-5".into();
    assert_eq!(validate_form(&form), Err("The price must be a number."));
}

#[test]
fn rejects_a_fractional_stock() {
    let mut form = filled_form();
    form.stock = "3.5".into();
    assert_eq!(
        validate_form(&form),
        Err("The stock must be a whole number.")
    );
}

// ============================================================================
// Payload layout
// ============================================================================

#[test]
fn the_payload_carries_every_scalar_and_each_palette() {
    let payload = form_payload(&filled_form());
    assert_eq!(
        payload.part_names(),
        [
            "name",
            "category",
            "price",
            "stock",
            "palette_category",
            "palettes[]",
            "palettes[]",
        ]
    );
}

#[test]
fn a_description_rides_along_when_present() {
    let mut form = filled_form();
    form.description = "Long-wearing and weightless.".into();
    let payload = form_payload(&form);
    assert!(payload.part_names().contains(&"description"));
}

#[test]
fn a_blank_description_is_left_out() {
    let mut form = filled_form();
    form.description = "   ".into();
    let payload = form_payload(&form);
    assert!(!payload.part_names().contains(&"description"));
}

// ============================================================================
// Edit-mode lookup
// ============================================================================

#[test]
fn finds_the_product_being_edited() {
    let products = [product(1, "Silk Blush"), product(7, "Velvet Matte")];
    let found = find_product(&products, 7);
    assert_eq!(found.map(|product| product.name), Some("Velvet Matte".into()));
}

#[test]
fn an_unknown_id_finds_nothing() {
    let products = [product(1, "Silk Blush")];
    assert_eq!(find_product(&products, 99), None);
}
