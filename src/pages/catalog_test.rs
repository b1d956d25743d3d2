use super::*;

use crate::net::types::PaletteTag;

fn product(id: i64, name: &str, palettes: &[&str]) -> Product {
    Product {
        id,
        name: name.into(),
        category: "lipstick".into(),
        price: 125_000.0,
        stock: 4,
        brand: None,
        image_url: None,
        palette_category: String::new(),
        palettes: palettes
            .iter()
            .map(|name| PaletteTag {
                palette_name: (*name).into(),
            })
            .collect(),
        description: None,
        created_at: None,
        updated_at: None,
    }
}

// ============================================================================
// Palette filter
// ============================================================================

#[test]
fn all_keeps_everything() {
    let products = vec![
        product(1, "Velvet Matte", &["winter clear"]),
        product(2, "Coral Tint", &["spring bright"]),
    ];
    assert_eq!(filter_products(&products, "all"), products);
}

#[test]
fn keeps_only_the_selected_palette() {
    let products = vec![
        product(1, "Velvet Matte", &["winter clear"]),
        product(2, "Coral Tint", &["spring bright"]),
        product(3, "Dual Shade", &["spring bright", "autumn warm"]),
    ];
    let shown = filter_products(&products, "spring bright");
    let names: Vec<&str> = shown.iter().map(|product| product.name.as_str()).collect();
    assert_eq!(names, ["Coral Tint", "Dual Shade"]);
}

#[test]
fn matching_ignores_case() {
    let products = vec![product(1, "Velvet Matte", &["Winter Clear"])];
    assert_eq!(filter_products(&products, "winter clear").len(), 1);
}

#[test]
fn untagged_products_fall_back_to_their_category() {
    let mut legacy = product(1, "Classic Red", &[]);
    legacy.palette_category = "winter clear".into();
    let shown = filter_products(&[legacy], "winter clear");
    assert_eq!(shown.len(), 1);
}

#[test]
fn an_unmatched_palette_yields_nothing() {
    let products = vec![product(1, "Velvet Matte", &["winter clear"])];
    assert!(filter_products(&products, "summer cool").is_empty());
}
