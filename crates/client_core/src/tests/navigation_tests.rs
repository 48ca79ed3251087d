use super::*;

use storage::Catalog;
use shared::domain::{CategoryId, ShopId};

fn catalog() -> Catalog {
    Catalog::seeded().expect("seed catalog")
}

fn category(catalog: &Catalog, id: &str) -> Category {
    catalog
        .category(&CategoryId::from(id))
        .cloned()
        .expect("category")
}

fn shop(catalog: &Catalog, id: &str) -> Shop {
    catalog.shop(&ShopId::from(id)).cloned().expect("shop")
}

#[test]
fn starts_at_home_without_selections() {
    let nav = NavigationController::new();
    assert_eq!(nav.view(), View::Home);
    assert!(nav.selected_category().is_none());
    assert!(nav.selected_shop().is_none());
}

#[test]
fn select_then_back_twice_returns_to_initial_state() {
    let catalog = catalog();
    let mut nav = NavigationController::new();

    nav.select_category(category(&catalog, "food"));
    nav.select_shop(shop(&catalog, "s1")).expect("select shop");
    assert_eq!(nav.go_back().expect("back to list"), View::CategoryList);
    assert_eq!(nav.go_back().expect("back home"), View::Home);

    assert_eq!(nav, NavigationController::new());
}

#[test]
fn back_from_home_is_rejected_without_changing_state() {
    let mut nav = NavigationController::new();
    assert_eq!(nav.go_back(), Err(NavigationError::AlreadyHome));
    assert_eq!(nav, NavigationController::new());
}

#[test]
fn back_from_detail_keeps_category_and_drops_shop() {
    let catalog = catalog();
    let mut nav = NavigationController::new();
    nav.select_category(category(&catalog, "food"));
    nav.select_shop(shop(&catalog, "s1")).expect("select shop");

    nav.go_back().expect("back");
    assert_eq!(nav.view(), View::CategoryList);
    assert_eq!(
        nav.selected_category().map(|c| c.id.as_str()),
        Some("food")
    );
    assert!(nav.selected_shop().is_none());
}

#[test]
fn selecting_a_shop_requires_a_matching_category() {
    let catalog = catalog();
    let mut nav = NavigationController::new();

    assert!(matches!(
        nav.select_shop(shop(&catalog, "s1")),
        Err(NavigationError::InvalidTransition { from: View::Home, .. })
    ));

    nav.select_category(category(&catalog, "pets"));
    assert!(matches!(
        nav.select_shop(shop(&catalog, "s1")),
        Err(NavigationError::ShopNotInCategory { .. })
    ));
    assert_eq!(nav.view(), View::CategoryList);
    assert!(nav.selected_shop().is_none());
}

#[test]
fn edit_panel_round_trip_follows_the_table() {
    let catalog = catalog();
    let mut nav = NavigationController::new();
    nav.select_category(category(&catalog, "food"));

    assert!(nav.enter_edit_panel().is_err());

    nav.select_shop(shop(&catalog, "s1")).expect("select shop");
    nav.enter_edit_panel().expect("edit");
    assert_eq!(nav.view(), View::EditPanel);
    assert!(nav.select_shop(shop(&catalog, "s2")).is_err());

    assert_eq!(nav.go_back().expect("back"), View::ShopDetail);
    assert_eq!(nav.selected_shop().map(|s| s.id.as_str()), Some("s1"));
}

#[test]
fn save_replaces_the_selected_shop_only_from_edit_panel() {
    let catalog = catalog();
    let mut nav = NavigationController::new();
    nav.select_category(category(&catalog, "food"));
    nav.select_shop(shop(&catalog, "s1")).expect("select shop");

    let mut edited = shop(&catalog, "s1");
    edited.name = "Renamed".into();
    assert!(nav.save(edited.clone()).is_err());

    nav.enter_edit_panel().expect("edit");
    assert!(matches!(
        nav.save(shop(&catalog, "s2")),
        Err(NavigationError::ShopMismatch { .. })
    ));
    nav.save(edited).expect("save");

    assert_eq!(nav.view(), View::ShopDetail);
    assert_eq!(nav.selected_shop().map(|s| s.name.as_str()), Some("Renamed"));
}

#[test]
fn select_category_from_anywhere_clears_the_shop() {
    let catalog = catalog();
    let mut nav = NavigationController::new();
    nav.select_category(category(&catalog, "food"));
    nav.select_shop(shop(&catalog, "s1")).expect("select shop");

    nav.select_category(category(&catalog, "fashion"));
    assert_eq!(nav.view(), View::CategoryList);
    assert!(nav.selected_shop().is_none());
}

#[test]
fn filtered_shops_tracks_the_selected_category() {
    let catalog = catalog();
    let mut nav = NavigationController::new();
    assert!(nav.filtered_shops(&catalog).is_empty());

    nav.select_category(category(&catalog, "food"));
    let food: Vec<String> = nav
        .filtered_shops(&catalog)
        .into_iter()
        .map(|s| s.id.0)
        .collect();
    assert_eq!(food, vec!["s1".to_string(), "s2".to_string()]);

    nav.select_category(category(&catalog, "auto"));
    assert!(nav.filtered_shops(&catalog).is_empty());
}
