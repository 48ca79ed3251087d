use super::*;

use shared::domain::ShopId;
use storage::{Catalog, CatalogSource};

struct Refusing;

impl ShareTarget for Refusing {
    fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(ShareError::Failed("dismissed".into()))
    }
}

#[test]
fn invitation_names_the_shop_when_one_is_selected() {
    let catalog = Catalog::seeded().expect("seed catalog");
    let shop = catalog.shop(&ShopId::from("s1")).expect("shop s1");

    let request = ShareRequest::for_selection(
        Some(shop),
        "shopdigital.ar",
        "Esteban Echeverría",
        "https://shopdigital.ar",
    );
    assert_eq!(request.title, shop.name);
    assert_eq!(
        request.text,
        format!("¡Mira el catálogo de {} en Esteban Echeverría!", shop.name)
    );
    assert_eq!(request.url, "https://shopdigital.ar");
}

#[test]
fn invitation_covers_the_directory_without_a_shop() {
    let request =
        ShareRequest::for_selection(None, "shopdigital.ar", "Monte Grande", "https://x.test");
    assert_eq!(request.title, "shopdigital.ar");
    assert_eq!(request.text, "¡Mira los comercios de Monte Grande!");
}

#[test]
fn any_share_failure_offers_the_link() {
    let request = ShareRequest::for_selection(None, "t", "l", "https://x.test");
    assert_eq!(
        share_or_copy(&Refusing, request.clone()),
        ShareOutcome::CopyLink("https://x.test".into())
    );
    assert_eq!(
        share_or_copy(&NoShareSheet, request),
        ShareOutcome::CopyLink("https://x.test".into())
    );
}
