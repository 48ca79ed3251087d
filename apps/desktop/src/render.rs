//! Plain-text screens for the terminal host.

use std::fmt::Write as _;

use client_core::Storefront;
use shared::domain::{Shop, View};

pub fn render(store: &Storefront, status: &str, login_error: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "──────── {} ────────", view_title(store));

    match store.view() {
        View::Home => render_home(store, &mut out),
        View::CategoryList => render_category(store, &mut out),
        View::ShopDetail => {
            if let Some(shop) = store.selected_shop() {
                render_detail(shop, &mut out);
            }
            if store.auth().is_open() {
                let _ = writeln!(
                    out,
                    "\n[owner access] enter 'password <text>' then 'login', or 'cancel'"
                );
                if login_error {
                    let _ = writeln!(out, "[owner access] incorrect password");
                }
            }
        }
        View::EditPanel => {
            if let Some(draft) = store.draft() {
                render_edit(draft, &mut out);
            }
        }
    }

    if !status.is_empty() {
        let _ = writeln!(out, "\n> {status}");
    }
    out
}

fn view_title(store: &Storefront) -> String {
    match store.view() {
        View::Home => "Seleccionar categoría".to_string(),
        View::CategoryList => store
            .selected_category()
            .map(|category| category.name.to_uppercase())
            .unwrap_or_default(),
        View::ShopDetail => store
            .selected_shop()
            .map(|shop| shop.name.clone())
            .unwrap_or_default(),
        View::EditPanel => "Autogestión".to_string(),
    }
}

fn render_home(store: &Storefront, out: &mut String) {
    for category in store.categories() {
        let _ = writeln!(out, "  [{}] {} ({})", category.id, category.name, category.icon);
    }
}

fn render_category(store: &Storefront, out: &mut String) {
    let shops = store.filtered_shops();
    if shops.is_empty() {
        let _ = writeln!(out, "  Próximamente novedades en esta categoría");
        return;
    }
    for shop in shops {
        let _ = writeln!(
            out,
            "  [{}] {} ★ {:.1} · {}",
            shop.id, shop.name, shop.rating, shop.address
        );
    }
}

fn render_detail(shop: &Shop, out: &mut String) {
    let _ = writeln!(out, "  {} · ★ {:.1}", shop.specialty, shop.rating);
    let _ = writeln!(out, "  {}", shop.address);
    let _ = writeln!(out, "  banner: {}", shop.banner_image);
    let _ = writeln!(out, "\n  Catálogo");
    for offer in &shop.offers {
        let _ = writeln!(out, "    {:<28} {}", offer.name, offer.price);
    }
    let _ = writeln!(out, "\n  map: {}", shop.map_url);
}

fn render_edit(draft: &Shop, out: &mut String) {
    let _ = writeln!(out, "  banner: {}", draft.banner_image);
    for offer in &draft.offers {
        let _ = writeln!(
            out,
            "  [{}] {:<28} {:>12}  {}",
            offer.id, offer.name, offer.price, offer.image
        );
    }
    let _ = writeln!(out, "\n  'save' to publish, 'back' to discard");
}
