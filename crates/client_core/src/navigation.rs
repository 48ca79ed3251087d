//! View state machine and the category → shop selection it carries.
//!
//! | from         | event          | to           |
//! |--------------|----------------|--------------|
//! | Home         | select_category| CategoryList |
//! | CategoryList | select_shop    | ShopDetail   |
//! | CategoryList | go_back        | Home         |
//! | ShopDetail   | go_back        | CategoryList |
//! | ShopDetail   | enter_edit     | EditPanel    |
//! | EditPanel    | go_back        | ShopDetail   |
//! | EditPanel    | save           | ShopDetail   |
//!
//! This layer never sees drafts; the facade owns them.

use shared::domain::{Category, Shop, View};
use storage::CatalogSource;
use tracing::debug;

use crate::error::NavigationError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationController {
    view: View,
    selected_category: Option<Category>,
    selected_shop: Option<Shop>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    pub fn selected_shop(&self) -> Option<&Shop> {
        self.selected_shop.as_ref()
    }

    /// Always succeeds. Any previously selected shop is dropped.
    pub fn select_category(&mut self, category: Category) {
        debug!(from = self.view.label(), category = %category.id, "select category");
        self.selected_category = Some(category);
        self.selected_shop = None;
        self.view = View::CategoryList;
    }

    pub fn select_shop(&mut self, shop: Shop) -> Result<(), NavigationError> {
        if !matches!(self.view, View::CategoryList | View::ShopDetail) {
            return Err(NavigationError::InvalidTransition {
                action: "select_shop",
                from: self.view,
            });
        }
        let category = self
            .selected_category
            .as_ref()
            .ok_or(NavigationError::NoCategorySelected)?;
        if shop.category != category.id {
            return Err(NavigationError::ShopNotInCategory {
                shop_id: shop.id,
                category_id: category.id.clone(),
            });
        }

        debug!(from = self.view.label(), shop = %shop.id, "select shop");
        self.selected_shop = Some(shop);
        self.view = View::ShopDetail;
        Ok(())
    }

    /// Returns the view that is current after the transition.
    pub fn go_back(&mut self) -> Result<View, NavigationError> {
        let next = match self.view {
            View::Home => return Err(NavigationError::AlreadyHome),
            View::CategoryList => {
                self.selected_category = None;
                View::Home
            }
            View::ShopDetail => {
                self.selected_shop = None;
                View::CategoryList
            }
            View::EditPanel => View::ShopDetail,
        };
        debug!(from = self.view.label(), to = next.label(), "go back");
        self.view = next;
        Ok(next)
    }

    pub fn enter_edit_panel(&mut self) -> Result<(), NavigationError> {
        if self.view != View::ShopDetail || self.selected_shop.is_none() {
            return Err(NavigationError::InvalidTransition {
                action: "enter_edit_panel",
                from: self.view,
            });
        }
        self.view = View::EditPanel;
        Ok(())
    }

    /// Replaces the selected shop with a complete snapshot and returns to detail.
    pub fn save(&mut self, shop: Shop) -> Result<(), NavigationError> {
        if self.view != View::EditPanel {
            return Err(NavigationError::InvalidTransition {
                action: "save",
                from: self.view,
            });
        }
        let Some(selected) = self.selected_shop.as_ref() else {
            return Err(NavigationError::InvalidTransition {
                action: "save",
                from: self.view,
            });
        };
        if selected.id != shop.id {
            return Err(NavigationError::ShopMismatch {
                selected: selected.id.clone(),
                draft: shop.id,
            });
        }

        self.selected_shop = Some(shop);
        self.view = View::ShopDetail;
        Ok(())
    }

    /// Shops of the selected category, recomputed from the catalog on every call.
    pub fn filtered_shops(&self, catalog: &dyn CatalogSource) -> Vec<Shop> {
        match &self.selected_category {
            Some(category) => catalog.filtered_shops(&category.id),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
