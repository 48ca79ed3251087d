use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;
use shared::{
    domain::{Category, CategoryId, Shop, ShopId},
    error::CatalogError,
};
use tracing::info;

const SEED_CATALOG: &str = include_str!("../data/seed_catalog.json");

/// Read-only catalog collaborator. Nothing at runtime writes through it.
pub trait CatalogSource: Send + Sync {
    fn categories(&self) -> &[Category];

    fn shops(&self) -> &[Shop];

    fn category(&self, category_id: &CategoryId) -> Option<&Category> {
        self.categories()
            .iter()
            .find(|category| &category.id == category_id)
    }

    fn shop(&self, shop_id: &ShopId) -> Option<&Shop> {
        self.shops().iter().find(|shop| &shop.id == shop_id)
    }

    /// Every shop filed under `category_id`, in catalog order. Empty when none match.
    fn filtered_shops(&self, category_id: &CategoryId) -> Vec<Shop> {
        self.shops()
            .iter()
            .filter(|shop| &shop.category == category_id)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    shops: Vec<Shop>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
    #[serde(default)]
    shops: Vec<Shop>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, shops: Vec<Shop>) -> Result<Self, CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(&category.id) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut shop_ids = HashSet::new();
        for shop in &shops {
            if !shop_ids.insert(&shop.id) {
                return Err(CatalogError::DuplicateShop(shop.id.clone()));
            }
            if !category_ids.contains(&shop.category) {
                return Err(CatalogError::UnknownCategory {
                    shop_id: shop.id.clone(),
                    category_id: shop.category.clone(),
                });
            }
            let mut offer_ids = HashSet::new();
            for offer in &shop.offers {
                if !offer_ids.insert(&offer.id) {
                    return Err(CatalogError::DuplicateOffer {
                        shop_id: shop.id.clone(),
                        offer_id: offer.id.clone(),
                    });
                }
            }
        }

        Ok(Self { categories, shops })
    }

    /// Built-in directory used when no catalog file is configured.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json_str(SEED_CATALOG)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::new(document.categories, document.shops)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            shops = catalog.shops.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

impl CatalogSource for Catalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn shops(&self) -> &[Shop] {
        &self.shops
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
