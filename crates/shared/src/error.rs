use thiserror::Error;

use crate::domain::{CategoryId, OfferId, ShopId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("price '{0}' is not a number")]
    NotNumeric(String),
    #[error("price {0} is negative")]
    Negative(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate category id '{0}'")]
    DuplicateCategory(CategoryId),
    #[error("duplicate shop id '{0}'")]
    DuplicateShop(ShopId),
    #[error("shop '{shop_id}' references unknown category '{category_id}'")]
    UnknownCategory {
        shop_id: ShopId,
        category_id: CategoryId,
    },
    #[error("shop '{shop_id}' lists offer '{offer_id}' more than once")]
    DuplicateOffer { shop_id: ShopId, offer_id: OfferId },
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}
