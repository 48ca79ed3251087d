use shared::{
    domain::{CategoryId, ShopId, View},
    error::PriceError,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("already at home; there is nothing to go back to")]
    AlreadyHome,
    #[error("{action} is not available from {from:?}")]
    InvalidTransition { action: &'static str, from: View },
    #[error("no category is selected")]
    NoCategorySelected,
    #[error("shop '{shop_id}' is not listed under category '{category_id}'")]
    ShopNotInCategory {
        shop_id: ShopId,
        category_id: CategoryId,
    },
    #[error("draft for shop '{draft}' cannot replace selected shop '{selected}'")]
    ShopMismatch { selected: ShopId, draft: ShopId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("owner access is only offered from the shop detail view")]
    NotAvailable,
    #[error("the access dialog is not open")]
    NotOpen,
    #[error("incorrect owner password")]
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("no draft is being edited")]
    NoActiveDraft,
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read image file: {0}")]
    Read(#[from] std::io::Error),
    #[error("unsupported file type '{0}'; only images can be used")]
    UnsupportedType(String),
    #[error("image file is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("unknown category '{0}'")]
    UnknownCategory(CategoryId),
    #[error("unknown shop '{0}'")]
    UnknownShop(ShopId),
}
