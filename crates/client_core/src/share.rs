use shared::domain::Shop;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// Invitation for the shop on screen, or for the whole directory when none is.
    pub fn for_selection(shop: Option<&Shop>, app_title: &str, locality: &str, url: &str) -> Self {
        let (title, text) = match shop {
            Some(shop) => (
                shop.name.clone(),
                format!("¡Mira el catálogo de {} en {locality}!", shop.name),
            ),
            None => (
                app_title.to_string(),
                format!("¡Mira los comercios de {locality}!"),
            ),
        };
        Self {
            title,
            text,
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("native sharing is not available")]
    Unsupported,
    #[error("share failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// No native share happened; the host should present the link for copying.
    CopyLink(String),
}

/// Native share sheet, when the host has one.
pub trait ShareTarget {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Host without a share sheet.
pub struct NoShareSheet;

impl ShareTarget for NoShareSheet {
    fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }
}

pub fn share_or_copy(target: &dyn ShareTarget, request: ShareRequest) -> ShareOutcome {
    match target.share(&request) {
        Ok(()) => ShareOutcome::Shared,
        Err(err) => {
            debug!("falling back to copy link: {err}");
            ShareOutcome::CopyLink(request.url)
        }
    }
}

#[cfg(test)]
#[path = "tests/share_tests.rs"]
mod tests;
