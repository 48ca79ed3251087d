//! Storefront presentation core: navigation, owner gate, draft editing and image
//! ingestion, layered so that navigation never learns about drafts.

use std::{sync::Arc, time::Duration};

use shared::domain::{Category, CategoryId, EmbeddedImage, OfferId, Shop, ShopId, View};
use storage::CatalogSource;
use tokio::{sync::broadcast, time::Instant};
use tracing::{debug, info, warn};
use url::Url;

pub mod auth;
pub mod draft;
pub mod error;
pub mod ingest;
pub mod navigation;
pub mod share;

pub use auth::AuthGate;
pub use draft::{DraftSession, EditOutcome};
pub use error::{AuthError, DraftError, IngestError, NavigationError, StorefrontError};
pub use ingest::{
    encode_data_uri, ingest_image, ImageBlob, ImageOutcome, ImageSource, ImageTarget,
    LocalFileSource, PendingImage,
};
pub use navigation::NavigationController;
pub use share::{NoShareSheet, ShareError, ShareOutcome, ShareRequest, ShareTarget};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct StorefrontOptions {
    pub owner_secret: String,
    pub login_error_display: Duration,
    pub share_url: String,
    pub app_title: String,
    pub locality: String,
}

impl Default for StorefrontOptions {
    fn default() -> Self {
        Self {
            owner_secret: "admin123".into(),
            login_error_display: auth::DEFAULT_ERROR_DISPLAY,
            share_url: "https://shopdigital.ar".into(),
            app_title: "shopdigital.ar".into(),
            locality: "Esteban Echeverría".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontEvent {
    ViewChanged(View),
    DraftUpdated,
    Committed(ShopId),
    AuthRejected,
    Unlocked,
    ImageRejected { target: ImageTarget, reason: String },
}

pub struct Storefront {
    catalog: Arc<dyn CatalogSource>,
    options: StorefrontOptions,
    navigation: NavigationController,
    auth: AuthGate,
    draft: Option<DraftSession>,
    next_epoch: u64,
    next_ticket: u64,
    events: broadcast::Sender<StorefrontEvent>,
}

impl Storefront {
    pub fn new(catalog: Arc<dyn CatalogSource>, options: StorefrontOptions) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let auth = AuthGate::new(options.owner_secret.clone(), options.login_error_display);
        Self {
            catalog,
            options,
            navigation: NavigationController::new(),
            auth,
            draft: None,
            next_epoch: 0,
            next_ticket: 0,
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<StorefrontEvent> {
        self.events.subscribe()
    }

    pub fn catalog(&self) -> &dyn CatalogSource {
        self.catalog.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    pub fn view(&self) -> View {
        self.navigation.view()
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.navigation.selected_category()
    }

    /// The committed shop currently shown.
    pub fn selected_shop(&self) -> Option<&Shop> {
        self.navigation.selected_shop()
    }

    /// The working copy, when one exists.
    pub fn draft(&self) -> Option<&Shop> {
        self.draft.as_ref().map(DraftSession::shop)
    }

    pub fn auth(&self) -> &AuthGate {
        &self.auth
    }

    pub fn filtered_shops(&self) -> Vec<Shop> {
        self.navigation.filtered_shops(self.catalog.as_ref())
    }

    pub fn map_url(&self) -> Option<&Url> {
        self.selected_shop().map(|shop| &shop.map_url)
    }

    pub fn select_category(&mut self, category_id: &CategoryId) -> Result<(), StorefrontError> {
        let category = self
            .catalog
            .category(category_id)
            .cloned()
            .ok_or_else(|| StorefrontError::UnknownCategory(category_id.clone()))?;

        self.navigation.select_category(category);
        self.draft = None;
        self.auth.reset();
        self.emit(StorefrontEvent::ViewChanged(self.view()));
        Ok(())
    }

    /// Selecting a shop always starts a fresh draft, even when it is already selected.
    pub fn select_shop(&mut self, shop_id: &ShopId) -> Result<(), StorefrontError> {
        let shop = self
            .catalog
            .shop(shop_id)
            .cloned()
            .ok_or_else(|| StorefrontError::UnknownShop(shop_id.clone()))?;

        self.navigation.select_shop(shop.clone())?;
        self.start_draft(&shop);
        self.auth.reset();
        self.emit(StorefrontEvent::ViewChanged(self.view()));
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<View, StorefrontError> {
        let from = self.view();
        let to = self.navigation.go_back()?;

        match from {
            View::EditPanel => self.restart_draft_from_selected(),
            View::ShopDetail => {
                self.draft = None;
                self.auth.reset();
            }
            View::CategoryList | View::Home => {}
        }

        self.emit(StorefrontEvent::ViewChanged(to));
        Ok(to)
    }

    pub fn open_owner_access(&mut self) -> Result<(), AuthError> {
        if self.view() != View::ShopDetail {
            return Err(AuthError::NotAvailable);
        }
        self.auth.open();
        Ok(())
    }

    pub fn cancel_owner_access(&mut self) {
        self.auth.cancel();
    }

    pub fn set_password_input(&mut self, text: impl Into<String>) {
        self.auth.set_input(text);
    }

    pub fn submit_password(&mut self) -> Result<(), StorefrontError> {
        self.submit_password_at(Instant::now())
    }

    pub fn submit_password_at(&mut self, now: Instant) -> Result<(), StorefrontError> {
        if self.view() != View::ShopDetail {
            return Err(AuthError::NotAvailable.into());
        }

        if let Err(err) = self.auth.submit(now) {
            if err == AuthError::Mismatch {
                self.emit(StorefrontEvent::AuthRejected);
            }
            return Err(err.into());
        }

        self.navigation.enter_edit_panel()?;
        if self.draft.is_none() {
            self.restart_draft_from_selected();
        }
        self.emit(StorefrontEvent::Unlocked);
        self.emit(StorefrontEvent::ViewChanged(self.view()));
        Ok(())
    }

    /// Whether the failed-login signal is still showing.
    pub fn login_error_visible(&self) -> bool {
        self.login_error_visible_at(Instant::now())
    }

    pub fn login_error_visible_at(&self, now: Instant) -> bool {
        self.auth.has_error(now)
    }

    pub fn set_banner_image(&mut self, image: EmbeddedImage) -> Result<(), StorefrontError> {
        self.editing_draft("set_banner_image")?.set_banner_image(image);
        self.emit(StorefrontEvent::DraftUpdated);
        Ok(())
    }

    pub fn set_offer_image(
        &mut self,
        offer_id: &OfferId,
        image: EmbeddedImage,
    ) -> Result<EditOutcome, StorefrontError> {
        let outcome = self
            .editing_draft("set_offer_image")?
            .set_offer_image(offer_id, image);
        self.note_edit(outcome);
        Ok(outcome)
    }

    pub fn set_offer_name(
        &mut self,
        offer_id: &OfferId,
        name: impl Into<String>,
    ) -> Result<EditOutcome, StorefrontError> {
        let outcome = self
            .editing_draft("set_offer_name")?
            .set_offer_name(offer_id, name);
        self.note_edit(outcome);
        Ok(outcome)
    }

    pub fn set_offer_price(
        &mut self,
        offer_id: &OfferId,
        text: &str,
    ) -> Result<EditOutcome, StorefrontError> {
        let outcome = self
            .editing_draft("set_offer_price")?
            .set_offer_price(offer_id, text)?;
        self.note_edit(outcome);
        Ok(outcome)
    }

    /// Folds the whole draft into the selected shop. The catalog is not touched.
    pub fn commit(&mut self) -> Result<(), StorefrontError> {
        let snapshot = self
            .draft
            .as_ref()
            .map(DraftSession::snapshot)
            .ok_or(DraftError::NoActiveDraft)?;
        let shop_id = snapshot.id.clone();

        self.navigation.save(snapshot)?;
        self.restart_draft_from_selected();

        info!(shop = %shop_id, "committed shop edits");
        self.emit(StorefrontEvent::Committed(shop_id));
        self.emit(StorefrontEvent::ViewChanged(self.view()));
        Ok(())
    }

    pub fn request_image(&mut self, target: ImageTarget) -> Result<PendingImage, StorefrontError> {
        let draft_epoch = self.editing_draft("request_image")?.epoch();
        self.next_ticket += 1;
        Ok(PendingImage::new(self.next_ticket, draft_epoch, target))
    }

    pub fn complete_image(
        &mut self,
        pending: PendingImage,
        result: Result<EmbeddedImage, IngestError>,
    ) -> ImageOutcome {
        let Some(draft) = self
            .draft
            .as_mut()
            .filter(|draft| draft.epoch() == pending.draft_epoch)
        else {
            debug!(
                ticket = pending.ticket,
                "image read finished after its draft was dropped"
            );
            return ImageOutcome::DraftGone;
        };

        let image = match result {
            Ok(image) => image,
            Err(err) => {
                let reason = err.to_string();
                warn!(
                    ticket = pending.ticket,
                    image_target = ?pending.target,
                    "image read failed: {reason}"
                );
                self.emit(StorefrontEvent::ImageRejected {
                    target: pending.target,
                    reason: reason.clone(),
                });
                return ImageOutcome::Failed(reason);
            }
        };

        let outcome = draft.apply_image(&pending.target, image);
        self.note_edit(outcome);
        ImageOutcome::from(outcome)
    }

    /// Request, read and apply on the current task.
    pub async fn replace_image(
        &mut self,
        target: ImageTarget,
        source: &dyn ImageSource,
    ) -> Result<ImageOutcome, StorefrontError> {
        let pending = self.request_image(target)?;
        let result = ingest_image(source).await;
        Ok(self.complete_image(pending, result))
    }

    pub fn share_request(&self) -> ShareRequest {
        ShareRequest::for_selection(
            self.selected_shop(),
            &self.options.app_title,
            &self.options.locality,
            &self.options.share_url,
        )
    }

    pub fn share(&self, target: &dyn ShareTarget) -> ShareOutcome {
        share::share_or_copy(target, self.share_request())
    }

    fn editing_draft(
        &mut self,
        action: &'static str,
    ) -> Result<&mut DraftSession, StorefrontError> {
        let from = self.view();
        if from != View::EditPanel {
            return Err(NavigationError::InvalidTransition { action, from }.into());
        }
        self.draft
            .as_mut()
            .ok_or_else(|| DraftError::NoActiveDraft.into())
    }

    fn start_draft(&mut self, shop: &Shop) {
        self.next_epoch += 1;
        self.draft = Some(DraftSession::begin(shop, self.next_epoch));
    }

    fn restart_draft_from_selected(&mut self) {
        match self.navigation.selected_shop().cloned() {
            Some(shop) => self.start_draft(&shop),
            None => self.draft = None,
        }
    }

    fn note_edit(&self, outcome: EditOutcome) {
        if outcome == EditOutcome::Applied {
            self.emit(StorefrontEvent::DraftUpdated);
        }
    }

    fn emit(&self, event: StorefrontEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
