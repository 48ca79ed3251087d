//! Terminal app shell: owns the storefront and applies every event on one thread.

use std::path::PathBuf;

use client_core::{
    ImageOutcome, ImageTarget, NoShareSheet, ShareOutcome, Storefront, StorefrontError,
};
use crossbeam_channel::Sender;
use shared::domain::View;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    actions::{parse_action, UserAction, HELP},
    events::{UiError, UiErrorContext, UiEvent},
    orchestration::dispatch_backend_command,
};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct DesktopApp {
    store: Storefront,
    cmd_tx: Sender<BackendCommand>,
    status: String,
    login_error_shown: bool,
}

impl DesktopApp {
    pub fn new(store: Storefront, cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            store,
            cmd_tx,
            status: String::new(),
            login_error_shown: false,
        }
    }

    pub fn store(&self) -> &Storefront {
        &self.store
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn screen(&self) -> String {
        render::render(&self.store, &self.status, self.login_error_shown)
    }

    pub fn handle_event(&mut self, event: UiEvent) -> Flow {
        match event {
            UiEvent::Input(line) => match parse_action(&line) {
                Ok(Some(action)) => match self.apply_action(action) {
                    Ok(flow) => return flow,
                    Err(err) => self.show_error(&err),
                },
                Ok(None) => {}
                Err(err) => self.show_error(&UiError::from_message(
                    UiErrorContext::Input,
                    err.to_string(),
                )),
            },
            UiEvent::InputClosed => return Flow::Exit,
            UiEvent::ImageLoaded { pending, result } => {
                let target = pending.target().clone();
                self.status = match self.store.complete_image(pending, result) {
                    ImageOutcome::Applied => {
                        format!("{} image updated in draft", target_label(&target))
                    }
                    ImageOutcome::StaleTarget => {
                        format!("{} no longer exists; image ignored", target_label(&target))
                    }
                    ImageOutcome::DraftGone => {
                        "image arrived after the draft was closed; ignored".to_string()
                    }
                    ImageOutcome::Failed(reason) => format!("File error: {reason}"),
                };
            }
            UiEvent::Error(err) => self.show_error(&err),
        }
        Flow::Continue
    }

    pub fn apply_action(&mut self, action: UserAction) -> Result<Flow, UiError> {
        self.status.clear();
        match action {
            UserAction::Home | UserAction::Show => {}
            UserAction::Help => self.status = HELP.to_string(),
            UserAction::Quit => return Ok(Flow::Exit),
            UserAction::Category(category_id) => self
                .store
                .select_category(&category_id)
                .map_err(|err| UiError::from_storefront(UiErrorContext::Navigation, &err))?,
            UserAction::Shop(shop_id) => self
                .store
                .select_shop(&shop_id)
                .map_err(|err| UiError::from_storefront(UiErrorContext::Navigation, &err))?,
            UserAction::Back => {
                let from = self.store.view();
                self.store
                    .go_back()
                    .map_err(|err| UiError::from_storefront(UiErrorContext::Navigation, &err))?;
                if from == View::EditPanel {
                    self.status = "unsaved changes discarded".to_string();
                }
            }
            UserAction::Lock => self.store.open_owner_access().map_err(|err| {
                UiError::from_storefront(UiErrorContext::Login, &StorefrontError::from(err))
            })?,
            UserAction::Password(text) => self.store.set_password_input(text),
            UserAction::Cancel => self.store.cancel_owner_access(),
            UserAction::Login => {
                let result = self.store.submit_password();
                self.login_error_shown = self.store.login_error_visible();
                result.map_err(|err| UiError::from_storefront(UiErrorContext::Login, &err))?;
            }
            UserAction::Banner(path) => self.request_image(ImageTarget::Banner, path)?,
            UserAction::OfferImage(offer_id, path) => {
                self.request_image(ImageTarget::Offer(offer_id), path)?
            }
            UserAction::OfferName(offer_id, name) => {
                self.store
                    .set_offer_name(&offer_id, name)
                    .map_err(|err| UiError::from_storefront(UiErrorContext::Edit, &err))?;
            }
            UserAction::OfferPrice(offer_id, text) => {
                self.store
                    .set_offer_price(&offer_id, &text)
                    .map_err(|err| UiError::from_storefront(UiErrorContext::Edit, &err))?;
            }
            UserAction::Save => {
                self.store
                    .commit()
                    .map_err(|err| UiError::from_storefront(UiErrorContext::Edit, &err))?;
                self.status = "changes saved".to_string();
            }
            UserAction::Share => {
                self.status = match self.store.share(&NoShareSheet) {
                    ShareOutcome::Shared => "shared".to_string(),
                    ShareOutcome::CopyLink(url) => format!("link to copy: {url}"),
                };
            }
            UserAction::Map => {
                self.status = match self.store.map_url() {
                    Some(url) => format!("map: {url}"),
                    None => "no shop selected".to_string(),
                };
            }
        }
        Ok(Flow::Continue)
    }

    /// Returns true when something visible changed since the last call.
    pub fn tick(&mut self) -> bool {
        let visible = self.store.login_error_visible();
        if self.login_error_shown && !visible {
            self.login_error_shown = false;
            return true;
        }
        false
    }

    fn request_image(&mut self, target: ImageTarget, path: PathBuf) -> Result<(), UiError> {
        let pending = self
            .store
            .request_image(target)
            .map_err(|err| UiError::from_storefront(UiErrorContext::ImageRead, &err))?;
        let label = target_label(pending.target());
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::ReadImage { pending, path },
            &mut self.status,
        ) {
            self.status = format!("reading {label} image...");
        }
        Ok(())
    }

    fn show_error(&mut self, err: &UiError) {
        tracing::debug!(context = ?err.context(), category = ?err.category(), "{}", err.message());
        self.status = format!("{} error: {}", err.label(), err.message());
    }
}

fn target_label(target: &ImageTarget) -> String {
    match target {
        ImageTarget::Banner => "banner".to_string(),
        ImageTarget::Offer(offer_id) => format!("offer {offer_id}"),
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
