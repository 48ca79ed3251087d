use shared::domain::{EmbeddedImage, Offer, OfferId, Price, Shop};
use tracing::{debug, warn};

use crate::{error::DraftError, ingest::ImageTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The offer id is no longer in the draft; nothing changed.
    UnknownOffer,
}

/// Working copy of one shop. Owns its data outright; edits are invisible to the
/// committed shop until the facade commits a snapshot.
#[derive(Debug, Clone)]
pub struct DraftSession {
    epoch: u64,
    shop: Shop,
}

impl DraftSession {
    pub fn begin(shop: &Shop, epoch: u64) -> Self {
        debug!(shop = %shop.id, epoch, "draft started");
        Self {
            epoch,
            shop: shop.clone(),
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn snapshot(&self) -> Shop {
        self.shop.clone()
    }

    pub fn set_banner_image(&mut self, image: EmbeddedImage) {
        self.shop.banner_image = image;
    }

    pub fn set_offer_image(&mut self, offer_id: &OfferId, image: EmbeddedImage) -> EditOutcome {
        self.edit_offer(offer_id, |offer| offer.image = image)
    }

    pub fn set_offer_name(&mut self, offer_id: &OfferId, name: impl Into<String>) -> EditOutcome {
        let name = name.into();
        self.edit_offer(offer_id, |offer| offer.name = name)
    }

    pub fn apply_image(&mut self, target: &ImageTarget, image: EmbeddedImage) -> EditOutcome {
        match target {
            ImageTarget::Banner => {
                self.set_banner_image(image);
                EditOutcome::Applied
            }
            ImageTarget::Offer(offer_id) => self.set_offer_image(offer_id, image),
        }
    }

    /// Rejects anything that is not a non-negative number and keeps the previous price.
    pub fn set_offer_price(
        &mut self,
        offer_id: &OfferId,
        text: &str,
    ) -> Result<EditOutcome, DraftError> {
        let price = Price::parse(text).inspect_err(|err| {
            warn!(offer = %offer_id, input = text, "rejected price edit: {err}");
        })?;
        Ok(self.edit_offer(offer_id, |offer| offer.price = price))
    }

    fn edit_offer(
        &mut self,
        offer_id: &OfferId,
        apply: impl FnOnce(&mut Offer),
    ) -> EditOutcome {
        match self.shop.offer_mut(offer_id) {
            Some(offer) => {
                apply(offer);
                EditOutcome::Applied
            }
            None => {
                debug!(shop = %self.shop.id, offer = %offer_id, "ignoring edit for unknown offer");
                EditOutcome::UnknownOffer
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
