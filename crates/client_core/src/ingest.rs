//! File → embeddable image string. The only suspending operation in the core.

use std::path::PathBuf;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use shared::domain::{EmbeddedImage, OfferId};
use tracing::debug;

use crate::{draft::EditOutcome, error::IngestError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageTarget {
    Banner,
    Offer(OfferId),
}

/// One outstanding image read, tied to the draft it was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub(crate) ticket: u64,
    pub(crate) draft_epoch: u64,
    pub(crate) target: ImageTarget,
}

impl PendingImage {
    pub(crate) fn new(ticket: u64, draft_epoch: u64, target: ImageTarget) -> Self {
        debug!(ticket, image_target = ?target, "image read requested");
        Self {
            ticket,
            draft_epoch,
            target,
        }
    }

    pub fn target(&self) -> &ImageTarget {
        &self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Applied,
    /// The offer was not in the draft when the read finished.
    StaleTarget,
    /// The draft the read was meant for has been discarded or committed.
    DraftGone,
    /// The read failed; the previous image is untouched.
    Failed(String),
}

impl From<EditOutcome> for ImageOutcome {
    fn from(outcome: EditOutcome) -> Self {
        match outcome {
            EditOutcome::Applied => ImageOutcome::Applied,
            EditOutcome::UnknownOffer => ImageOutcome::StaleTarget,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Whatever hands over the bytes the user picked.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn read_blob(&self) -> Result<ImageBlob, IngestError>;
}

#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ImageSource for LocalFileSource {
    async fn read_blob(&self) -> Result<ImageBlob, IngestError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let mime_type = mime_guess::from_path(&self.path)
            .first_raw()
            .map(str::to_string);
        debug!(
            path = %self.path.display(),
            size = bytes.len(),
            mime = mime_type.as_deref().unwrap_or("unknown"),
            "read image file"
        );
        Ok(ImageBlob { mime_type, bytes })
    }
}

pub fn encode_data_uri(blob: &ImageBlob) -> Result<EmbeddedImage, IngestError> {
    let mime_type = blob
        .mime_type
        .as_deref()
        .filter(|mime| mime.starts_with("image/"))
        .ok_or_else(|| {
            IngestError::UnsupportedType(
                blob.mime_type
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        })?;
    if blob.bytes.is_empty() {
        return Err(IngestError::Empty);
    }

    Ok(EmbeddedImage::data_uri(mime_type, &STANDARD.encode(&blob.bytes)))
}

pub async fn ingest_image(source: &dyn ImageSource) -> Result<EmbeddedImage, IngestError> {
    let blob = source.read_blob().await?;
    encode_data_uri(&blob)
}

#[cfg(test)]
#[path = "tests/ingest_tests.rs"]
mod tests;
