//! Backend commands queued from UI to backend worker.

use std::path::PathBuf;

use client_core::PendingImage;

pub enum BackendCommand {
    ReadImage {
        pending: PendingImage,
        path: PathBuf,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReadImage { .. } => "read_image",
        }
    }
}
