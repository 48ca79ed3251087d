//! UI/backend events and error modeling for the desktop controller.

use client_core::{IngestError, PendingImage, StorefrontError};
use shared::domain::EmbeddedImage;

pub enum UiEvent {
    Input(String),
    InputClosed,
    ImageLoaded {
        pending: PendingImage,
        result: Result<EmbeddedImage, IngestError>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Validation,
    Navigation,
    Io,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Input,
    Navigation,
    Login,
    Edit,
    ImageRead,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("password") || lower.contains("owner access") {
            UiErrorCategory::Auth
        } else if lower.contains("invalid")
            || lower.contains("unknown")
            || lower.contains("missing")
            || lower.contains("unsupported")
        {
            UiErrorCategory::Validation
        } else if lower.contains("read")
            || lower.contains("file")
            || lower.contains("disconnected")
            || lower.contains("queue")
        {
            UiErrorCategory::Io
        } else {
            UiErrorCategory::Unknown
        };
        Self::new(category, context, message)
    }

    pub fn from_storefront(context: UiErrorContext, err: &StorefrontError) -> Self {
        let category = match err {
            StorefrontError::Auth(_) => UiErrorCategory::Auth,
            StorefrontError::Navigation(_) => UiErrorCategory::Navigation,
            StorefrontError::Draft(_)
            | StorefrontError::UnknownCategory(_)
            | StorefrontError::UnknownShop(_) => UiErrorCategory::Validation,
        };
        Self::new(category, context, err.to_string())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Auth => "Access",
            UiErrorCategory::Validation => "Input",
            UiErrorCategory::Navigation => "Navigation",
            UiErrorCategory::Io => "File",
            UiErrorCategory::Unknown => "Unexpected",
        }
    }
}
