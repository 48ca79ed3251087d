//! Owner access gate.
//!
//! This is a presentation-level confirmation step, not a security boundary: the
//! secret is a single shared value compared in process, with no lockout and no
//! rate limit. Anything needing real authorization is out of its reach.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::error::AuthError;

pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct AuthGate {
    secret: String,
    error_display: Duration,
    modal_open: bool,
    input: String,
    error_until: Option<Instant>,
}

impl AuthGate {
    pub fn new(secret: impl Into<String>, error_display: Duration) -> Self {
        Self {
            secret: secret.into(),
            error_display,
            modal_open: false,
            input: String::new(),
            error_until: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn open(&mut self) {
        self.modal_open = true;
    }

    /// Closes the dialog without attempting. The typed value is kept, as the dialog
    /// only hides.
    pub fn cancel(&mut self) {
        self.modal_open = false;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn submit(&mut self, now: Instant) -> Result<(), AuthError> {
        if !self.modal_open {
            return Err(AuthError::NotOpen);
        }

        if self.input == self.secret {
            self.modal_open = false;
            self.input.clear();
            self.error_until = None;
            info!("owner access granted");
            Ok(())
        } else {
            self.error_until = Some(now + self.error_display);
            warn!(
                display_ms = self.error_display.as_millis() as u64,
                "owner access rejected"
            );
            Err(AuthError::Mismatch)
        }
    }

    /// True while the most recent failed attempt is still being signalled.
    pub fn has_error(&self, now: Instant) -> bool {
        self.error_until.is_some_and(|until| now < until)
    }

    /// Hides the dialog and forgets any typed value and pending error.
    pub fn reset(&mut self) {
        self.modal_open = false;
        self.input.clear();
        self.error_until = None;
    }
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
