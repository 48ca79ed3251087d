//! Backend worker: off-UI-thread work requested by the controller.

pub mod commands;
pub mod runtime;
