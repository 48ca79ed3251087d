//! Controller layer: typed user actions, UI events, and command orchestration.

pub mod actions;
pub mod events;
pub mod orchestration;
