//! Catalog data model shared by the store, the client core and the hosts.

pub mod domain;
pub mod error;
