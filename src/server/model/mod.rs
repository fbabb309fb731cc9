//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, the store's record
//! and metafield types, and the typed progression model decoded from those metafields.

pub mod app;
pub mod pilot;
pub mod progression;
pub mod store;
pub mod tier;
