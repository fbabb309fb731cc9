//! Helpers shared across controllers.

pub mod body;
pub mod secret;
