//! HTTP controller endpoints for the Pitwall web API.
//!
//! Controllers check the shared secret and required inputs, call into the services with
//! the store client from `AppState`, and map results onto DTOs. Every handler carries a
//! utoipa annotation for the OpenAPI document.

pub mod health;
pub mod leaderboard;
pub mod metafield;
pub mod profile;
pub mod util;
