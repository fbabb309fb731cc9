//! Service layer for business logic.
//!
//! Services decode store records into the progression model and apply metafield writes.
//! Each service borrows the store and configuration for the duration of one request; none
//! keeps state between requests, so every read recomputes from the store's current data.

pub mod leaderboard;
pub mod metafield;
pub mod profile;
