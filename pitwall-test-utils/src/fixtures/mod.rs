//! Fixtures for the mock store.
//!
//! - `factory` - GraphQL customer nodes and response payloads
//! - `mockito` - GraphQL endpoints registered on the mock server

pub mod factory;
pub mod mockito;
