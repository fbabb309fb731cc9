//! Data access layer.
//!
//! Pitwall owns no database: every record lives in the remote customer store. This module
//! contains the store abstraction used by services and its GraphQL implementation.

pub mod store;
