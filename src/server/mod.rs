//! Server application core modules.
//!
//! This module contains all server-side functionality for Pitwall: configuration, HTTP
//! routing and controllers, the customer store client, the progression model decoded from
//! metafields, and the services that rank, read and write pilot progression.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
