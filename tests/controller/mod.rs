//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state built against a mock store, and their responses
//! checked for status code and body shape.

mod leaderboard;
mod profile;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pitwall_test_utils::prelude::*;

use crate::util::{response_json, TestContextExt};
