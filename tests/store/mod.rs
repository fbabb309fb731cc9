//! Tests for the GraphQL store client against a mock store.

mod fetch_batch;
mod fetch_one;

use pitwall_test_utils::prelude::*;

use crate::util::TestContextExt;
