//! Service tests running against the real store client and a mock store.

mod leaderboard;
mod metafield;

use pitwall_test_utils::prelude::*;

use crate::util::TestContextExt;
