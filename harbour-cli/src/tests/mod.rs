//! Shared test harness modules for the Harbour CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]

use super::*;

mod helpers;
mod source_unit;
