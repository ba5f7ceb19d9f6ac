//! Unit tests for `serve` configuration and argument parsing.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected configuration outcomes"
)]

use super::*;
