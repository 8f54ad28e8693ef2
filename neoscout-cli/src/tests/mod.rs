//! Shared test harness modules for the neoscout CLI.

use super::*;

mod unit;
