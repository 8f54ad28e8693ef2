//! Facade crate for the neoscout close-approach engine.
//!
//! This crate re-exports the core domain types so downstream consumers can
//! depend on a single package. The loaders and the command-line interface
//! live in `neoscout-data` and `neoscout-cli` respectively.

#![forbid(unsafe_code)]

pub use neoscout_core::{
    CloseApproach, CloseApproachError, Criterion, Filters, NearEarthObject, NearEarthObjectError,
    NeoDatabase, TIME_FORMAT, query,
};
