//! Core domain model for the neoscout close-approach explorer.
//!
//! The crate links a catalog of near-Earth objects with a catalog of their
//! close approaches to Earth and answers queries over the joined dataset:
//!
//! - [`NearEarthObject`] and [`CloseApproach`] are the two entity types,
//!   constructed once from loader output and immutable thereafter.
//! - [`NeoDatabase`] owns both collections, indexes NEOs by designation and
//!   by name, and wires up the cross-references between the two catalogs.
//! - [`Filters`] composes independent [`Criterion`] predicates into a single
//!   conjunction, and [`query`] streams the matching approaches lazily.
//!
//! Constructors return `Result` to surface invalid input early; optional
//! fields (name, diameter) never fail and normalise to sentinels instead.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod approach;
mod database;
mod filter;
mod neo;
mod query;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use approach::{CloseApproach, CloseApproachError, TIME_FORMAT};
pub use database::NeoDatabase;
pub use filter::{Criterion, Filters};
pub use neo::{NearEarthObject, NearEarthObjectError};
pub use query::query;
