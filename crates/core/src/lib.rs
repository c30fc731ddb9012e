//! Vitrine Core - Catalog types and the listing filter engine.
//!
//! This crate provides the pieces shared by every Vitrine component:
//! - `storefront` - JSON listing service used by the product listing page
//! - `cli` - Command-line tool for filtering catalog exports offline
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. The filter engine is a value-in/value-out function
//! that can be called from any thread without coordination.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and price ranges
//! - [`catalog`] - Product summaries, facet options, filter selections, sort keys
//! - [`engine`] - Filtering and sorting of a product collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod engine;
pub mod types;

pub use catalog::{Facet, FacetOptions, FilterSelection, ProductSummary, SortKey};
pub use engine::{apply, apply_refs, matches};
pub use types::*;
