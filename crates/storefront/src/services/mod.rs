//! Business logic services for the storefront.

pub mod listing;

pub use listing::{Listing, ListingService};
