//! Listing datasets and the preference filter.
//!
//! Three read-only CSV datasets are supported (apartments, commercial units,
//! houses). `DatasetLoader` reads them; `filter` keeps the rows a saved
//! preference record matches.

pub mod dataset;
pub mod filter;

pub use dataset::{DatasetKind, DatasetLoader};
pub use filter::{
    filter_listings, matches_apartment, matches_generic, FilterOutcome, FLOOR_TOLERANCE,
    INCOME_MULTIPLIER,
};
