//! Data models for Homefit records.
//!
//! - `UserAccount`: a row of the credential table
//! - `PreferenceRecord`, `PreferenceInput`: saved search criteria and the
//!   form payload they are built from
//! - `Listing`, `ListingColumn`: a row of one of the listing datasets

pub mod account;
pub mod listing;
pub mod preferences;

pub use account::{UserAccount, UserId};
pub use listing::{Listing, ListingColumn};
pub use preferences::{PreferenceInput, PreferenceRecord, DISTRICT_UNSET};
