//! Core library for Homefit.
//!
//! Homefit authenticates users against a local credential file, stores one
//! set of housing preferences per user, and filters three listing datasets
//! (apartments, commercial units, houses) down to the rows matching those
//! preferences.
//!
//! - `auth`: password hashing, registration/login, session context
//! - `store`: CSV-backed credential and preference tables
//! - `listings`: dataset loading and the listing filter
//! - `app`: the facade a front end talks to

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod listings;
pub mod models;
pub mod store;
pub mod utils;

pub use app::App;
pub use auth::{Authenticator, PasswordScheme, Session};
pub use config::Config;
pub use error::{HomefitError, Result};
pub use listings::{DatasetKind, FilterOutcome};
pub use models::{Listing, PreferenceInput, PreferenceRecord, UserAccount, UserId};
