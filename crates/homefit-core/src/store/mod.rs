//! CSV-backed record storage.
//!
//! Each store is a single flat table with a header row. Reads load the whole
//! file; writes rewrite it through a temporary file so a crash leaves either
//! the old or the new contents. There is no locking: one local session is
//! assumed.
//!
//! - `CredentialStore`: `users.csv`, append-only
//! - `PreferenceStore`: `preferences.csv`, upsert by user id

pub mod credentials;
pub mod preferences;
pub mod table;

pub use credentials::CredentialStore;
pub use preferences::PreferenceStore;
pub use table::CsvTable;
