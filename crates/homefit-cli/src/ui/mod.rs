//! Terminal user interface: prompts and table rendering.
//!
//! - `input`: line and password prompts with validation and defaults
//! - `render`: menus, preference summaries and listing tables

pub mod input;
pub mod render;
