//! Utility functions for formatting values for display.

pub mod format;

pub use format::{format_number, format_price, pad_to_width, truncate_string};
