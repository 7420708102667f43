//! Rendering menus, preference summaries and listing tables as plain text.

use std::io::Write;

use anyhow::Result;
use homefit_core::models::ListingColumn;
use homefit_core::utils::pad_to_width;
use homefit_core::{DatasetKind, FilterOutcome, PreferenceRecord, Session};

/// Gap between table columns
const COLUMN_GAP: &str = "  ";

fn column_width(column: ListingColumn) -> usize {
    match column {
        ListingColumn::Title => 34,
        ListingColumn::Price => 16,
        ListingColumn::Area => 7,
        ListingColumn::Floor => 5,
        ListingColumn::Rooms => 5,
        ListingColumn::District => 16,
        ListingColumn::Street => 22,
        ListingColumn::Location => 24,
    }
}

pub fn render_logged_out_menu(out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Log in or register ===")?;
    writeln!(out, "  1) Log in")?;
    writeln!(out, "  2) Register")?;
    writeln!(out, "  q) Quit")?;
    Ok(())
}

pub fn render_logged_in_menu(out: &mut dyn Write, session: &Session) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "=== {} (User ID: {}) ===",
        session.login_name().unwrap_or("?"),
        session.user_id().map(|id| id.to_string()).unwrap_or_default()
    )?;
    writeln!(out, "  1) Edit preferences")?;
    writeln!(out, "  2) Apartments")?;
    writeln!(out, "  3) Commercial")?;
    writeln!(out, "  4) Houses")?;
    writeln!(out, "  5) All results")?;
    writeln!(out, "  6) Log out")?;
    writeln!(out, "  q) Quit")?;
    Ok(())
}

pub fn render_preferences(out: &mut dyn Write, prefs: &PreferenceRecord) -> Result<()> {
    writeln!(out, "Current preferences: {}", prefs.summary())?;
    Ok(())
}

/// Print a dataset heading followed by its matches or the empty message.
pub fn render_outcome(out: &mut dyn Write, kind: DatasetKind, outcome: &FilterOutcome) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ({}) ---", kind, outcome.len())?;
    if outcome.is_empty() {
        writeln!(out, "{}", kind.empty_message())?;
        return Ok(());
    }

    let columns = kind.columns();
    let header: Vec<String> = columns
        .iter()
        .map(|c| pad_to_width(c.header(), column_width(*c)))
        .collect();
    writeln!(out, "{}", header.join(COLUMN_GAP).trim_end())?;

    for listing in outcome.listings() {
        let row: Vec<String> = columns
            .iter()
            .map(|c| pad_to_width(&listing.cell(*c), column_width(*c)))
            .collect();
        writeln!(out, "{}", row.join(COLUMN_GAP).trim_end())?;
    }
    Ok(())
}
