use tracing::debug;

use crate::listings::DatasetKind;
use crate::models::{Listing, PreferenceRecord};

/// The budget is this multiple of the monthly income.
pub const INCOME_MULTIPLIER: f64 = 100.0;

/// Accepted distance in floors from the preferred floor.
pub const FLOOR_TOLERANCE: f64 = 1.0;

/// Result of filtering a dataset. `Empty` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Matches(Vec<Listing>),
    Empty,
}

impl FilterOutcome {
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        if listings.is_empty() {
            FilterOutcome::Empty
        } else {
            FilterOutcome::Matches(listings)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FilterOutcome::Matches(listings) => listings.len(),
            FilterOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::Empty)
    }

    pub fn listings(&self) -> &[Listing] {
        match self {
            FilterOutcome::Matches(listings) => listings,
            FilterOutcome::Empty => &[],
        }
    }
}

/// Predicate used for commercial and house listings.
///
/// Rooms must match exactly, area must fall in `[min_area, max_area]`, price
/// must fit `income * INCOME_MULTIPLIER`, and the floor must be within
/// `FLOOR_TOLERANCE` of the preferred one. Missing cells never match.
pub fn matches_generic(listing: &Listing, prefs: &PreferenceRecord) -> bool {
    let rooms = listing.rooms.is_some_and(|r| r == f64::from(prefs.rooms));
    let area = listing
        .area
        .is_some_and(|a| a >= prefs.min_area && a <= prefs.max_area);
    let price = listing
        .price
        .is_some_and(|p| p <= prefs.income * INCOME_MULTIPLIER);
    let floor = listing
        .floor
        .is_some_and(|f| (f - f64::from(prefs.preferred_floor)).abs() <= FLOOR_TOLERANCE);
    rooms && area && price && floor
}

/// Predicate used for apartment listings: the generic criteria plus an exact
/// `District` match.
///
/// Preferences saved from the form carry the `"NA"` district, so this only
/// matches apartments whose district is literally `"NA"`. Kept as its own
/// predicate until it is decided whether the district form field or this
/// check is the one to change.
pub fn matches_apartment(listing: &Listing, prefs: &PreferenceRecord) -> bool {
    listing.district.as_deref() == Some(prefs.district.as_str()) && matches_generic(listing, prefs)
}

/// Keep the listings of `kind` matching `prefs`, preserving input order.
pub fn filter_listings(
    kind: DatasetKind,
    listings: &[Listing],
    prefs: &PreferenceRecord,
) -> FilterOutcome {
    let predicate: fn(&Listing, &PreferenceRecord) -> bool = match kind {
        DatasetKind::Apartments => matches_apartment,
        DatasetKind::Commercial | DatasetKind::Houses => matches_generic,
    };

    let matched: Vec<Listing> = listings
        .iter()
        .filter(|&l| predicate(l, prefs))
        .cloned()
        .collect();
    debug!(dataset = %kind, total = listings.len(), matched = matched.len(), "Filtered listings");
    FilterOutcome::from_listings(matched)
}
