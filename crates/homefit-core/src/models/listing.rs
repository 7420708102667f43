use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::{format_number, format_price};

/// One row of a listing dataset.
///
/// The three datasets share the numeric columns; apartments add `District`
/// and `Street`, the others carry `Location`. Columns not listed here are
/// ignored. Numeric cells that are blank or unparseable load as `None` and
/// never satisfy a filter predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Price", default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(rename = "Area", default, deserialize_with = "lenient_number")]
    pub area: Option<f64>,
    #[serde(rename = "Floor", default, deserialize_with = "lenient_number")]
    pub floor: Option<f64>,
    #[serde(rename = "Rooms", default, deserialize_with = "lenient_number")]
    pub rooms: Option<f64>,
    #[serde(rename = "District", default)]
    pub district: Option<String>,
    #[serde(rename = "Street", default)]
    pub street: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan()))
}

/// Displayable listing columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingColumn {
    Title,
    Price,
    Area,
    Floor,
    Rooms,
    District,
    Street,
    Location,
}

impl ListingColumn {
    pub fn header(&self) -> &'static str {
        match self {
            ListingColumn::Title => "Title",
            ListingColumn::Price => "Price",
            ListingColumn::Area => "Area",
            ListingColumn::Floor => "Floor",
            ListingColumn::Rooms => "Rooms",
            ListingColumn::District => "District",
            ListingColumn::Street => "Street",
            ListingColumn::Location => "Location",
        }
    }
}

impl Listing {
    /// Render a single cell for table display.
    pub fn cell(&self, column: ListingColumn) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let number = |value: Option<f64>| value.map(format_number).unwrap_or_default();
        match column {
            ListingColumn::Title => self.title.clone(),
            ListingColumn::Price => self.price.map(format_price).unwrap_or_default(),
            ListingColumn::Area => number(self.area),
            ListingColumn::Floor => number(self.floor),
            ListingColumn::Rooms => number(self.rooms),
            ListingColumn::District => text(&self.district),
            ListingColumn::Street => text(&self.street),
            ListingColumn::Location => text(&self.location),
        }
    }
}
