use serde::{Deserialize, Serialize};

use crate::error::{HomefitError, Result};
use crate::models::UserId;

/// District value stored when no district was chosen.
pub const DISTRICT_UNSET: &str = "NA";

// Bounds of the preference form.
pub const FLOOR_MIN: i32 = 1;
pub const FLOOR_MAX: i32 = 25;
pub const FLOOR_DEFAULT: i32 = 3;
pub const ROOMS_MIN: i32 = 1;
pub const ROOMS_MAX: i32 = 6;
pub const AREA_MIN: f64 = 20.0;
pub const MIN_AREA_DEFAULT: f64 = 50.0;
pub const MAX_AREA_DEFAULT: f64 = 100.0;

/// Saved search criteria, one per user.
///
/// Field order matches the column order of `preferences.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    /// Monthly income; the budget is a fixed multiple of it.
    #[serde(rename = "Income")]
    pub income: f64,
    #[serde(rename = "PreferredFloor")]
    pub preferred_floor: i32,
    #[serde(rename = "Rooms")]
    pub rooms: i32,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "MinArea")]
    pub min_area: f64,
    #[serde(rename = "MaxArea")]
    pub max_area: f64,
}

impl PreferenceRecord {
    pub const HEADERS: [&'static str; 7] = [
        "UserID",
        "Income",
        "PreferredFloor",
        "Rooms",
        "District",
        "MinArea",
        "MaxArea",
    ];

    /// One-line summary for display.
    pub fn summary(&self) -> String {
        format!(
            "{} rooms, {}-{} m², floor {}±1, income {}, district {}",
            self.rooms, self.min_area, self.max_area, self.preferred_floor, self.income, self.district
        )
    }
}

/// What the preference form submits.
///
/// `min_area <= max_area` is expected but not enforced; an inverted range
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceInput {
    pub income: f64,
    pub preferred_floor: i32,
    pub rooms: i32,
    pub min_area: f64,
    pub max_area: f64,
    /// `None` (or blank) stores the `"NA"` sentinel.
    pub district: Option<String>,
}

impl Default for PreferenceInput {
    fn default() -> Self {
        Self {
            income: 0.0,
            preferred_floor: FLOOR_DEFAULT,
            rooms: ROOMS_MIN,
            min_area: MIN_AREA_DEFAULT,
            max_area: MAX_AREA_DEFAULT,
            district: None,
        }
    }
}

impl PreferenceInput {
    pub fn validate(&self) -> Result<()> {
        if !self.income.is_finite() || self.income < 0.0 {
            return Err(HomefitError::InvalidInput(
                "income must be a non-negative number".to_string(),
            ));
        }
        for (name, value) in [("min area", self.min_area), ("max area", self.max_area)] {
            if !value.is_finite() || value < 0.0 {
                return Err(HomefitError::InvalidInput(format!(
                    "{} must be a non-negative number",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn into_record(self, user_id: UserId) -> Result<PreferenceRecord> {
        self.validate()?;
        let district = match self.district {
            Some(d) if !d.trim().is_empty() => d.trim().to_string(),
            _ => DISTRICT_UNSET.to_string(),
        };
        Ok(PreferenceRecord {
            user_id,
            income: self.income,
            preferred_floor: self.preferred_floor,
            rooms: self.rooms,
            district,
            min_area: self.min_area,
            max_area: self.max_area,
        })
    }
}
