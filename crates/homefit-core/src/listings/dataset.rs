use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{HomefitError, Result};
use crate::models::{Listing, ListingColumn};

/// Which listing dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Apartments,
    Commercial,
    Houses,
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetKind::Apartments => write!(f, "Apartments"),
            DatasetKind::Commercial => write!(f, "Commercial"),
            DatasetKind::Houses => write!(f, "Houses"),
        }
    }
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Apartments,
        DatasetKind::Commercial,
        DatasetKind::Houses,
    ];

    pub fn default_file_name(&self) -> &'static str {
        match self {
            DatasetKind::Apartments => "krisha_cleaned.csv",
            DatasetKind::Commercial => "business_data_updated.csv",
            DatasetKind::Houses => "doma_data_updated.csv",
        }
    }

    /// Columns shown when listing matches.
    pub fn columns(&self) -> &'static [ListingColumn] {
        match self {
            DatasetKind::Apartments => &[
                ListingColumn::Title,
                ListingColumn::Price,
                ListingColumn::Area,
                ListingColumn::Floor,
                ListingColumn::District,
                ListingColumn::Street,
            ],
            DatasetKind::Commercial | DatasetKind::Houses => &[
                ListingColumn::Title,
                ListingColumn::Price,
                ListingColumn::Area,
                ListingColumn::Floor,
                ListingColumn::Location,
            ],
        }
    }

    /// Message shown when nothing matches.
    pub fn empty_message(&self) -> &'static str {
        match self {
            DatasetKind::Apartments => "No apartments found.",
            DatasetKind::Commercial => "No commercial properties found.",
            DatasetKind::Houses => "No houses found.",
        }
    }
}

/// Reads listing datasets from their configured paths.
pub struct DatasetLoader {
    paths: HashMap<DatasetKind, PathBuf>,
}

impl DatasetLoader {
    pub fn new(paths: HashMap<DatasetKind, PathBuf>) -> Self {
        Self { paths }
    }

    /// Load every row of a dataset, in file order.
    pub fn load(&self, kind: DatasetKind) -> Result<Vec<Listing>> {
        let path = self
            .paths
            .get(&kind)
            .ok_or_else(|| HomefitError::InvalidInput(format!("no path configured for {}", kind)))?;
        if !path.exists() {
            return Err(HomefitError::DatasetNotFound(path.clone()));
        }

        // Short rows are allowed; their trailing cells read as missing.
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.clone();
        let mut listings = Vec::new();
        for result in reader.records() {
            let mut record = result?;
            while record.len() < headers.len() {
                record.push_field("");
            }
            listings.push(record.deserialize::<Listing>(Some(&headers))?);
        }
        debug!(dataset = %kind, rows = listings.len(), "Loaded dataset");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader(dir: &TempDir) -> DatasetLoader {
        DatasetLoader::new(
            DatasetKind::ALL
                .iter()
                .map(|k| (*k, dir.path().join(k.default_file_name())))
                .collect(),
        )
    }

    #[test]
    fn test_missing_dataset_reports_path() {
        let dir = TempDir::new().unwrap();
        let err = loader(&dir).load(DatasetKind::Houses).unwrap_err();
        match err {
            HomefitError::DatasetNotFound(path) => {
                assert!(path.ends_with("doma_data_updated.csv"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("business_data_updated.csv"),
            "Title,Price,Area,Floor,Location,Rooms\nB,1,30,1,X,1\nA,2,40,2,Y,2\n",
        )
        .unwrap();
        let rows = loader(&dir).load(DatasetKind::Commercial).unwrap();
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn test_short_rows_load_with_missing_cells() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("doma_data_updated.csv"),
            "Title,Price,Area,Floor,Location,Rooms\n\
             Cottage,4000000,55,2,Talgar,2\n\
             Shed,100,30,1,Talgar\n\
             Plot,50\n",
        )
        .unwrap();
        let rows = loader(&dir).load(DatasetKind::Houses).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].title, "Shed");
        assert_eq!(rows[1].location.as_deref(), Some("Talgar"));
        assert_eq!(rows[1].rooms, None);
        assert_eq!(rows[2].price, Some(50.0));
        assert_eq!(rows[2].area, None);
        assert_eq!(rows[2].location, None);
    }

    #[test]
    fn test_invalid_utf8_is_a_csv_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("krisha_cleaned.csv"),
            b"Title,Price\n\xff\xfe,1\n".as_slice(),
        )
        .unwrap();
        let err = loader(&dir).load(DatasetKind::Apartments).unwrap_err();
        assert!(matches!(err, HomefitError::Csv(_)));
    }

    #[test]
    fn test_apartment_columns_include_district_and_street() {
        let cols = DatasetKind::Apartments.columns();
        assert!(cols.contains(&ListingColumn::District));
        assert!(cols.contains(&ListingColumn::Street));
        assert!(!DatasetKind::Houses.columns().contains(&ListingColumn::District));
        assert!(DatasetKind::Commercial.columns().contains(&ListingColumn::Location));
    }
}
