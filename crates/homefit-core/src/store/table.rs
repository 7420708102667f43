use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;

/// A flat CSV table of `T` rows with a fixed header.
pub struct CsvTable<T> {
    path: PathBuf,
    headers: &'static [&'static str],
    _row: PhantomData<T>,
}

impl<T> CsvTable<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf, headers: &'static [&'static str]) -> Self {
        Self {
            path,
            headers,
            _row: PhantomData,
        }
    }

    /// Load all rows. A missing file is an empty table.
    pub fn load(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Table file missing, treating as empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
        debug!(path = %self.path.display(), rows = rows.len(), "Loaded table");
        Ok(rows)
    }

    /// Replace the table contents with `rows`.
    ///
    /// The header is always written, even for an empty table.
    pub fn save(&self, rows: &[T]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            writer.write_record(self.headers)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), rows = rows.len(), "Saved table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(rename = "Id")]
        id: i64,
        #[serde(rename = "Name")]
        name: String,
    }

    const HEADERS: [&str; 2] = ["Id", "Name"];

    fn rows_path(dir: &TempDir) -> PathBuf {
        dir.path().join("nested").join("rows.csv")
    }

    fn table(dir: &TempDir) -> CsvTable<Row> {
        CsvTable::new(rows_path(dir), &HEADERS)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(table(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_empty_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let table = table(&dir);
        table.save(&[]).unwrap();
        let contents = std::fs::read_to_string(rows_path(&dir)).unwrap();
        assert_eq!(contents, "Id,Name\n");
        assert!(table.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_contents_and_quotes_fields() {
        let dir = TempDir::new().unwrap();
        let table = table(&dir);
        table.save(&[Row { id: 9, name: "old".to_string() }]).unwrap();
        table
            .save(&[
                Row { id: 1, name: "a".to_string() },
                Row { id: 2, name: "b, with comma".to_string() },
            ])
            .unwrap();

        let rows = table.load().unwrap();
        assert_eq!(
            rows,
            vec![
                Row { id: 1, name: "a".to_string() },
                Row { id: 2, name: "b, with comma".to_string() },
            ]
        );
        let contents = std::fs::read_to_string(rows_path(&dir)).unwrap();
        assert!(contents.starts_with("Id,Name\n1,a\n"));
    }
}
