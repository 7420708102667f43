use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::models::{PreferenceRecord, UserId};
use crate::store::CsvTable;

/// Preference table, at most one row per user id.
pub struct PreferenceStore {
    table: CsvTable<PreferenceRecord>,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: CsvTable::new(path, &PreferenceRecord::HEADERS),
        }
    }

    /// Replace any existing record for `record.user_id` with `record`.
    ///
    /// The new row goes to the end of the table; other rows keep their order.
    pub fn save(&self, record: PreferenceRecord) -> Result<()> {
        let mut records = self.table.load()?;
        let before = records.len();
        records.retain(|r| r.user_id != record.user_id);
        let replaced = before - records.len();

        let user_id = record.user_id;
        records.push(record);
        self.table.save(&records)?;

        debug!(user_id, replaced, "Saved preferences");
        Ok(())
    }

    pub fn get(&self, user_id: UserId) -> Result<Option<PreferenceRecord>> {
        Ok(self
            .table
            .load()?
            .into_iter()
            .find(|r| r.user_id == user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DISTRICT_UNSET;
    use tempfile::TempDir;

    fn record(user_id: UserId, rooms: i32) -> PreferenceRecord {
        PreferenceRecord {
            user_id,
            income: 50_000.0,
            preferred_floor: 4,
            rooms,
            district: DISTRICT_UNSET.to_string(),
            min_area: 50.0,
            max_area: 100.0,
        }
    }

    fn store(dir: &TempDir) -> PreferenceStore {
        PreferenceStore::new(dir.path().join("preferences.csv"))
    }

    /// Every row on disk, bypassing the per-user lookup.
    fn rows_on_disk(dir: &TempDir) -> Vec<PreferenceRecord> {
        CsvTable::new(dir.path().join("preferences.csv"), &PreferenceRecord::HEADERS)
            .load()
            .unwrap()
    }

    #[test]
    fn test_get_before_save_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).get(1).unwrap(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(record(1, 2)).unwrap();
        store.save(record(1, 3)).unwrap();

        let records = rows_on_disk(&dir);
        assert_eq!(records.iter().filter(|r| r.user_id == 1).count(), 1);
        assert_eq!(store.get(1).unwrap(), Some(record(1, 3)));
    }

    #[test]
    fn test_upsert_leaves_other_users_alone() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(record(1, 2)).unwrap();
        store.save(record(2, 4)).unwrap();
        store.save(record(1, 5)).unwrap();

        assert_eq!(store.get(2).unwrap(), Some(record(2, 4)));
        assert_eq!(store.get(1).unwrap(), Some(record(1, 5)));
        assert_eq!(rows_on_disk(&dir).len(), 2);
    }

    #[test]
    fn test_reads_rows_written_with_integer_income() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("preferences.csv"),
            "UserID,Income,PreferredFloor,Rooms,District,MinArea,MaxArea\n3,50000,4,2,NA,50.0,100.0\n",
        )
        .unwrap();
        assert_eq!(store(&dir).get(3).unwrap(), Some(record(3, 2)));
    }
}
