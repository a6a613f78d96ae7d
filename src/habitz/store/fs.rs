use super::HabitStore;
use crate::error::{HabitzError, Result};
use crate::model::{Habit, HabitId};
use crate::record;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based habit storage: one record per habit under `root`, filename is
/// the decimal id. The root directory is created lazily on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: HabitId) -> PathBuf {
        self.root.join(id.to_string())
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HabitzError::Io)?;
        }
        Ok(())
    }
}

impl HabitStore for FileStore {
    fn save_habit(&mut self, habit: &Habit) -> Result<()> {
        self.ensure_root()?;
        let path = self.record_path(habit.id);
        fs::write(path, record::encode(habit)).map_err(HabitzError::Io)?;
        Ok(())
    }

    fn get_habit(&self, id: HabitId) -> Result<Habit> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(HabitzError::HabitNotFound(id));
        }
        let text = fs::read_to_string(path).map_err(HabitzError::Io)?;
        record::decode(id, &text)
    }

    fn list_ids(&self) -> Result<Vec<HabitId>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(HabitzError::Io)? {
            let entry = entry.map_err(HabitzError::Io)?;
            // Stray files (editor swap files, .DS_Store) are not records.
            if let Ok(id) = entry.file_name().to_string_lossy().parse::<HabitId>() {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    fn delete_habit(&mut self, id: HabitId) -> Result<()> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(HabitzError::HabitNotFound(id));
        }
        fs::remove_file(path).map_err(HabitzError::Io)?;
        Ok(())
    }

    fn habit_path(&self, id: HabitId) -> Result<PathBuf> {
        Ok(self.record_path(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn habit(id: HabitId, title: &str) -> Habit {
        Habit::new(
            id,
            title.into(),
            "desc".into(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![Outcome::Good],
        )
    }

    #[test]
    fn save_creates_root_lazily_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("habits");
        let mut store = FileStore::new(root.clone());
        assert!(!root.exists());

        let h = habit(0, "Read");
        store.save_habit(&h).unwrap();
        assert!(root.join("0").exists());
        assert_eq!(store.get_habit(0).unwrap(), h);
    }

    #[test]
    fn save_is_byte_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("habits"));
        let h = habit(4, "Read");

        store.save_habit(&h).unwrap();
        let first = std::fs::read(temp.path().join("habits/4")).unwrap();
        store.save_habit(&h).unwrap();
        let second = std::fs::read(temp.path().join("habits/4")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn get_missing_habit_fails() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("habits"));
        assert!(matches!(
            store.get_habit(12),
            Err(HabitzError::HabitNotFound(12))
        ));
    }

    #[test]
    fn get_corrupt_record_fails() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("habits");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("2"), "just one line, no separator\n").unwrap();

        let store = FileStore::new(root);
        assert!(matches!(
            store.get_habit(2),
            Err(HabitzError::CorruptRecord { id: 2, .. })
        ));
    }

    #[test]
    fn list_ids_sorted_and_ignores_stray_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("habits");
        let mut store = FileStore::new(root.clone());
        for id in [3, 0, 11] {
            store.save_habit(&habit(id, "H")).unwrap();
        }
        std::fs::write(root.join(".DS_Store"), "junk").unwrap();

        assert_eq!(store.list_ids().unwrap(), vec![0, 3, 11]);
    }

    #[test]
    fn list_ids_on_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("habits"));
        assert!(store.list_ids().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_the_record() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("habits"));
        store.save_habit(&habit(1, "Read")).unwrap();

        store.delete_habit(1).unwrap();
        assert!(store.list_ids().unwrap().is_empty());
        assert!(matches!(
            store.delete_habit(1),
            Err(HabitzError::HabitNotFound(1))
        ));
    }
}
