use super::HabitStore;
use crate::error::{HabitzError, Result};
use crate::model::{Habit, HabitId};
use crate::record;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development. Does NOT persist data.
///
/// Records are held as encoded text, not model objects, so every get/save
/// goes through the codec just as it does against the filesystem.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<HabitId, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HabitStore for InMemoryStore {
    fn save_habit(&mut self, habit: &Habit) -> Result<()> {
        self.records.insert(habit.id, record::encode(habit));
        Ok(())
    }

    fn get_habit(&self, id: HabitId) -> Result<Habit> {
        let text = self
            .records
            .get(&id)
            .ok_or(HabitzError::HabitNotFound(id))?;
        record::decode(id, text)
    }

    fn list_ids(&self) -> Result<Vec<HabitId>> {
        let mut ids: Vec<HabitId> = self.records.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn delete_habit(&mut self, id: HabitId) -> Result<()> {
        if self.records.remove(&id).is_none() {
            return Err(HabitzError::HabitNotFound(id));
        }
        Ok(())
    }

    fn habit_path(&self, _id: HabitId) -> Result<PathBuf> {
        Err(HabitzError::Store(
            "in-memory store has no record files".to_string(),
        ))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Outcome;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: HabitId,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 0,
            }
        }

        pub fn with_habit(mut self, title: &str, start: NaiveDate, series: Vec<Outcome>) -> Self {
            let habit = Habit::new(
                self.next_id,
                title.to_string(),
                format!("Description for {}", title),
                start,
                series,
            );
            self.store.save_habit(&habit).unwrap();
            self.next_id += 1;
            self
        }

        pub fn with_fresh_habit(self, title: &str, start: NaiveDate) -> Self {
            self.with_habit(title, start, Vec::new())
        }
    }
}
