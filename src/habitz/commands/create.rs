use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{HabitzError, Result};
use crate::model::Habit;
use crate::store::HabitStore;
use chrono::NaiveDate;

pub fn run<S: HabitStore>(
    store: &mut S,
    title: String,
    description: String,
    start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<CmdResult> {
    if title.is_empty() {
        return Err(HabitzError::Validation("title cannot be empty".into()));
    }
    if title.contains('\n') {
        // The record format stores the title on a single line.
        return Err(HabitzError::Validation("title must be a single line".into()));
    }

    let id = helpers::next_id(store)?;
    let habit = Habit::new(
        id,
        title,
        description,
        start_date.unwrap_or(today),
        Vec::new(),
    );
    store.save_habit(&habit)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Habit created (id {}): {}",
        habit.id, habit.title
    )));
    result.affected_habits.push(habit);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn creates_with_sequential_ids() {
        let mut store = InMemoryStore::new();
        let today = date(2024, 1, 1);
        for (i, title) in ["A", "B", "C"].iter().enumerate() {
            let result = run(&mut store, title.to_string(), "".into(), None, today).unwrap();
            assert_eq!(result.affected_habits[0].id, i as u64);
        }
        assert_eq!(store.list_ids().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn id_gaps_are_not_refilled() {
        let mut store = InMemoryStore::new();
        let today = date(2024, 1, 1);
        for title in ["A", "B", "C"] {
            run(&mut store, title.into(), "".into(), None, today).unwrap();
        }
        store.delete_habit(1).unwrap();

        let result = run(&mut store, "D".into(), "".into(), None, today).unwrap();
        assert_eq!(result.affected_habits[0].id, 3);
    }

    #[test]
    fn start_date_defaults_to_today() {
        let mut store = InMemoryStore::new();
        let today = date(2024, 3, 7);
        run(&mut store, "Read".into(), "".into(), None, today).unwrap();
        assert_eq!(store.get_habit(0).unwrap().start_date(), today);
    }

    #[test]
    fn explicit_start_date_is_kept() {
        let mut store = InMemoryStore::new();
        let start = date(2024, 1, 1);
        run(&mut store, "Read".into(), "".into(), Some(start), date(2024, 3, 7)).unwrap();
        assert_eq!(store.get_habit(0).unwrap().start_date(), start);
    }

    #[test]
    fn new_habit_has_empty_series() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Read".into(), "".into(), None, date(2024, 1, 1)).unwrap();
        assert!(store.get_habit(0).unwrap().series().is_empty());
    }

    #[test]
    fn rejects_empty_and_multiline_titles() {
        let mut store = InMemoryStore::new();
        let today = date(2024, 1, 1);
        assert!(matches!(
            run(&mut store, "".into(), "".into(), None, today),
            Err(HabitzError::Validation(_))
        ));
        assert!(matches!(
            run(&mut store, "two\nlines".into(), "".into(), None, today),
            Err(HabitzError::Validation(_))
        ));
        assert!(store.list_ids().unwrap().is_empty());
    }

    #[test]
    fn duplicate_titles_are_allowed_at_creation() {
        let mut store = InMemoryStore::new();
        let today = date(2024, 1, 1);
        run(&mut store, "Read".into(), "".into(), None, today).unwrap();
        run(&mut store, "read".into(), "".into(), None, today).unwrap();
        assert_eq!(store.list_ids().unwrap().len(), 2);
    }
}
