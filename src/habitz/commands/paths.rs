use crate::commands::{CmdResult, HabitSelector};
use crate::error::Result;
use crate::store::HabitStore;

use super::helpers::resolve;

pub fn run<S: HabitStore>(store: &S, selectors: &[HabitSelector]) -> Result<CmdResult> {
    let mut paths = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let habit = resolve(store, selector)?;
        paths.push(store.habit_path(habit.id)?);
    }
    Ok(CmdResult::default().with_record_paths(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Habit;
    use crate::store::fs::FileStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn resolves_record_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("habits");
        let mut store = FileStore::new(root.clone());
        let habit = Habit::new(
            5,
            "Read".into(),
            "".into(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Vec::new(),
        );
        store.save_habit(&habit).unwrap();

        let result = run(&store, &[HabitSelector::Title("read".into())]).unwrap();
        assert_eq!(result.record_paths, vec![root.join("5")]);
    }
}
