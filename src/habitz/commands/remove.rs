use crate::commands::{CmdMessage, CmdResult, HabitSelector};
use crate::error::Result;
use crate::store::HabitStore;

use super::helpers::resolve;

/// Deletes the habit's record permanently and unconditionally. Confirmation
/// prompting belongs to the CLI layer, not here.
pub fn run<S: HabitStore>(store: &mut S, selector: &HabitSelector) -> Result<CmdResult> {
    let habit = resolve(store, selector)?;
    store.delete_habit(habit.id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Habit removed: {}",
        habit.title
    )));
    result.affected_habits.push(habit);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitzError;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn removes_by_title() {
        let mut fixture = StoreFixture::new()
            .with_fresh_habit("Read", date(2024, 1, 1))
            .with_fresh_habit("Run", date(2024, 1, 1));

        run(&mut fixture.store, &HabitSelector::Title("read".into())).unwrap();
        assert_eq!(fixture.store.list_ids().unwrap(), vec![1]);
    }

    #[test]
    fn removal_is_permanent() {
        let mut fixture = StoreFixture::new().with_fresh_habit("Read", date(2024, 1, 1));
        run(&mut fixture.store, &HabitSelector::Id(0)).unwrap();
        assert!(matches!(
            fixture.store.get_habit(0),
            Err(HabitzError::HabitNotFound(0))
        ));
    }

    #[test]
    fn missing_habit_fails() {
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            run(&mut fixture.store, &HabitSelector::Id(4)),
            Err(HabitzError::HabitNotFound(4))
        ));
    }
}
