use crate::commands::{CmdResult, HabitSummary};
use crate::error::Result;
use crate::store::HabitStore;
use chrono::NaiveDate;

pub fn run<S: HabitStore>(store: &S, today: NaiveDate) -> Result<CmdResult> {
    let mut listed = Vec::new();
    for id in store.list_ids()? {
        let habit = store.get_habit(id)?;
        let standing = habit.standing(today)?;
        listed.push(HabitSummary { habit, standing });
    }
    Ok(CmdResult::default().with_listed_habits(listed))
}
