use crate::commands::{CmdMessage, CmdResult, HabitSelector};
use crate::error::Result;
use crate::model::Outcome;
use crate::store::HabitStore;
use chrono::NaiveDate;

use super::helpers::resolve;

pub fn run<S: HabitStore>(
    store: &mut S,
    selector: &HabitSelector,
    outcomes: &[Outcome],
    including_today: bool,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut habit = resolve(store, selector)?;
    habit.mark_missing_days(today, outcomes, including_today)?;
    store.save_habit(&habit)?;

    let mut result = CmdResult::default();
    let message = match outcomes.len() {
        0 => format!("No days were missing for {}", habit.title),
        1 => format!("Backfilled 1 day: {}", habit.title),
        n => format!("Backfilled {} days: {}", n, habit.title),
    };
    result.add_message(CmdMessage::success(message));
    result.affected_habits.push(habit);
    Ok(result)
}
