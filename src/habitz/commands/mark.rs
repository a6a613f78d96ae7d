use crate::commands::{CmdMessage, CmdResult, HabitSelector};
use crate::error::Result;
use crate::model::Outcome;
use crate::store::HabitStore;
use chrono::NaiveDate;

use super::helpers::resolve;

pub fn run<S: HabitStore>(
    store: &mut S,
    selector: &HabitSelector,
    outcome: Outcome,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut habit = resolve(store, selector)?;
    habit.mark_today(today, outcome)?;
    store.save_habit(&habit)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Marked {} for today: {}",
        outcome, habit.title
    )));
    result.affected_habits.push(habit);
    Ok(result)
}
