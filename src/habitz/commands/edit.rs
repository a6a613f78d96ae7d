use crate::commands::{CmdMessage, CmdResult, HabitUpdate};
use crate::error::{HabitzError, Result};
use crate::store::HabitStore;

use super::helpers::resolve;

pub fn run<S: HabitStore>(store: &mut S, updates: &[HabitUpdate]) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    let mut result = CmdResult::default();
    for update in updates {
        if update.title.is_empty() {
            return Err(HabitzError::Validation("title cannot be empty".into()));
        }
        if update.title.contains('\n') {
            return Err(HabitzError::Validation("title must be a single line".into()));
        }

        let mut habit = resolve(store, &update.selector)?;
        habit.title = update.title.clone();
        habit.description = update.description.clone();
        store.save_habit(&habit)?;

        result.add_message(CmdMessage::success(format!(
            "Habit updated (id {}): {}",
            habit.id, habit.title
        )));
        result.affected_habits.push(habit);
    }

    Ok(result)
}
