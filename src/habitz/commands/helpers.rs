use crate::commands::HabitSelector;
use crate::error::{HabitzError, Result};
use crate::model::{Habit, HabitId};
use crate::store::HabitStore;

/// Next free id: one past the largest stored id, 0 for an empty store.
/// Ids of removed habits are never handed out again as long as a larger
/// id still exists.
pub fn next_id<S: HabitStore>(store: &S) -> Result<HabitId> {
    Ok(store
        .list_ids()?
        .into_iter()
        .max()
        .map_or(0, |max| max + 1))
}

/// Case-insensitive exact title match over all stored habits. Exactly one
/// habit must match; duplicates are tolerated in storage but not here.
pub fn find_by_title<S: HabitStore>(store: &S, title: &str) -> Result<Habit> {
    let needle = title.to_lowercase();
    let mut found: Option<Habit> = None;

    for id in store.list_ids()? {
        let habit = store.get_habit(id)?;
        if habit.title.to_lowercase() == needle {
            if found.is_some() {
                return Err(HabitzError::AmbiguousTitle(title.to_string()));
            }
            found = Some(habit);
        }
    }

    found.ok_or_else(|| HabitzError::TitleNotFound(title.to_string()))
}

pub fn resolve<S: HabitStore>(store: &S, selector: &HabitSelector) -> Result<Habit> {
    match selector {
        HabitSelector::Id(id) => store.get_habit(*id),
        HabitSelector::Title(title) => find_by_title(store, title),
    }
}
