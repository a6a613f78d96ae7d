use crate::commands::{CmdResult, HabitSelector, HabitSummary};
use crate::error::Result;
use crate::store::HabitStore;
use chrono::NaiveDate;

use super::helpers::resolve;

pub fn run<S: HabitStore>(
    store: &S,
    selectors: &[HabitSelector],
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let habit = resolve(store, selector)?;
        let standing = habit.standing(today)?;
        listed.push(HabitSummary { habit, standing });
    }
    Ok(CmdResult::default().with_listed_habits(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitzError;
    use crate::store::memory::fixtures::StoreFixture;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shows_selected_habits() {
        let fixture = StoreFixture::new()
            .with_fresh_habit("Read", date(2024, 1, 1))
            .with_fresh_habit("Run", date(2024, 1, 1));

        let result = run(
            &fixture.store,
            &[HabitSelector::Title("run".into()), HabitSelector::Id(0)],
            date(2024, 1, 1),
        )
        .unwrap();

        assert_eq!(result.listed_habits.len(), 2);
        assert_eq!(result.listed_habits[0].habit.title, "Run");
        assert_eq!(result.listed_habits[1].habit.title, "Read");
    }

    #[test]
    fn unknown_selector_fails() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            run(&fixture.store, &[HabitSelector::Id(9)], date(2024, 1, 1)),
            Err(HabitzError::HabitNotFound(9))
        ));
    }
}
