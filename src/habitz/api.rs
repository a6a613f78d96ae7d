//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all habitz operations, regardless of the UI being used.
//!
//! It dispatches to the appropriate command function, normalizes selector
//! strings (a decimal id, otherwise a title search), and evaluates "today"
//! — the local wall-clock date — once per operation. Today is never cached
//! across operations; the command and model layers receive it as an
//! argument, which is also what keeps the date logic testable.
//!
//! The API does no business logic, no I/O formatting and never touches
//! stdout or stderr.

use crate::commands;
use crate::error::Result;
use crate::model::{Habit, Outcome};
use crate::store::HabitStore;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// The main API facade for habitz operations.
///
/// Generic over `HabitStore` to allow different storage backends.
pub struct HabitzApi<S: HabitStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: HabitStore> HabitzApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn create_habit(
        &mut self,
        title: String,
        description: String,
        start_date: Option<NaiveDate>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, description, start_date, today())
    }

    pub fn list_habits(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, today())
    }

    pub fn show_habits<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::show::run(&self.store, &selectors, today())
    }

    pub fn mark_today(&mut self, selector: &str, outcome: Outcome) -> Result<commands::CmdResult> {
        commands::mark::run(&mut self.store, &parse_selector(selector), outcome, today())
    }

    pub fn backfill(
        &mut self,
        selector: &str,
        outcomes: &[Outcome],
        including_today: bool,
    ) -> Result<commands::CmdResult> {
        commands::backfill::run(
            &mut self.store,
            &parse_selector(selector),
            outcomes,
            including_today,
            today(),
        )
    }

    pub fn update_habits(&mut self, updates: &[commands::HabitUpdate]) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, updates)
    }

    pub fn remove_habit(&mut self, selector: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, &parse_selector(selector))
    }

    pub fn record_paths<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::paths::run(&self.store, &selectors)
    }

    /// Resolves a selector to its habit without going through a command.
    /// Used by interactive flows that need the habit before acting on it.
    pub fn find_habit(&self, selector: &str) -> Result<Habit> {
        commands::helpers::resolve(&self.store, &parse_selector(selector))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A numeric input selects by id; anything else is a title search.
pub fn parse_selector(input: &str) -> commands::HabitSelector {
    match input.parse() {
        Ok(id) => commands::HabitSelector::Id(id),
        Err(_) => commands::HabitSelector::Title(input.to_string()),
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<commands::HabitSelector> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, HabitSelector, HabitSummary, HabitUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Standing;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn selector_parsing() {
        assert_eq!(parse_selector("12"), HabitSelector::Id(12));
        assert_eq!(parse_selector("Read"), HabitSelector::Title("Read".into()));
        // A negative number is not a valid id, so it reads as a title.
        assert_eq!(parse_selector("-1"), HabitSelector::Title("-1".into()));
    }

    #[test]
    fn create_mark_list_flow() {
        let mut api = HabitzApi::new(InMemoryStore::new(), PathBuf::from("unused"));

        api.create_habit("Read".into(), "".into(), None).unwrap();
        let listed = api.list_habits().unwrap().listed_habits;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].standing, Standing::TodayPending);

        api.mark_today("Read", Outcome::Good).unwrap();
        let listed = api.list_habits().unwrap().listed_habits;
        assert_eq!(listed[0].standing, Standing::UpToDate);
    }
}
