use crate::config::HabitzConfig;
use crate::model::{Habit, HabitId, Standing};
use std::path::PathBuf;

pub mod backfill;
pub mod config;
pub mod create;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod mark;
pub mod paths;
pub mod remove;
pub mod show;

/// A user input naming a habit: a decimal id, or a title to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitSelector {
    Id(HabitId),
    Title(String),
}

impl std::fmt::Display for HabitSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HabitSelector::Id(id) => write!(f, "{}", id),
            HabitSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// A habit together with its derived calendar standing, ready for listing.
#[derive(Debug, Clone)]
pub struct HabitSummary {
    pub habit: Habit,
    pub standing: Standing,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_habits: Vec<Habit>,
    pub listed_habits: Vec<HabitSummary>,
    pub record_paths: Vec<PathBuf>,
    pub config: Option<HabitzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_habits(mut self, habits: Vec<HabitSummary>) -> Self {
        self.listed_habits = habits;
        self
    }

    pub fn with_record_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.record_paths = paths;
        self
    }

    pub fn with_config(mut self, config: HabitzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A title/description replacement for one habit.
#[derive(Debug, Clone)]
pub struct HabitUpdate {
    pub selector: HabitSelector,
    pub title: String,
    pub description: String,
}

impl HabitUpdate {
    pub fn new(selector: HabitSelector, title: String, description: String) -> Self {
        Self {
            selector,
            title,
            description,
        }
    }
}
