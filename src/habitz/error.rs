use crate::model::HabitId;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HabitzError {
    #[error("Habit not found: {0}")]
    HabitNotFound(HabitId),

    #[error("There is no habit titled '{0}' (titles are matched case-insensitively)")]
    TitleNotFound(String),

    #[error("More than one habit is titled '{0}' (titles are matched case-insensitively)")]
    AmbiguousTitle(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Corrupt record for habit {id}: {reason}")]
    CorruptRecord { id: HabitId, reason: String },

    #[error("Series for '{title}' has {entries} entries but the habit only started on {start}")]
    CorruptSeries {
        title: String,
        start: NaiveDate,
        entries: usize,
    },

    #[error("Habit '{title}' does not start until {start}")]
    StartInFuture { title: String, start: NaiveDate },

    #[error("Today is already marked for '{0}'")]
    AlreadyMarked(String),

    #[error("'{title}' has {missing} unmarked earlier days; backfill them before marking today")]
    BackfillRequired { title: String, missing: u32 },

    #[error("Expected {expected} results for '{title}', got {got}")]
    CountMismatch {
        title: String,
        expected: u32,
        got: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, HabitzError>;
