use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "habitz", bin_name = "habitz", version = get_version())]
#[command(about = "Daily habit tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep records and config under this directory instead of the
    /// platform data dir
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new habit
    #[command(alias = "n")]
    Create {
        /// Title of the habit (optional, opens editor if not provided)
        #[arg(required = false)]
        title: Option<String>,

        /// Description of the habit
        #[arg(required = false)]
        description: Option<String>,

        /// First tracked day as YYYY-M-D (defaults to today)
        #[arg(long, value_name = "DATE")]
        start_date: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List habits and where they stand
    #[command(alias = "ls")]
    List,

    /// Show one or more habits in full, including the series
    #[command(alias = "v")]
    Show {
        /// Habits, by id or title
        #[arg(required = true, num_args = 1..)]
        habits: Vec<String>,
    },

    /// Record today's result for a habit
    #[command(alias = "m")]
    Mark {
        /// Habit, by id or title
        habit: String,

        /// good (+), bad (-) or unknown (?); defaults to the configured
        /// default-result
        result: Option<String>,
    },

    /// Fill in results for missed days, oldest first
    #[command(alias = "bf")]
    Backfill {
        /// Habit, by id or title
        habit: String,

        /// One result per missing day (words, codes, or a run like "++-")
        #[arg(required = true, num_args = 1..)]
        results: Vec<String>,

        /// The last result is for today itself
        #[arg(long)]
        including_today: bool,
    },

    /// Edit a habit's title and description in the editor
    #[command(alias = "e")]
    Edit {
        /// Habit, by id or title
        habit: String,
    },

    /// Remove a habit permanently
    #[command(alias = "rm")]
    Remove {
        /// Habit, by id or title
        habit: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the record file path for one or more habits
    Path {
        /// Habits, by id or title
        #[arg(required = true, num_args = 1..)]
        habits: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. default-result)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
