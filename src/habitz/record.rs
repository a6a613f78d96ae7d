//! # Record Format
//!
//! One plain-text file per habit, line oriented:
//!
//! ```text
//! <title>
//! <SEPARATOR>
//! <description, possibly multiple lines>
//! <SEPARATOR>
//! <start date as "YYYY-M-D", no zero padding>
//! <one result code per line; a single empty line if the series is empty>
//! ```
//!
//! The separator is a fixed marker line. Decoding locates the title boundary
//! as the line after the title (which must be the separator) and the
//! description boundary as the *last* separator line in the file — so a
//! description may itself contain separator lines without breaking the
//! format. A naive three-way split would not survive that.

use crate::error::{HabitzError, Result};
use crate::model::{Habit, HabitId, Outcome};
use chrono::{Datelike, NaiveDate};

/// Boundary marker between the title, description and date/series sections.
pub const SEPARATOR: &str = "-#-#-#-#-#-#-#-#-#-#-#-#-#-#-#-#-#-#-#-#-";

/// Formats a date the way records store it: `YYYY-M-D`, no zero padding.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Serializes a habit to record text. Stable for unchanged habits: saving
/// the same in-memory state twice produces identical bytes.
pub fn encode(habit: &Habit) -> String {
    let series: Vec<String> = habit
        .series()
        .iter()
        .map(|outcome| outcome.code().to_string())
        .collect();

    let mut out = String::new();
    out.push_str(&habit.title);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&habit.description);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format_date(habit.start_date()));
    out.push('\n');
    out.push_str(&series.join("\n"));
    out.push('\n');
    out
}

/// Parses record text back into a habit.
pub fn decode(id: HabitId, text: &str) -> Result<Habit> {
    let corrupt = |reason: String| HabitzError::CorruptRecord { id, reason };

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return Err(corrupt("record has fewer than two lines".into()));
    }
    if lines[1] != SEPARATOR {
        return Err(corrupt("no separator after the title line".into()));
    }

    // lines[1] is a separator, so rposition always finds at least that one.
    let second_sep = lines.iter().rposition(|l| *l == SEPARATOR).unwrap_or(1);
    if second_sep == 1 {
        return Err(corrupt("no separator after the description".into()));
    }
    if second_sep == 2 {
        return Err(corrupt("description section is empty".into()));
    }

    let title = lines[0].to_string();
    let description = lines[2..second_sep].join("\n");

    let start_line = lines
        .get(second_sep + 1)
        .ok_or_else(|| corrupt("start date line is missing".into()))?;
    let start_date =
        parse_date(start_line).ok_or_else(|| corrupt(format!("unreadable start date '{}'", start_line)))?;

    let series_lines = &lines[(second_sep + 2).min(lines.len())..];
    let mut series = Vec::with_capacity(series_lines.len());
    // An empty series is stored as a single blank line.
    if !(series_lines.len() == 1 && series_lines[0].is_empty()) {
        for line in series_lines {
            let mut chars = line.chars();
            let outcome = match (chars.next(), chars.next()) {
                (Some(c), None) => Outcome::from_code(c),
                _ => None,
            };
            match outcome {
                Some(outcome) => series.push(outcome),
                None => return Err(corrupt(format!("unreadable result '{}'", line))),
            }
        }
    }

    Ok(Habit::new(id, title, description, start_date, series))
}
