use crate::error::{HabitzError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Habit identifiers are small sequential integers, allocated as
/// max-existing-plus-one and never reused after removal.
pub type HabitId = u64;

/// The recorded result for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Good,
    Bad,
    Unknown,
}

impl Outcome {
    /// Single-character wire code used in record files.
    pub fn code(self) -> char {
        match self {
            Outcome::Good => '+',
            Outcome::Bad => '-',
            Outcome::Unknown => '?',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            '+' => Some(Outcome::Good),
            '-' => Some(Outcome::Bad),
            '?' => Some(Outcome::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Good => write!(f, "good"),
            Outcome::Bad => write!(f, "bad"),
            Outcome::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "+" | "good" | "g" => Ok(Outcome::Good),
            "-" | "bad" | "b" => Ok(Outcome::Bad),
            "?" | "unknown" | "u" => Ok(Outcome::Unknown),
            other => Err(format!("unknown result '{}'", other)),
        }
    }
}

/// Where a habit stands relative to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// Every day up to and including today is recorded.
    UpToDate,
    /// Only today's entry is missing.
    TodayPending,
    /// The given number of days before today are unrecorded (today too).
    Behind(u32),
}

/// A tracked daily habit.
///
/// The series holds one [`Outcome`] per consecutive calendar day starting at
/// `start_date`: index 0 is the start date, index k is `start_date + k` days.
/// It is private so that the only way to grow it is through the marking
/// methods, which keep it gap-free and never past today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub description: String,
    start_date: NaiveDate,
    series: Vec<Outcome>,
}

impl Habit {
    /// Builds a habit in memory. Nothing is persisted; callers save
    /// explicitly through a store.
    pub fn new(
        id: HabitId,
        title: String,
        description: String,
        start_date: NaiveDate,
        series: Vec<Outcome>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            start_date,
            series,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn series(&self) -> &[Outcome] {
        &self.series
    }

    /// Number of calendar days with no recorded result, counting up to today
    /// (inclusive or exclusive per `including_today`).
    ///
    /// Fails with `StartInFuture` if today precedes the start date, and with
    /// `CorruptSeries` if the series already runs past today — the latter
    /// cannot happen through this API and indicates damaged data.
    pub fn missing_days(&self, today: NaiveDate, including_today: bool) -> Result<u32> {
        let elapsed = (today - self.start_date).num_days();
        if elapsed < 0 {
            return Err(HabitzError::StartInFuture {
                title: self.title.clone(),
                start: self.start_date,
            });
        }

        let recorded = self.series.len() as i64;
        if recorded > elapsed + 1 {
            return Err(HabitzError::CorruptSeries {
                title: self.title.clone(),
                start: self.start_date,
                entries: self.series.len(),
            });
        }

        if including_today {
            return Ok((elapsed - recorded + 1) as u32);
        }
        if recorded == elapsed + 1 {
            // Even today is recorded.
            return Ok(0);
        }
        Ok((elapsed - recorded) as u32)
    }

    /// Appends today's result. Earlier days must already be recorded;
    /// recording is strictly sequential and gap-free.
    pub fn mark_today(&mut self, today: NaiveDate, outcome: Outcome) -> Result<()> {
        let missing = self.missing_days(today, true)?;
        if missing == 0 {
            return Err(HabitzError::AlreadyMarked(self.title.clone()));
        }
        if missing > 1 {
            return Err(HabitzError::BackfillRequired {
                title: self.title.clone(),
                missing: missing - 1,
            });
        }
        self.series.push(outcome);
        Ok(())
    }

    /// Appends results for every missing day in chronological order
    /// (`outcomes[0]` is the oldest missing day). The count must match the
    /// number of missing days exactly; there are no partial fills.
    pub fn mark_missing_days(
        &mut self,
        today: NaiveDate,
        outcomes: &[Outcome],
        including_today: bool,
    ) -> Result<()> {
        let expected = self.missing_days(today, including_today)?;
        if outcomes.len() != expected as usize {
            return Err(HabitzError::CountMismatch {
                title: self.title.clone(),
                expected,
                got: outcomes.len(),
            });
        }
        self.series.extend_from_slice(outcomes);
        Ok(())
    }

    pub fn is_marked_today(&self, today: NaiveDate) -> Result<bool> {
        Ok(self.missing_days(today, true)? == 0)
    }

    pub fn standing(&self, today: NaiveDate) -> Result<Standing> {
        match self.missing_days(today, true)? {
            0 => Ok(Standing::UpToDate),
            1 => Ok(Standing::TodayPending),
            n => Ok(Standing::Behind(n - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(start: NaiveDate, series: Vec<Outcome>) -> Habit {
        Habit::new(7, "Read".into(), "Some pages.".into(), start, series)
    }

    #[test]
    fn fresh_habit_is_missing_only_today() {
        let h = habit(date(2024, 1, 1), vec![]);
        assert_eq!(h.missing_days(date(2024, 1, 1), true).unwrap(), 1);
        assert_eq!(h.missing_days(date(2024, 1, 1), false).unwrap(), 0);
    }

    #[test]
    fn missing_days_worked_example() {
        // Started Jan 1, evaluated Jan 4, nothing recorded.
        let mut h = habit(date(2024, 1, 1), vec![]);
        let today = date(2024, 1, 4);
        assert_eq!(h.missing_days(today, true).unwrap(), 4);
        assert_eq!(h.missing_days(today, false).unwrap(), 3);

        h.mark_missing_days(today, &[Outcome::Good, Outcome::Good, Outcome::Bad], false)
            .unwrap();
        assert_eq!(h.series(), &[Outcome::Good, Outcome::Good, Outcome::Bad]);
        assert_eq!(h.missing_days(today, true).unwrap(), 1);

        h.mark_today(today, Outcome::Unknown).unwrap();
        assert_eq!(
            h.series(),
            &[Outcome::Good, Outcome::Good, Outcome::Bad, Outcome::Unknown]
        );
        assert!(h.is_marked_today(today).unwrap());
    }

    #[test]
    fn mark_today_twice_fails() {
        let mut h = habit(date(2024, 1, 1), vec![]);
        let today = date(2024, 1, 1);
        h.mark_today(today, Outcome::Good).unwrap();
        assert!(h.is_marked_today(today).unwrap());
        assert!(matches!(
            h.mark_today(today, Outcome::Good),
            Err(HabitzError::AlreadyMarked(_))
        ));
    }

    #[test]
    fn mark_today_with_gap_requires_backfill() {
        let mut h = habit(date(2024, 1, 1), vec![]);
        let err = h.mark_today(date(2024, 1, 3), Outcome::Good).unwrap_err();
        match err {
            HabitzError::BackfillRequired { missing, .. } => assert_eq!(missing, 2),
            other => panic!("unexpected error: {other}"),
        }
        // Nothing was appended.
        assert!(h.series().is_empty());
    }

    #[test]
    fn backfill_count_must_match_exactly() {
        let mut h = habit(date(2024, 1, 1), vec![]);
        let today = date(2024, 1, 4);

        let short = h.mark_missing_days(today, &[Outcome::Good], false);
        assert!(matches!(short, Err(HabitzError::CountMismatch { .. })));

        let long = h.mark_missing_days(today, &[Outcome::Good; 5], true);
        assert!(matches!(long, Err(HabitzError::CountMismatch { .. })));
        assert!(h.series().is_empty());

        h.mark_missing_days(today, &[Outcome::Good; 4], true).unwrap();
        assert_eq!(h.standing(today).unwrap(), Standing::UpToDate);
    }

    #[test]
    fn backfill_of_zero_days_is_a_no_op() {
        let mut h = habit(date(2024, 1, 1), vec![Outcome::Good]);
        h.mark_missing_days(date(2024, 1, 1), &[], true).unwrap();
        assert_eq!(h.series().len(), 1);
    }

    #[test]
    fn start_in_future_is_rejected() {
        let h = habit(date(2024, 6, 1), vec![]);
        assert!(matches!(
            h.missing_days(date(2024, 5, 31), true),
            Err(HabitzError::StartInFuture { .. })
        ));
    }

    #[test]
    fn overlong_series_is_corrupt() {
        let h = habit(date(2024, 1, 1), vec![Outcome::Good; 3]);
        assert!(matches!(
            h.missing_days(date(2024, 1, 1), true),
            Err(HabitzError::CorruptSeries { .. })
        ));
        // The same series is fine once enough days have elapsed.
        assert_eq!(h.missing_days(date(2024, 1, 3), true).unwrap(), 0);
    }

    #[test]
    fn series_never_exceeds_elapsed_days_through_the_api() {
        let mut h = habit(date(2024, 1, 1), vec![]);
        let today = date(2024, 1, 10);
        let elapsed = (today - h.start_date()).num_days() as usize;

        h.mark_missing_days(today, &[Outcome::Bad; 9], false).unwrap();
        h.mark_today(today, Outcome::Good).unwrap();
        assert!(h.series().len() <= elapsed + 1);

        // Every further mutation attempt fails and leaves the series alone.
        assert!(h.mark_today(today, Outcome::Good).is_err());
        assert!(h.mark_missing_days(today, &[Outcome::Good], true).is_err());
        assert_eq!(h.series().len(), elapsed + 1);
    }

    #[test]
    fn standing_tracks_missing_days() {
        let h = habit(date(2024, 1, 1), vec![Outcome::Good]);
        assert_eq!(h.standing(date(2024, 1, 1)).unwrap(), Standing::UpToDate);
        assert_eq!(h.standing(date(2024, 1, 2)).unwrap(), Standing::TodayPending);
        assert_eq!(h.standing(date(2024, 1, 4)).unwrap(), Standing::Behind(2));
    }

    #[test]
    fn outcome_parses_words_and_codes() {
        assert_eq!("good".parse::<Outcome>().unwrap(), Outcome::Good);
        assert_eq!("BAD".parse::<Outcome>().unwrap(), Outcome::Bad);
        assert_eq!("?".parse::<Outcome>().unwrap(), Outcome::Unknown);
        assert!("meh".parse::<Outcome>().is_err());
        assert_eq!(Outcome::from_code('+'), Some(Outcome::Good));
        assert_eq!(Outcome::from_code('x'), None);
    }
}
