//! Calendar facade combining duty assignment with next-collection lookup.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{CollectionDay, Family, FamilyRotation, FractionSet, ScheduleError};
use crate::rotation::{DutyAssignment, assign_duties};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A collection day resolved to a full date, with its duty family assigned.
pub struct CalendarEntry {
    /// Full date within the schedule year.
    pub date: NaiveDate,
    /// Fractions collected on this date.
    pub fractions: FractionSet,
    /// Family on duty.
    pub duty: Family,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of looking up the next collection relative to a reference date.
///
/// Both absent outcomes are normal results, not errors, and stay
/// distinguishable so a caller can decide why it is hiding its panel.
pub enum NextCollection {
    /// The earliest entry dated on or after the reference date.
    Upcoming(CalendarEntry),
    /// The reference date lies outside the schedule year.
    OutOfYear,
    /// Every collection in the schedule year has already passed.
    Exhausted,
}

impl NextCollection {
    /// The upcoming entry, if any.
    ///
    /// Collapses [`Self::OutOfYear`] and [`Self::Exhausted`] to `None` for
    /// callers that only care about found/none.
    #[must_use]
    pub fn entry(&self) -> Option<&CalendarEntry> {
        match self {
            Self::Upcoming(entry) => Some(entry),
            Self::OutOfYear | Self::Exhausted => None,
        }
    }
}

/// Immutable, fully assigned collection calendar for a single schedule year.
///
/// Construction validates the configuration and runs the duty rotation once,
/// so consumers only ever observe entries with their duty already assigned.
pub struct DutyCalendar {
    year: i32,
    entries: Vec<CalendarEntry>,
    families: Vec<Family>,
}

impl DutyCalendar {
    /// Validate the schedule configuration and assign duties.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] when a month/day pair does not exist in
    /// `year`, when the days are not strictly ascending, or when the rotation
    /// itself is misconfigured. The schedule is static data, so any of these
    /// is a defect caught at load time.
    pub fn new(
        year: i32,
        days: &[CollectionDay],
        rotation: &FamilyRotation,
    ) -> Result<Self, ScheduleError> {
        let assignments = assign_duties(days, rotation)?;

        let mut entries: Vec<CalendarEntry> = Vec::with_capacity(assignments.len());
        for DutyAssignment { day, duty } in assignments {
            let date = day.date_in(year).ok_or(ScheduleError::InvalidDate {
                year,
                month: day.month,
                day: day.day,
            })?;
            if entries.last().is_some_and(|previous| previous.date >= date) {
                return Err(ScheduleError::OutOfOrder {
                    month: day.month,
                    day: day.day,
                });
            }
            entries.push(CalendarEntry {
                date,
                fractions: day.fractions,
                duty,
            });
        }

        Ok(Self {
            year,
            entries,
            families: rotation.families.clone(),
        })
    }

    /// The schedule year every entry belongs to.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// All entries in ascending date order, duties assigned.
    #[must_use]
    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    /// Families in rotation order, for filter selectors.
    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Find the earliest collection dated on or after `today`.
    ///
    /// The boundary is inclusive: a collection dated exactly `today` is
    /// returned. Dates are compared date-only; there is no time-of-day
    /// component anywhere in the schedule.
    #[must_use]
    pub fn next_collection(&self, today: NaiveDate) -> NextCollection {
        if today.year() != self.year {
            return NextCollection::OutOfYear;
        }
        self.entries
            .iter()
            .find(|entry| entry.date >= today)
            .cloned()
            .map_or(NextCollection::Exhausted, NextCollection::Upcoming)
    }

    /// Consecutive months and how many entries fall into each.
    ///
    /// Entries are already sorted, so this is a run-length view suitable for
    /// month-spanning table headers.
    #[must_use]
    pub fn months(&self) -> Vec<(u32, usize)> {
        let mut months: Vec<(u32, usize)> = Vec::new();
        for entry in &self.entries {
            match months.last_mut() {
                Some((month, count)) if *month == entry.date.month() => *count += 1,
                _ => months.push((entry.date.month(), 1)),
            }
        }
        months
    }
}

/// Format a date as zero-padded `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn day(month: u32, day: u32) -> CollectionDay {
        CollectionDay {
            month,
            day,
            fractions: FractionSet::default(),
        }
    }

    fn calendar() -> DutyCalendar {
        let days = [day(1, 2), day(1, 15), day(1, 29), day(2, 12)];
        let rotation = FamilyRotation::new(["19A", "19B"], 2, 0);
        DutyCalendar::new(2026, &days, &rotation).expect("valid schedule")
    }

    #[test]
    fn entries_carry_resolved_dates_and_duties() {
        let calendar = calendar();
        let entries = calendar.entries();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].date, date(2026, 1, 2));
        assert_eq!(entries[0].duty, Family::new("19A"));
        assert_eq!(entries[3].date, date(2026, 2, 12));
        assert_eq!(entries[3].duty, Family::new("19B"));
    }

    #[test]
    fn next_collection_on_the_exact_date_is_returned() {
        let next = calendar().next_collection(date(2026, 1, 15));
        let entry = next.entry().expect("collection on that very day counts");
        assert_eq!(entry.date, date(2026, 1, 15));
    }

    #[test]
    fn next_collection_between_dates_skips_forward() {
        let next = calendar().next_collection(date(2026, 1, 16));
        let entry = next.entry().expect("later collections remain");
        assert_eq!(entry.date, date(2026, 1, 29));
    }

    #[test]
    fn past_the_last_date_the_schedule_is_exhausted() {
        let next = calendar().next_collection(date(2026, 2, 13));
        assert_eq!(next, NextCollection::Exhausted);
        assert!(next.entry().is_none(), "exhausted carries no entry");
    }

    #[test]
    fn a_different_year_is_out_of_range_not_exhausted() {
        let calendar = calendar();
        assert_eq!(
            calendar.next_collection(date(2027, 1, 1)),
            NextCollection::OutOfYear
        );
        // Even a pre-schedule date in the wrong year is out of range.
        assert_eq!(
            calendar.next_collection(date(2025, 12, 31)),
            NextCollection::OutOfYear
        );
    }

    #[test]
    fn months_are_grouped_by_consecutive_runs() {
        assert_eq!(calendar().months(), [(1, 3), (2, 1)]);
    }

    #[test]
    fn nonexistent_dates_are_load_time_errors() {
        let rotation = FamilyRotation::new(["19A"], 2, 0);
        let result = DutyCalendar::new(2026, &[day(2, 30)], &rotation);
        assert_eq!(
            result.err(),
            Some(ScheduleError::InvalidDate {
                year: 2026,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn unordered_days_are_load_time_errors() {
        let rotation = FamilyRotation::new(["19A"], 2, 0);
        let result = DutyCalendar::new(2026, &[day(1, 15), day(1, 2)], &rotation);
        assert_eq!(
            result.err(),
            Some(ScheduleError::OutOfOrder { month: 1, day: 2 })
        );
    }

    #[test]
    fn iso_date_is_zero_padded() {
        assert_eq!(iso_date(date(2026, 3, 5)), "2026-03-05");
    }
}
