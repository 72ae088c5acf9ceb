//! Domain data structures for collection days, waste fractions, and the duty rotation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Waste fractions that can be picked up on a collection day.
pub enum Fraction {
    /// Mixed/residual waste.
    Mixed,
    /// Paper and cardboard.
    Paper,
    /// Glass collection.
    Glass,
    /// Metals and plastics.
    Metal,
    /// Organic waste.
    Bio,
}

impl Fraction {
    /// All fractions, in the order they appear in the printed calendar.
    pub const ALL: [Fraction; 5] = [
        Fraction::Mixed,
        Fraction::Paper,
        Fraction::Glass,
        Fraction::Metal,
        Fraction::Bio,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Which fractions are picked up on a single collection day.
pub struct FractionSet {
    /// Mixed/residual waste is collected.
    pub mixed: bool,
    /// Paper is collected.
    pub paper: bool,
    /// Glass is collected.
    pub glass: bool,
    /// Metals and plastics are collected.
    pub metal: bool,
    /// Organic waste is collected.
    pub bio: bool,
}

impl FractionSet {
    /// Check whether the given fraction is collected.
    #[must_use]
    pub const fn contains(self, fraction: Fraction) -> bool {
        match fraction {
            Fraction::Mixed => self.mixed,
            Fraction::Paper => self.paper,
            Fraction::Glass => self.glass,
            Fraction::Metal => self.metal,
            Fraction::Bio => self.bio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A scheduled pickup day, stored as month and day within the schedule year.
///
/// The year is deliberately not part of the day; the whole schedule shares a
/// single year constant and days are resolved against it with [`Self::date_in`].
pub struct CollectionDay {
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Fractions collected on this day.
    pub fractions: FractionSet,
}

impl CollectionDay {
    /// Resolve the stored month/day against the schedule year.
    ///
    /// Returns `None` for month/day pairs that do not exist in that year.
    #[must_use]
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Label of a household unit taking part in the duty rotation.
pub struct Family(pub String);

impl Family {
    /// Construct a family label.
    #[must_use]
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Cyclic duty assignment policy.
///
/// Each family handles `group_size` consecutive collection days before the
/// rotation advances to the next label, wrapping at the end of the list.
pub struct FamilyRotation {
    /// Families in rotation order.
    pub families: Vec<Family>,
    /// Collection days handled per family before rotating.
    pub group_size: usize,
    /// Index of the family the rotation begins with.
    ///
    /// A configuration choice, not derived data; must be in range for
    /// [`crate::rotation::assign_duties`] to accept the rotation.
    pub start_index: usize,
}

impl FamilyRotation {
    /// Construct a rotation from labels in rotation order.
    #[must_use]
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(
        families: I,
        group_size: usize,
        start_index: usize,
    ) -> Self {
        Self {
            families: families.into_iter().map(Family::new).collect(),
            group_size,
            start_index,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
/// Configuration defects detected while loading a schedule.
///
/// The schedule is static compiled-in data, so every variant here is a
/// build-time/test-time defect rather than a runtime condition to recover
/// from. Lookup never errors; "no next collection" is a normal outcome.
pub enum ScheduleError {
    /// A month/day pair does not exist in the schedule year.
    #[error("invalid calendar date {month}-{day} in year {year}")]
    InvalidDate {
        /// Schedule year the pair was resolved against.
        year: i32,
        /// Month of the offending entry.
        month: u32,
        /// Day of the offending entry.
        day: u32,
    },
    /// The rotation start index does not address any family.
    #[error("rotation start index {start_index} out of range for {families} families")]
    StartIndexOutOfRange {
        /// Configured start index.
        start_index: usize,
        /// Number of families in the rotation.
        families: usize,
    },
    /// The rotation has no families to assign.
    #[error("rotation has no families")]
    EmptyRotation,
    /// A group size of zero would never advance the rotation.
    #[error("rotation group size must be at least 1")]
    ZeroGroupSize,
    /// Collection days must be strictly ascending.
    #[error("collection days out of order at {month}-{day}")]
    OutOfOrder {
        /// Month of the entry that broke the ordering.
        month: u32,
        /// Day of the entry that broke the ordering.
        day: u32,
    },
}
