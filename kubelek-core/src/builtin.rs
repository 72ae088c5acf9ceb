//! Compiled-in schedule configuration for the current season.

use crate::model::{CollectionDay, FamilyRotation, FractionSet};

/// Year the built-in schedule applies to.
pub const SCHEDULE_YEAR: i32 = 2026;

/// Collection days each family handles before the rotation advances.
pub const COLLECTIONS_PER_FAMILY: usize = 2;

/// Polish month names, indexed by month number (index 0 unused).
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "Styczeń",
    "Luty",
    "Marzec",
    "Kwiecień",
    "Maj",
    "Czerwiec",
    "Lipiec",
    "Sierpień",
    "Wrzesień",
    "Październik",
    "Listopad",
    "Grudzień",
];

// The published schedule alternates between two pickup combinations.
const MIXED_PAPER_GLASS: FractionSet = FractionSet {
    mixed: true,
    paper: true,
    glass: true,
    metal: false,
    bio: false,
};

const MIXED_METAL_BIO: FractionSet = FractionSet {
    mixed: true,
    paper: false,
    glass: false,
    metal: true,
    bio: true,
};

const fn day(month: u32, day: u32, fractions: FractionSet) -> CollectionDay {
    CollectionDay {
        month,
        day,
        fractions,
    }
}

/// Collection days published for the schedule year, in ascending order.
#[must_use]
pub fn collection_days() -> Vec<CollectionDay> {
    vec![
        day(1, 2, MIXED_PAPER_GLASS),
        day(1, 15, MIXED_METAL_BIO),
        day(1, 29, MIXED_PAPER_GLASS),
        day(2, 12, MIXED_METAL_BIO),
        day(2, 26, MIXED_PAPER_GLASS),
        day(3, 12, MIXED_METAL_BIO),
        day(3, 26, MIXED_PAPER_GLASS),
    ]
}

/// The five households in rotation order; 19A opens the year.
#[must_use]
pub fn family_rotation() -> FamilyRotation {
    FamilyRotation::new(
        ["19A", "19B", "21", "21A", "19"],
        COLLECTIONS_PER_FAMILY,
        0,
    )
}
