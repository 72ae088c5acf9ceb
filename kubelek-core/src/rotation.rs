//! Fixed-group-size duty rotation over an ordered list of collection days.

use crate::model::{CollectionDay, Family, FamilyRotation, ScheduleError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A collection day paired with the family on duty.
pub struct DutyAssignment {
    /// The scheduled day.
    pub day: CollectionDay,
    /// Family responsible for this day.
    pub duty: Family,
}

/// Assign a duty family to every collection day.
///
/// Days are taken in the given (ascending) order and grouped into blocks of
/// `rotation.group_size` consecutive entries; block `i` is handled by
/// `families[(start_index + i) mod families.len()]`. A single forward pass,
/// no look-ahead, no randomness.
///
/// The input is not mutated; the result pairs each day with its computed
/// duty, so running the assignment twice over the same input always yields
/// the same sequence. An empty day list yields an empty result.
///
/// # Errors
///
/// Returns a [`ScheduleError`] when the rotation itself is misconfigured:
/// no families, a group size of zero, or a start index that addresses no
/// family. Out-of-range start indices are rejected rather than silently
/// wrapped.
pub fn assign_duties(
    days: &[CollectionDay],
    rotation: &FamilyRotation,
) -> Result<Vec<DutyAssignment>, ScheduleError> {
    if rotation.families.is_empty() {
        return Err(ScheduleError::EmptyRotation);
    }
    if rotation.group_size == 0 {
        return Err(ScheduleError::ZeroGroupSize);
    }
    if rotation.start_index >= rotation.families.len() {
        return Err(ScheduleError::StartIndexOutOfRange {
            start_index: rotation.start_index,
            families: rotation.families.len(),
        });
    }

    let assignments = days
        .chunks(rotation.group_size)
        .zip(rotation.families.iter().cycle().skip(rotation.start_index))
        .flat_map(|(block, family)| {
            block.iter().map(|day| DutyAssignment {
                day: *day,
                duty: family.clone(),
            })
        })
        .collect();

    Ok(assignments)
}
