//! Core types and logic for the kubelek waste collection duty calendar.

/// Compiled-in schedule data for the current season.
pub mod builtin;
/// Calendar facade combining duty assignment with next-collection lookup.
pub mod calendar;
/// Domain models shared across the workspace.
pub mod model;
/// The fixed-group-size duty rotation.
pub mod rotation;

pub use calendar::*;
pub use model::*;
pub use rotation::*;
