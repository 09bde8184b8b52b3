//! Derived reads and form handling.
//!
//! Everything here is computed on demand from the store's collections and never
//! persisted. Functions take plain slices so they work equally on store contents and
//! on records built in tests.

/// Budget totals and over-budget detection
pub mod budget;
/// Wedding countdown
pub mod countdown;
/// Home screen summary
pub mod dashboard;
/// Form input normalization and amount coercion
pub mod forms;
/// Thank-you tracking
pub mod gifts;
/// RSVP counts, search and initials
pub mod guests;
/// Task progress and timeline partitions
pub mod tasks;
