//! Core data types for the bike-sharing dataset.

pub mod record;

pub use record::{DateRange, RentalRecord, WorkingDay};
