//! Calendar time values and free-slot search.
//!
//! This module provides:
//! - `ClockTime`, minute-precision times parsed once from `HH:mm`
//! - Events, priorities and categories as supplied by the caller
//! - Boundary-inclusive slot overlap
//! - Free-slot search inside a working-hours envelope

mod clock;
mod event;
mod gap;
mod slot;

pub use clock::{parse_date, ClockTime};
pub use event::{Category, CategoryId, Event, Priority};
pub use gap::{find_available_time_slots, FreeSlotFinder};
pub use slot::{duration, overlaps, TimeSlot};
