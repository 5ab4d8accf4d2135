//! # Slotkeeper Core Library
//!
//! Scheduling conflict detection and resolution for a personal calendar.
//! Given a proposed or edited event and the caller's in-memory event list,
//! the engine decides whether it collides with anything, searches for open
//! slots inside the user's working hours, and when nothing is free proposes
//! moving lower-priority events out of the way.
//!
//! ## Architecture
//!
//! - **Timeline**: minute-precision time values, events, slot overlap and
//!   free-slot search
//! - **Conflict**: overlap lookup, the rearrangement planner and the
//!   create/update resolver
//! - **Config**: TOML-persisted scheduling preferences
//!
//! The engine never mutates caller data and never fails on an unresolvable
//! conflict; it returns a [`ConflictDetectionResult`] describing what it
//! would do. Committing the decision is up to the caller.
//!
//! ## Key Components
//!
//! - [`ConflictResolver`]: Create and update entry points
//! - [`FreeSlotFinder`]: Open-slot search for one day
//! - [`RearrangementPlanner`]: Priority-ordered relocation of conflicting events
//! - [`Config`]: Preference persistence

pub mod config;
pub mod conflict;
pub mod error;
pub mod preferences;
pub mod timeline;

pub use config::Config;
pub use conflict::{
    check_event_update_conflicts, detect_and_resolve_conflicts, find_conflicts,
    ConflictDetectionResult, ConflictResolver, RearrangementPlanner, RearrangementReason,
    RearrangementSuggestion, ResolutionStrategy, SuggestedResolution,
};
pub use error::{ConfigError, CoreError, ParseError, Result};
pub use preferences::{ProductivityHour, UserPreferences, WorkingHours};
pub use timeline::{
    duration, find_available_time_slots, overlaps, parse_date, Category, CategoryId, ClockTime,
    Event, FreeSlotFinder, Priority, TimeSlot,
};
