//! Scheduling conflict detection and resolution.
//!
//! Given a new or edited event and the caller's event list, decides whether
//! it collides with anything and proposes how to make room. Nothing here
//! mutates caller data; decisions come back as a [`ConflictDetectionResult`].

mod finder;
mod planner;
mod resolver;
mod result;

pub use finder::find_conflicts;
pub use planner::{RearrangementPlanner, RearrangementReason, RearrangementSuggestion};
pub use resolver::{check_event_update_conflicts, detect_and_resolve_conflicts, ConflictResolver};
pub use result::{ConflictDetectionResult, ResolutionStrategy, SuggestedResolution};
