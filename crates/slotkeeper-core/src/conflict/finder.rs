//! Overlap lookup against an event list.

use crate::timeline::{Event, TimeSlot};

/// Events whose slot overlaps `slot`, in input order.
///
/// `exclude_event_id` drops one event from consideration, which is how an
/// edited event avoids conflicting with its own previous position.
pub fn find_conflicts<'a>(
    slot: &TimeSlot,
    events: &'a [Event],
    exclude_event_id: Option<&str>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| exclude_event_id != Some(e.id.as_str()))
        .filter(|e| e.slot().overlaps(slot))
        .collect()
}
