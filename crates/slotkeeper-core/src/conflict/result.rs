//! Decision types returned by the resolver.

use serde::{Deserialize, Serialize};

use crate::timeline::{Event, TimeSlot};

/// How a detected conflict is proposed to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// Move the new event to an open slot; existing events stay put.
    RelocateNewEvent,
    /// Keep the new or edited event and move conflicting events.
    RearrangeExisting,
    /// No automatic resolution was found.
    Manual,
}

/// Proposed changes for the caller to commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedResolution {
    pub strategy: ResolutionStrategy,
    /// Moved copies of existing events.
    pub rearranged_events: Vec<Event>,
    /// Where the new or edited event should go.
    pub new_event_slot: TimeSlot,
    pub message: String,
}

/// Outcome of a conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictDetectionResult {
    pub has_conflict: bool,
    pub conflicting_events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_resolution: Option<SuggestedResolution>,
}

impl ConflictDetectionResult {
    pub fn no_conflict() -> Self {
        Self {
            has_conflict: false,
            conflicting_events: Vec::new(),
            suggested_resolution: None,
        }
    }

    pub fn with_resolution(conflicting_events: Vec<Event>, resolution: SuggestedResolution) -> Self {
        Self {
            has_conflict: true,
            conflicting_events,
            suggested_resolution: Some(resolution),
        }
    }

    /// True when the check found nothing to resolve or produced an automatic
    /// resolution.
    pub fn is_resolved(&self) -> bool {
        match &self.suggested_resolution {
            Some(resolution) => resolution.strategy != ResolutionStrategy::Manual,
            None => !self.has_conflict,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.suggested_resolution.as_ref().map(|r| r.message.as_str())
    }

    /// Apply the suggestion to `events`, returning the updated list.
    ///
    /// `subject` is the new or edited event the check was run for. It is
    /// placed at the suggested slot, replacing any entry with the same id.
    /// Rearranged events replace their originals by id. Without a
    /// suggestion the subject is inserted as-is.
    pub fn apply_to(&self, subject: &Event, events: &[Event]) -> Vec<Event> {
        let (placed, moved): (Event, &[Event]) = match &self.suggested_resolution {
            Some(resolution) => (
                subject.moved_to(resolution.new_event_slot),
                resolution.rearranged_events.as_slice(),
            ),
            None => (subject.clone(), &[][..]),
        };

        let mut updated: Vec<Event> = events
            .iter()
            .filter(|e| e.id != placed.id)
            .map(|e| match moved.iter().find(|m| m.id == e.id) {
                Some(m) => m.clone(),
                None => e.clone(),
            })
            .collect();
        updated.push(placed);
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::ClockTime;

    fn event(id: &str, start: &str, end: &str) -> Event {
        Event::new(
            id,
            id,
            "2025-01-01".parse().unwrap(),
            ClockTime::parse(start).unwrap(),
            ClockTime::parse(end).unwrap(),
        )
    }

    #[test]
    fn no_conflict_serializes_without_resolution() {
        let result = ConflictDetectionResult::no_conflict();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["hasConflict"], false);
        assert!(json["conflictingEvents"].as_array().unwrap().is_empty());
        assert!(json.get("suggestedResolution").is_none());
        assert!(result.is_resolved());
    }

    #[test]
    fn manual_strategy_is_unresolved() {
        let existing = event("a", "09:00", "10:00");
        let result = ConflictDetectionResult::with_resolution(
            vec![existing.clone()],
            SuggestedResolution {
                strategy: ResolutionStrategy::Manual,
                rearranged_events: Vec::new(),
                new_event_slot: existing.slot(),
                message: "resolve manually".into(),
            },
        );
        assert!(!result.is_resolved());
        assert_eq!(result.message(), Some("resolve manually"));
    }

    #[test]
    fn apply_to_moves_rearranged_events_and_places_subject() {
        let existing = vec![event("a", "09:00", "10:00"), event("b", "12:00", "13:00")];
        let subject = event("new", "09:00", "10:00");
        let moved_a = existing[0].moved_to(event("a", "14:00", "15:00").slot());

        let result = ConflictDetectionResult::with_resolution(
            vec![existing[0].clone()],
            SuggestedResolution {
                strategy: ResolutionStrategy::RearrangeExisting,
                rearranged_events: vec![moved_a.clone()],
                new_event_slot: subject.slot(),
                message: String::new(),
            },
        );

        let updated = result.apply_to(&subject, &existing);
        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0], moved_a);
        assert_eq!(updated[1], existing[1]);
        assert_eq!(updated[2].id, "new");
    }

    #[test]
    fn apply_to_replaces_edited_event_in_place_of_old_copy() {
        let existing = vec![event("a", "09:00", "10:00")];
        let edited = event("a", "11:00", "12:00");
        let updated = ConflictDetectionResult::no_conflict().apply_to(&edited, &existing);
        assert_eq!(updated, vec![edited]);
    }
}
