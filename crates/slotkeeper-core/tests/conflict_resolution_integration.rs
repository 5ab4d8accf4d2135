//! Integration tests for conflict detection and resolution.

use slotkeeper_core::{
    check_event_update_conflicts, detect_and_resolve_conflicts, find_available_time_slots,
    Category, ClockTime, ConflictDetectionResult, Event, Priority, ResolutionStrategy, TimeSlot,
    UserPreferences, WorkingHours,
};

fn t(raw: &str) -> ClockTime {
    ClockTime::parse(raw).unwrap()
}

fn event(id: &str, title: &str, date: &str, start: &str, end: &str) -> Event {
    Event::new(id, title, date.parse().unwrap(), t(start), t(end))
}

fn prefs(start: &str, end: &str) -> UserPreferences {
    UserPreferences::default().with_working_hours(WorkingHours::parse(start, end).unwrap())
}

#[test]
fn test_new_event_moves_to_first_slot_after_existing_event() {
    let existing = vec![
        event("a", "Team sync", "2025-01-01", "09:00", "10:00").with_priority(Priority::Medium),
    ];
    let new_event = event("new", "Design review", "2025-01-01", "09:30", "10:30");

    let result = detect_and_resolve_conflicts(&new_event, &existing, Some(&prefs("08:00", "18:00")));

    assert!(result.has_conflict);
    assert_eq!(result.conflicting_events.len(), 1);
    let resolution = result.suggested_resolution.expect("resolution");
    assert!(resolution.rearranged_events.is_empty());
    assert_eq!(
        resolution.new_event_slot,
        TimeSlot::new(new_event.date, t("10:00"), t("11:00"))
    );
}

#[test]
fn test_edit_into_focus_block_moves_focus_block() {
    let standup = event("standup", "Standup", "2025-01-01", "09:00", "10:00");
    let focus = event("focus", "Focus Block", "2025-01-01", "10:00", "11:00")
        .with_priority(Priority::High)
        .with_category(Category::new("work", "Work"));
    let existing = vec![standup.clone(), focus.clone()];

    let mut edited = standup.clone();
    edited.start_time = t("10:00");
    edited.end_time = t("11:00");

    let result = check_event_update_conflicts(&edited, &existing, Some(&prefs("08:00", "18:00")));

    assert!(result.has_conflict);
    assert_eq!(result.conflicting_events, vec![focus.clone()]);
    let resolution = result.suggested_resolution.expect("resolution");
    assert_eq!(resolution.new_event_slot, edited.slot());
    assert_eq!(resolution.strategy, ResolutionStrategy::RearrangeExisting);
    assert_eq!(resolution.rearranged_events.len(), 1);
    assert_eq!(resolution.rearranged_events[0].id, "focus");
    assert_eq!(resolution.rearranged_events[0].duration_minutes(), 60);
}

#[test]
fn test_edit_reports_manual_resolution_when_day_is_full() {
    let standup = event("standup", "Standup", "2025-01-01", "09:00", "10:00");
    let focus = event("focus", "Focus Block", "2025-01-01", "10:00", "11:00")
        .with_priority(Priority::High);
    let wall = event("wall", "Offsite", "2025-01-01", "08:00", "10:00");
    let tail = event("tail", "Wrap-up", "2025-01-01", "10:30", "11:00");
    let existing = vec![standup.clone(), focus, wall, tail];

    let mut edited = standup.clone();
    edited.start_time = t("10:00");
    edited.end_time = t("11:00");

    // Every conflicting event is boxed in by the others inside 08:00-11:00
    let result = check_event_update_conflicts(&edited, &existing, Some(&prefs("08:00", "11:00")));

    let resolution = result.suggested_resolution.expect("resolution");
    assert_eq!(resolution.strategy, ResolutionStrategy::Manual);
    assert!(resolution.rearranged_events.is_empty());
    assert!(resolution.message.contains("Couldn't find a suitable alternative"));
}

#[test]
fn test_empty_day_has_no_conflict() {
    let new_event = event("new", "Walk", "2025-01-01", "12:00", "12:30");
    let result = detect_and_resolve_conflicts(&new_event, &[], Some(&prefs("08:00", "22:00")));
    assert_eq!(result, ConflictDetectionResult::no_conflict());
}

#[test]
fn test_non_overlapping_calendar_has_no_conflict() {
    let existing = vec![
        event("a", "Breakfast", "2025-01-01", "08:00", "08:30"),
        event("b", "Lunch", "2025-01-01", "12:00", "13:00"),
        event("c", "Same time, other day", "2025-01-02", "10:00", "11:00"),
    ];
    let new_event = event("new", "Writing", "2025-01-01", "10:00", "11:00");

    let result = detect_and_resolve_conflicts(&new_event, &existing, None);
    assert!(!result.has_conflict);
    assert!(result.conflicting_events.is_empty());
    assert!(result.suggested_resolution.is_none());
}

#[test]
fn test_back_to_back_event_is_reported_as_conflict() {
    let existing = vec![event("a", "Call", "2025-01-01", "09:00", "10:00")];
    let new_event = event("new", "Follow-up", "2025-01-01", "10:00", "10:30");

    let result = detect_and_resolve_conflicts(&new_event, &existing, None);
    assert!(result.has_conflict);
    assert_eq!(result.conflicting_events[0].id, "a");
}

#[test]
fn test_update_never_rearranges_edited_event() {
    let existing = vec![
        event("edit", "Gym", "2025-01-01", "07:00", "08:00").with_priority(Priority::Low),
        event("x", "Class", "2025-01-01", "09:00", "10:00").with_priority(Priority::Low),
        event("y", "Seminar", "2025-01-01", "09:30", "10:30").with_priority(Priority::High),
    ];
    let mut edited = existing[0].clone();
    edited.start_time = t("09:00");
    edited.end_time = t("10:00");

    let result = check_event_update_conflicts(&edited, &existing, None);
    let resolution = result.suggested_resolution.expect("resolution");
    assert!(!resolution.rearranged_events.is_empty());
    assert!(resolution.rearranged_events.iter().all(|e| e.id != "edit"));
    assert_eq!(resolution.rearranged_events[0].id, "x");
}

#[test]
fn test_apply_to_commits_relocation() {
    let existing = vec![event("a", "Team sync", "2025-01-01", "09:00", "10:00")];
    let new_event = event("new", "Design review", "2025-01-01", "09:30", "10:30");

    let result = detect_and_resolve_conflicts(&new_event, &existing, Some(&prefs("08:00", "18:00")));
    let committed = result.apply_to(&new_event, &existing);

    assert_eq!(committed.len(), 2);
    assert_eq!(committed[0], existing[0]);
    assert_eq!(committed[1].start_time, t("10:00"));

    // Moved event overlaps nothing except by touching
    let recheck = detect_and_resolve_conflicts(&committed[1], &committed[..1], None);
    assert!(recheck.has_conflict, "touching still counts as a conflict");
}

#[test]
fn test_full_day_search_matches_working_hours() {
    let date = "2025-01-01".parse().unwrap();
    let envelope = WorkingHours::parse("08:00", "22:00").unwrap();

    for d in [15u32, 60, 839, 840] {
        let slots = find_available_time_slots(date, d, &[], Some(&envelope), None);
        assert_eq!(slots, vec![TimeSlot::starting_at(date, t("08:00"), d)]);
    }
    assert!(find_available_time_slots(date, 841, &[], Some(&envelope), None).is_empty());
}

#[test]
fn test_result_json_shape() {
    let existing = vec![event("a", "Team sync", "2025-01-01", "09:00", "10:00")];
    let new_event = event("new", "Design review", "2025-01-01", "09:30", "10:30");
    let result = detect_and_resolve_conflicts(&new_event, &existing, None);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["hasConflict"], true);
    assert_eq!(json["conflictingEvents"][0]["id"], "a");
    assert_eq!(json["suggestedResolution"]["strategy"], "relocate_new_event");
    assert_eq!(json["suggestedResolution"]["newEventSlot"]["startTime"], "10:00");
    assert!(json["suggestedResolution"]["rearrangedEvents"].as_array().unwrap().is_empty());
}
