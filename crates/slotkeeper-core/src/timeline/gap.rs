//! Free-slot search within a working-hours envelope.
//!
//! Scans a single day's events in start order and proposes an open slot of
//! the requested length at the start of every gap that can hold it.

use chrono::NaiveDate;

use super::clock::ClockTime;
use super::event::Event;
use super::slot::TimeSlot;
use crate::preferences::WorkingHours;

/// An open window on the scanned day.
#[derive(Debug, Clone, Copy)]
struct Gap {
    start: ClockTime,
    end: ClockTime,
    /// The window is closed by the start of a following event rather than
    /// by the end of working hours.
    closed_by_event: bool,
}

impl Gap {
    fn span_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }

    /// A slot placed at the start of a gap closed by an event must finish
    /// strictly before that event begins. Against the working-hours end an
    /// exact fit is allowed.
    fn fits(&self, minutes: u32) -> bool {
        let needed = i64::from(minutes);
        if self.closed_by_event {
            self.span_minutes() > needed
        } else {
            self.span_minutes() >= needed
        }
    }
}

/// Finds open slots on one day.
pub struct FreeSlotFinder {
    working_hours: WorkingHours,
}

impl FreeSlotFinder {
    /// Create a finder using the default 08:00-22:00 envelope
    pub fn new() -> Self {
        Self {
            working_hours: WorkingHours::default(),
        }
    }

    /// Set the working-hours envelope
    pub fn with_working_hours(mut self, working_hours: WorkingHours) -> Self {
        self.working_hours = working_hours;
        self
    }

    pub fn working_hours(&self) -> WorkingHours {
        self.working_hours
    }

    /// Find every slot of `duration_minutes` that fits on `date`.
    ///
    /// # Arguments
    /// * `date` - Day to search
    /// * `duration_minutes` - Required slot length
    /// * `events` - Candidate events; those on other dates are ignored
    /// * `exclude_event_id` - Event to leave out of the day's occupancy
    ///
    /// # Returns
    /// Slots in chronological order, each exactly `duration_minutes` long and
    /// placed at the start of its gap. Empty when nothing fits.
    pub fn find_slots(
        &self,
        date: NaiveDate,
        duration_minutes: u32,
        events: &[Event],
        exclude_event_id: Option<&str>,
    ) -> Vec<TimeSlot> {
        let mut day_events: Vec<&Event> = events
            .iter()
            .filter(|e| e.date == date)
            .filter(|e| exclude_event_id != Some(e.id.as_str()))
            .collect();
        day_events.sort_by_key(|e| e.start_time);

        self.gaps(&day_events)
            .into_iter()
            .filter(|gap| gap.fits(duration_minutes))
            .map(|gap| TimeSlot::starting_at(date, gap.start, duration_minutes))
            .collect()
    }

    fn gaps(&self, sorted_events: &[&Event]) -> Vec<Gap> {
        let day_start = self.working_hours.start;
        let day_end = self.working_hours.end;
        let mut gaps = Vec::new();

        let mut last_end = day_start;

        for event in sorted_events {
            // Already covered by an earlier, longer event
            if event.end_time <= last_end {
                continue;
            }

            if event.start_time >= day_end {
                // An event starting right at closing time still bounds the last gap
                if event.start_time == day_end && last_end < day_end {
                    gaps.push(Gap {
                        start: last_end,
                        end: day_end,
                        closed_by_event: true,
                    });
                    last_end = day_end;
                }
                break;
            }

            if event.start_time > last_end {
                gaps.push(Gap {
                    start: last_end,
                    end: event.start_time,
                    closed_by_event: true,
                });
            }

            last_end = event.end_time.min(day_end);
        }

        if last_end < day_end {
            gaps.push(Gap {
                start: last_end,
                end: day_end,
                closed_by_event: false,
            });
        }

        gaps
    }
}

impl Default for FreeSlotFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to search one day for open slots.
///
/// `working_hours` defaults to 08:00-22:00.
pub fn find_available_time_slots(
    date: NaiveDate,
    duration_minutes: u32,
    existing_events: &[Event],
    working_hours: Option<&WorkingHours>,
    exclude_event_id: Option<&str>,
) -> Vec<TimeSlot> {
    FreeSlotFinder::new()
        .with_working_hours(working_hours.copied().unwrap_or_default())
        .find_slots(date, duration_minutes, existing_events, exclude_event_id)
}
