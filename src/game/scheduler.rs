use crate::model::{ActiveNote, Note};

use super::projector::project;

/// Seconds a note takes to travel from spawn (top) to the target line.
/// Doubles as the lookahead window for activation.
pub const NOTE_TRAVEL_TIME: f64 = 2.0;

/// Seconds a note stays rendered past its target time before removal.
pub const RETIRE_MARGIN: f64 = 1.0;

/// Walks the chart in time order, activating notes whose target time enters
/// the lookahead window and retiring notes whose target time has passed.
///
/// The cursor only moves forward; a backward jump in `now` is not guarded
/// against. Any reset must reinitialize the cursor and the active set
/// together, which `PlaybackSession` does by rebuilding the whole session.
#[derive(Debug, Default)]
pub struct NoteScheduler {
    cursor: usize,
    active: Vec<ActiveNote>,
}

impl NoteScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next chart index not yet activated.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_notes(&self) -> &[ActiveNote] {
        &self.active
    }

    /// One scheduling step at playback time `now`:
    /// retire (`now >= time + RETIRE_MARGIN`), reproject survivors, then
    /// activate (`time < now + NOTE_TRAVEL_TIME`). The comparison strictness
    /// on both edges fixes the exact spawn/despawn frames.
    pub fn advance(&mut self, chart: &[Note], now: f64, target_y: f32) {
        self.active.retain(|n| now < n.note.time + RETIRE_MARGIN);

        for active in &mut self.active {
            active.y = project(active.note.time, now, target_y);
        }

        while self.cursor < chart.len() && chart[self.cursor].time < now + NOTE_TRAVEL_TIME {
            self.active.push(ActiveNote {
                note: chart[self.cursor],
                y: 0.0,
            });
            self.cursor += 1;
        }
    }
}
