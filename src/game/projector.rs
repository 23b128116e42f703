use super::scheduler::NOTE_TRAVEL_TIME;

/// Map a note's remaining time-to-target into a vertical screen coordinate.
///
/// Pure linear interpolation, no easing: `y = 0` when the note spawns
/// (`now = note_time - NOTE_TRAVEL_TIME`) and `y = target_y` when it reaches
/// the target line (`now = note_time`).
pub fn project(note_time: f64, now: f64, target_y: f32) -> f32 {
    let time_to_target = note_time - now;
    (f64::from(target_y) * (1.0 - time_to_target / NOTE_TRAVEL_TIME)) as f32
}
