use crate::traits::render::Color;

/// Number of lanes in the play area.
pub const LANE_COUNT: usize = 5;

/// Fixed per-lane note colors: green, red, yellow, blue, orange.
pub const LANE_COLORS: [Color; LANE_COUNT] = [
    Color::new(0.0, 1.0, 0.0, 1.0),
    Color::new(1.0, 0.0, 0.0, 1.0),
    Color::new(1.0, 1.0, 0.0, 1.0),
    Color::new(0.0, 0.0, 1.0, 1.0),
    Color::new(1.0, 0.5, 0.0, 1.0),
];

/// Color of the lane divider lines.
pub const DIVIDER_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// A single chart note. Immutable once loaded; the chart sequence is
/// non-decreasing in `time`, which the scheduler's forward cursor relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Lane index in `[0, LANE_COUNT)`.
    pub lane: usize,
    /// Target (hit) instant in seconds from song start.
    pub time: f64,
    /// Sustain length in seconds. Carried through from the chart; sustains
    /// are not rendered.
    pub duration: f64,
}

/// A note inside the lookahead window, plus its projected screen position.
/// Owned by the scheduler; `y` is recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveNote {
    pub note: Note,
    pub y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_colors_cover_all_lanes() {
        assert_eq!(LANE_COLORS.len(), LANE_COUNT);
    }

    #[test]
    fn second_lane_is_red() {
        assert_eq!(LANE_COLORS[1], Color::new(1.0, 0.0, 0.0, 1.0));
    }
}
