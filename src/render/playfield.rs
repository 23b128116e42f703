use anyhow::Result;

use crate::config::PlayfieldConfig;
use crate::model::{ActiveNote, DIVIDER_COLOR, LANE_COLORS, LANE_COUNT};
use crate::traits::render::RectBackend;

/// Alpha of the fixed target-zone highlights.
const TARGET_ZONE_ALPHA: f32 = 0.4;

/// Composes one frame of the play area: lane dividers, target zones, and the
/// currently active notes, all through the shared rect primitive.
pub struct Playfield {
    config: PlayfieldConfig,
}

impl Playfield {
    pub fn new(config: PlayfieldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlayfieldConfig {
        &self.config
    }

    /// Issue the full scene for one frame, in draw order: `LANE_COUNT - 1`
    /// dividers, `LANE_COUNT` target zones, then one rect per active note in
    /// its opaque lane color.
    pub fn draw<R: RectBackend>(&self, backend: &mut R, notes: &[ActiveNote]) -> Result<()> {
        let lane_width = self.config.lane_width();
        let target_y = self.config.target_y();

        // 2 px dividers centered on the lane boundaries.
        for i in 1..LANE_COUNT {
            backend.draw_rect(
                i as f32 * lane_width - 1.0,
                0.0,
                2.0,
                self.config.height,
                DIVIDER_COLOR,
            )?;
        }

        for (i, color) in LANE_COLORS.iter().enumerate() {
            backend.draw_rect(
                i as f32 * lane_width,
                target_y,
                lane_width,
                self.config.note_height,
                color.with_alpha(TARGET_ZONE_ALPHA),
            )?;
        }

        for active in notes {
            backend.draw_rect(
                active.note.lane as f32 * lane_width,
                active.y,
                lane_width,
                self.config.note_height,
                LANE_COLORS[active.note.lane],
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::render::command_recorder::{CommandRecorder, RectCommand};

    fn active(lane: usize, y: f32) -> ActiveNote {
        ActiveNote {
            note: Note {
                lane,
                time: 0.0,
                duration: 0.0,
            },
            y,
        }
    }

    fn draw_scene(notes: &[ActiveNote]) -> CommandRecorder {
        let playfield = Playfield::new(PlayfieldConfig::default());
        let mut recorder = CommandRecorder::new(800, 600);
        recorder.begin_frame().unwrap();
        playfield.draw(&mut recorder, notes).unwrap();
        recorder.end_frame().unwrap();
        recorder
    }

    #[test]
    fn empty_scene_draws_dividers_and_target_zones() {
        let recorder = draw_scene(&[]);
        // 4 dividers + 5 target zones.
        assert_eq!(recorder.rects().len(), LANE_COUNT - 1 + LANE_COUNT);
    }

    #[test]
    fn dividers_come_first_and_sit_on_lane_boundaries() {
        let recorder = draw_scene(&[]);
        let rects = recorder.rects();
        for (i, cmd) in rects.iter().take(LANE_COUNT - 1).enumerate() {
            match cmd {
                RectCommand::Rect {
                    x, width, color, ..
                } => {
                    assert_eq!(*x, (i + 1) as f32 * 160.0 - 1.0);
                    assert_eq!(*width, 2.0);
                    assert_eq!(*color, DIVIDER_COLOR);
                }
                other => panic!("expected divider rect, got {other:?}"),
            }
        }
    }

    #[test]
    fn target_zones_are_translucent_lane_colors_at_the_target_line() {
        let recorder = draw_scene(&[]);
        let rects = recorder.rects();
        for (i, cmd) in rects.iter().skip(LANE_COUNT - 1).enumerate() {
            match cmd {
                RectCommand::Rect { y, color, .. } => {
                    assert_eq!(*y, 550.0);
                    assert_eq!(*color, LANE_COLORS[i].with_alpha(0.4));
                }
                other => panic!("expected target zone rect, got {other:?}"),
            }
        }
    }

    #[test]
    fn note_uses_its_lane_color_and_projected_position() {
        let recorder = draw_scene(&[active(1, 275.0)]);
        let rects = recorder.rects();
        match rects.last().unwrap() {
            RectCommand::Rect { x, y, color, .. } => {
                assert_eq!(*x, 160.0);
                assert_eq!(*y, 275.0);
                assert_eq!(*color, LANE_COLORS[1]);
            }
            other => panic!("expected note rect, got {other:?}"),
        }
    }

    #[test]
    fn notes_draw_after_the_fixed_scenery() {
        let recorder = draw_scene(&[active(0, 10.0), active(4, 20.0)]);
        assert_eq!(recorder.rects().len(), LANE_COUNT - 1 + LANE_COUNT + 2);
    }
}
