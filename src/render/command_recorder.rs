use anyhow::{Result, anyhow};

use crate::traits::render::{Color, RectBackend};

/// Recorded draw command for testing.
#[derive(Debug, Clone, PartialEq)]
pub enum RectCommand {
    BeginFrame,
    EndFrame,
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// A mock RectBackend that records draw commands for assertions.
/// Does not require a GPU.
pub struct CommandRecorder {
    commands: Vec<RectCommand>,
    in_frame: bool,
    screen_width: u32,
    screen_height: u32,
}

impl CommandRecorder {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            commands: Vec::new(),
            in_frame: false,
            screen_width,
            screen_height,
        }
    }

    /// Get all recorded commands.
    pub fn commands(&self) -> &[RectCommand] {
        &self.commands
    }

    /// Only the rect commands, in submission order.
    pub fn rects(&self) -> Vec<RectCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, RectCommand::Rect { .. }))
            .cloned()
            .collect()
    }

}

impl RectBackend for CommandRecorder {
    fn begin_frame(&mut self) -> Result<()> {
        self.in_frame = true;
        self.commands.push(RectCommand::BeginFrame);
        Ok(())
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) -> Result<()> {
        if !self.in_frame {
            return Err(anyhow!("draw_rect called outside a frame"));
        }
        self.commands.push(RectCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if !self.in_frame {
            return Err(anyhow!("end_frame called outside a frame"));
        }
        self.in_frame = false;
        self.commands.push(RectCommand::EndFrame);
        Ok(())
    }

    fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_submission_order() {
        let mut recorder = CommandRecorder::new(800, 600);
        recorder.begin_frame().unwrap();
        recorder
            .draw_rect(1.0, 2.0, 3.0, 4.0, Color::BLACK)
            .unwrap();
        recorder.end_frame().unwrap();

        assert_eq!(
            recorder.commands(),
            &[
                RectCommand::BeginFrame,
                RectCommand::Rect {
                    x: 1.0,
                    y: 2.0,
                    width: 3.0,
                    height: 4.0,
                    color: Color::BLACK,
                },
                RectCommand::EndFrame,
            ]
        );
    }

    #[test]
    fn rejects_draws_outside_a_frame() {
        let mut recorder = CommandRecorder::new(800, 600);
        assert!(recorder.draw_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK).is_err());
        assert!(recorder.end_frame().is_err());
    }

    #[test]
    fn screen_size_tracks_resizes() {
        let mut recorder = CommandRecorder::new(800, 600);
        recorder.resize(1024, 768);
        assert_eq!(recorder.screen_size(), (1024, 768));
    }
}
