use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use winit::window::Window;

use crate::config::PlayfieldConfig;
use crate::game::PlaybackSession;
use crate::model::JsonChartParser;
use crate::render::playfield::Playfield;
use crate::render::wgpu_renderer::WgpuRectRenderer;
use crate::render::window::GameLoop;
use crate::traits::audio::AudioBackend;
use crate::traits::render::RectBackend;

/// Top-level per-frame driver: owns the playback session, the audio backend,
/// and the renderer, and wires them together once per display refresh.
///
/// A song supplied before the window exists is loaded during `init`, so the
/// first frame already observes a fully populated session.
pub struct App<A: AudioBackend> {
    playfield: Playfield,
    parser: JsonChartParser,
    audio: A,
    session: PlaybackSession,
    renderer: Option<WgpuRectRenderer>,
    window: Option<Arc<Window>>,
    pending_song: Option<(Vec<u8>, Vec<u8>)>,
    shown_score: Option<u32>,
}

impl<A: AudioBackend> App<A> {
    pub fn new(config: PlayfieldConfig, audio: A, song: Option<(Vec<u8>, Vec<u8>)>) -> Self {
        let target_y = config.target_y();
        Self {
            playfield: Playfield::new(config),
            parser: JsonChartParser,
            audio,
            session: PlaybackSession::idle(target_y),
            renderer: None,
            window: None,
            pending_song: song,
            shown_score: None,
        }
    }

    /// Load a song from the two raw payloads, replacing all playback state
    /// atomically. On failure the current session keeps playing.
    pub fn load_song(&mut self, chart_bytes: &[u8], audio_bytes: &[u8]) -> Result<()> {
        let session = PlaybackSession::load_song(
            &self.parser,
            &mut self.audio,
            chart_bytes,
            audio_bytes,
            self.playfield.config().target_y(),
        )?;
        info!(notes = session.chart().len(), "song loaded");
        self.session = session;
        self.shown_score = None;
        Ok(())
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Score/UI overlay. Text rendering is outside the rect pipeline, so the
    /// score is surfaced through the window title.
    fn draw_overlay(&mut self) {
        let score = self.session.score();
        if self.shown_score != Some(score)
            && let Some(window) = &self.window
        {
            window.set_title(&format!("fretfall - score: {score}"));
            self.shown_score = Some(score);
        }
    }
}

impl<A: AudioBackend> GameLoop for App<A> {
    fn init(&mut self, window: Arc<Window>) -> Result<()> {
        let renderer = pollster::block_on(WgpuRectRenderer::new(window.clone()))?;
        self.renderer = Some(renderer);
        self.window = Some(window);

        if let Some((chart, audio)) = self.pending_song.take()
            && let Err(e) = self.load_song(&chart, &audio)
        {
            error!("failed to load song: {e:#}");
        }
        Ok(())
    }

    fn update(&mut self) {
        self.session.tick(&self.audio);
    }

    fn render(&mut self) -> Result<()> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        renderer.begin_frame()?;
        self.playfield.draw(renderer, self.session.active_notes())?;
        renderer.end_frame()?;
        self.draw_overlay();
        Ok(())
    }

    fn should_close(&self) -> bool {
        true
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
    }
}
