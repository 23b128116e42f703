use crate::model::{ActiveNote, ChartParser, Note, process_chart};
use crate::traits::audio::AudioBackend;

use super::clock::PlaybackClock;
use super::error::LoadError;
use super::scheduler::NoteScheduler;

/// All mutable playback state, owned as one value: the chart, the schedule
/// cursor and active set, the clock, and the score counter.
///
/// Loading a song produces a fully new session rather than mutating fields
/// piecemeal, so the frame loop can never observe a partially updated chart.
#[derive(Debug)]
pub struct PlaybackSession {
    chart: Vec<Note>,
    scheduler: NoteScheduler,
    clock: PlaybackClock,
    score: u32,
    target_y: f32,
}

impl PlaybackSession {
    /// A paused session with no chart, used before the first song loads.
    pub fn idle(target_y: f32) -> Self {
        Self {
            chart: Vec::new(),
            scheduler: NoteScheduler::new(),
            clock: PlaybackClock::paused(),
            score: 0,
            target_y,
        }
    }

    /// Load a song from the two raw payloads and start playback.
    ///
    /// Payload presence is checked and the audio decoded before anything is
    /// mutated; a failed load leaves the previous session (and its audio
    /// source) untouched. On success the previous source is stopped, the new
    /// one starts at offset zero, and the returned session has score 0,
    /// cursor 0, and an empty active set.
    pub fn load_song<P, A>(
        parser: &P,
        audio: &mut A,
        chart_bytes: &[u8],
        audio_bytes: &[u8],
        target_y: f32,
    ) -> Result<Self, LoadError>
    where
        P: ChartParser,
        A: AudioBackend,
    {
        if chart_bytes.is_empty() {
            return Err(LoadError::MissingChart);
        }
        if audio_bytes.is_empty() {
            return Err(LoadError::MissingAudio);
        }

        let sound = audio.decode(audio_bytes).map_err(LoadError::AudioDecode)?;

        let chart_text = String::from_utf8_lossy(chart_bytes);
        let chart = process_chart(parser, &chart_text);

        audio.stop_all();
        audio.play(sound).map_err(LoadError::AudioStart)?;

        Ok(Self {
            chart,
            scheduler: NoteScheduler::new(),
            clock: PlaybackClock::started_at(audio.now()),
            score: 0,
            target_y,
        })
    }

    /// One frame tick: read the clock, run the scheduler, and return the
    /// elapsed playback time. While paused the scheduler does not run and
    /// the reported time snaps to zero.
    pub fn tick<A: AudioBackend>(&mut self, audio: &A) -> f64 {
        let now = self.clock.elapsed(audio.now());
        if !self.clock.is_paused() {
            self.scheduler.advance(&self.chart, now, self.target_y);
        }
        now
    }

    pub fn active_notes(&self) -> &[ActiveNote] {
        self.scheduler.active_notes()
    }

    pub fn cursor(&self) -> usize {
        self.scheduler.cursor()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn chart(&self) -> &[Note] {
        &self.chart
    }

    #[cfg(test)]
    pub(crate) fn force_score(&mut self, score: u32) {
        self.score = score;
    }
}
