/// Pausable elapsed-time source derived from the audio subsystem's clock.
///
/// While paused, `elapsed` reports zero rather than freezing at the pause
/// instant; the scheduler then sees no spawn window until playback resumes.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackClock {
    start_time: f64,
    paused: bool,
}

impl PlaybackClock {
    /// A clock that has not started playing yet.
    pub fn paused() -> Self {
        Self {
            start_time: 0.0,
            paused: true,
        }
    }

    /// Begin playback, anchoring elapsed time to `audio_now`.
    pub fn started_at(audio_now: f64) -> Self {
        Self {
            start_time: audio_now,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds of playback elapsed at the audio-clock reading `audio_now`.
    pub fn elapsed(&self, audio_now: f64) -> f64 {
        if self.paused {
            0.0
        } else {
            audio_now - self.start_time
        }
    }
}
