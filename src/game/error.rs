use thiserror::Error;

/// Errors from the song-loading flow. Surfaced once, synchronously, to the
/// caller that triggered the load; steady-state rendering never produces them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no chart payload supplied")]
    MissingChart,

    #[error("no audio payload supplied")]
    MissingAudio,

    #[error("failed to decode audio payload")]
    AudioDecode(#[source] anyhow::Error),

    #[error("failed to start audio playback")]
    AudioStart(#[source] anyhow::Error),
}
