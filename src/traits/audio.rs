use anyhow::Result;

/// Handle for referencing decoded sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u64);

/// Abstraction over audio backends.
/// Implementations: KiraAudio (production), MockAudio (testing).
pub trait AudioBackend {
    /// Decode an audio payload held in memory. Fails on malformed data;
    /// the caller treats this as a fatal load error.
    fn decode(&mut self, data: &[u8]) -> Result<SoundId>;

    /// Start playback of a decoded sound from the beginning. Playing
    /// consumes the decoded data, so each `SoundId` is playable once.
    fn play(&mut self, id: SoundId) -> Result<()>;

    /// Stop every playing source. Used when a new song replaces the current one.
    fn stop_all(&mut self);

    /// Monotonic clock of the audio subsystem, in seconds.
    fn now(&self) -> f64;
}
