use std::collections::{HashMap, HashSet};
use std::time::Instant;

use anyhow::{Result, anyhow};
use kira::manager::backend::DefaultBackend;
use kira::manager::{AudioManager, AudioManagerSettings};
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};

use crate::traits::audio::{AudioBackend, SoundId};

/// Audio backend backed by kira.
///
/// Decoded payloads are kept as static sounds only until they start playing;
/// `play` hands the data to the playback handle, so a replaced song does not
/// keep its decoded track alive. The monotonic clock is anchored at backend
/// creation and shared by every session played through this backend. Failure
/// to open an output device is a fatal startup error.
pub struct KiraAudio {
    manager: AudioManager,
    sounds: HashMap<u64, StaticSoundData>,
    handles: Vec<StaticSoundHandle>,
    next_id: u64,
    epoch: Instant,
}

impl KiraAudio {
    pub fn new() -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow!("failed to create audio manager: {e}"))?;
        Ok(Self {
            manager,
            sounds: HashMap::new(),
            handles: Vec::new(),
            next_id: 1,
            epoch: Instant::now(),
        })
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AudioBackend for KiraAudio {
    fn decode(&mut self, data: &[u8]) -> Result<SoundId> {
        let cursor = std::io::Cursor::new(data.to_vec());
        let sound_data = StaticSoundData::from_cursor(cursor)
            .map_err(|e| anyhow!("failed to decode audio payload: {e}"))?;

        let id = self.alloc_id();
        self.sounds.insert(id, sound_data);
        Ok(SoundId(id))
    }

    fn play(&mut self, id: SoundId) -> Result<()> {
        let data = self
            .sounds
            .remove(&id.0)
            .ok_or_else(|| anyhow!("sound not found: {id:?}"))?;
        let handle = self
            .manager
            .play(data)
            .map_err(|e| anyhow!("failed to play sound: {e}"))?;
        self.handles.push(handle);
        Ok(())
    }

    fn stop_all(&mut self) {
        for mut handle in self.handles.drain(..) {
            handle.stop(Default::default());
        }
    }

    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Mock audio backend with a settable clock, for tests that need playback
/// state transitions without an output device.
#[derive(Debug, Default)]
pub struct MockAudio {
    now: f64,
    next_id: u64,
    fail_next_decode: bool,
    decoded: HashSet<u64>,
    play_calls: u32,
    stop_all_calls: u32,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    pub fn fail_next_decode(&mut self) {
        self.fail_next_decode = true;
    }

    pub fn play_calls(&self) -> u32 {
        self.play_calls
    }

    pub fn stop_all_calls(&self) -> u32 {
        self.stop_all_calls
    }

    /// Decoded payloads the backend is still holding on to, i.e. decoded but
    /// not yet played.
    pub fn retained_sounds(&self) -> usize {
        self.decoded.len()
    }
}

impl AudioBackend for MockAudio {
    fn decode(&mut self, _data: &[u8]) -> Result<SoundId> {
        if self.fail_next_decode {
            self.fail_next_decode = false;
            return Err(anyhow!("mock decode failure"));
        }
        self.next_id += 1;
        self.decoded.insert(self.next_id);
        Ok(SoundId(self.next_id))
    }

    fn play(&mut self, id: SoundId) -> Result<()> {
        if !self.decoded.remove(&id.0) {
            return Err(anyhow!("sound not found: {id:?}"));
        }
        self.play_calls += 1;
        Ok(())
    }

    fn stop_all(&mut self) {
        self.stop_all_calls += 1;
    }

    fn now(&self) -> f64 {
        self.now
    }
}
