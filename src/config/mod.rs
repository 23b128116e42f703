use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::LANE_COUNT;

/// Playfield geometry: an 800x600 canvas, 20 px notes, and the target line
/// 50 px above the bottom edge by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: f32,
    pub height: f32,
    pub note_height: f32,
    /// Distance from the bottom edge to the target line.
    pub target_inset: f32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            note_height: 20.0,
            target_inset: 50.0,
        }
    }
}

impl PlayfieldConfig {
    /// Load the config from a JSON file, falling back to defaults if no path
    /// is given or the file cannot be used.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from_file(path).unwrap_or_else(|e| {
                warn!("failed to load config {}: {e:#}", path.display());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn lane_width(&self) -> f32 {
        self.width / LANE_COUNT as f32
    }

    /// Vertical position of the target line, where notes are "hit".
    pub fn target_y(&self) -> f32 {
        self.height - self.target_inset
    }
}
