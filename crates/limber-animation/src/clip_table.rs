//! Clip registry keyed by [`ClipId`]

use crate::clip::KeyframeClip;
use crate::state::ClipId;
use limber_core::{LimberError, Result};
use std::collections::HashMap;

/// Holds the clips a figure can play.
#[derive(Debug, Clone)]
pub struct ClipTable {
    clips: HashMap<ClipId, KeyframeClip>,
}

impl ClipTable {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
        }
    }

    /// Register a clip. Overwrites any existing clip with the same id.
    ///
    /// The clip is validated first, which also recomputes its total length
    /// from the frames. Empty clips are refused here so playback never meets
    /// one.
    pub fn add_clip(&mut self, id: ClipId, mut clip: KeyframeClip) -> Result<()> {
        clip.validate()?;
        if clip.total_tic_length() == 0 {
            return Err(LimberError::EmptyClip);
        }
        self.clips.insert(id, clip);
        Ok(())
    }

    /// Look up a clip by id.
    pub fn get_clip(&self, id: ClipId) -> Result<&KeyframeClip> {
        self.clips
            .get(&id)
            .ok_or_else(|| LimberError::ClipNotFound(id.to_string()))
    }

    /// Check if a clip is registered.
    pub fn has_clip(&self, id: ClipId) -> bool {
        self.clips.contains_key(&id)
    }

    /// Number of registered clips.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}

impl Default for ClipTable {
    fn default() -> Self {
        Self::new()
    }
}
