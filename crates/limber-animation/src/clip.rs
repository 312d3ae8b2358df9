//! Looping keyframe clips

use crate::keyframe::Keyframe;
use crate::pose::PoseBuffer;
use crate::sampler;
use limber_core::{LimberError, Result};
use serde::{Deserialize, Serialize};

/// An ordered, looping sequence of keyframes.
///
/// `total_tic_length` is kept equal to the sum of the frame lengths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyframeClip {
    pub name: String,
    frames: Vec<Keyframe>,
    total_tic_length: u64,
}

impl KeyframeClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
            total_tic_length: 0,
        }
    }

    /// Builder-style [`push_frame`](Self::push_frame)
    pub fn with_frame(mut self, frame: Keyframe) -> Result<Self> {
        self.push_frame(frame)?;
        Ok(self)
    }

    pub fn push_frame(&mut self, frame: Keyframe) -> Result<()> {
        let index = self.frames.len();
        self.set_frame_at(index, frame)
    }

    /// Store `frame` at `index`.
    ///
    /// `index == frame_count()` appends and an existing index is replaced.
    /// Anything past the end would leave a hole and is rejected.
    pub fn set_frame_at(&mut self, index: usize, frame: Keyframe) -> Result<()> {
        frame.validate()?;
        let len = self.frames.len();
        if index < len {
            self.frames[index] = frame;
            self.total_tic_length = self.frames.iter().map(|f| f.length_in_tics as u64).sum();
        } else if index == len {
            self.total_tic_length += frame.length_in_tics as u64;
            self.frames.push(frame);
        } else {
            return Err(LimberError::SparseKeyframeIndex { index, len });
        }
        Ok(())
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn total_tic_length(&self) -> u64 {
        self.total_tic_length
    }

    /// Add this clip's interpolated offsets at `tick` into `buffer`.
    ///
    /// Accumulates: calling twice doubles the contribution. Bones the buffer
    /// does not hold are ignored.
    pub fn resolve(&self, tick: u64, buffer: &mut PoseBuffer) -> Result<()> {
        sampler::resolve_into(self, tick, buffer)
    }

    /// Copy of this clip with every x offset negated
    pub fn mirrored_x(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: self.frames.iter().map(Keyframe::mirrored_x).collect(),
            total_tic_length: self.total_tic_length,
        }
    }

    /// Recompute the cached total and check every frame (for deserialized clips)
    pub fn validate(&mut self) -> Result<()> {
        for frame in &self.frames {
            frame.validate()?;
        }
        self.total_tic_length = self.frames.iter().map(|f| f.length_in_tics as u64).sum();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limber_core::Vec2;

    fn frame(len: u32, x: f64) -> Keyframe {
        Keyframe::new(len).unwrap().with_offset("bone", x, 0.0)
    }

    #[test]
    fn total_tracks_frames() {
        let mut clip = KeyframeClip::new("walk");
        clip.push_frame(frame(10, 0.0)).unwrap();
        clip.push_frame(frame(30, 0.0)).unwrap();
        assert_eq!(clip.total_tic_length(), 40);

        // Replacing recomputes rather than double counting
        clip.set_frame_at(0, frame(5, 0.0)).unwrap();
        assert_eq!(clip.total_tic_length(), 35);
        assert_eq!(clip.frame_count(), 2);
    }

    #[test]
    fn holes_are_rejected() {
        let mut clip = KeyframeClip::new("sparse");
        let err = clip.set_frame_at(2, frame(10, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            LimberError::SparseKeyframeIndex { index: 2, len: 0 }
        ));
        assert_eq!(clip.frame_count(), 0);
    }

    #[test]
    fn mirrored_keeps_timing() {
        let clip = KeyframeClip::new("right")
            .with_frame(frame(20, 4.0))
            .unwrap();
        let left = clip.mirrored_x("left");
        assert_eq!(left.name, "left");
        assert_eq!(left.total_tic_length(), 20);
        assert_eq!(left.frames()[0].offset("bone"), Some(Vec2::new(-4.0, 0.0)));
    }

    #[test]
    fn validate_recomputes_total() {
        let json = r#"{
            "name": "c",
            "frames": [{"length_in_tics": 4}, {"length_in_tics": 6}],
            "total_tic_length": 0
        }"#;
        let mut clip: KeyframeClip = serde_json::from_str(json).unwrap();
        clip.validate().unwrap();
        assert_eq!(clip.total_tic_length(), 10);
    }
}
