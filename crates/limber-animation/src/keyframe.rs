//! A single keyframe: a duration plus sparse per-bone offsets

use limber_core::{LimberError, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Offsets added on top of the rest pose while this frame is active.
///
/// Bones missing from `bone_offsets` are left untouched by the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Duration in ticks, always at least 1
    pub length_in_tics: u32,
    #[serde(default)]
    pub bone_offsets: HashMap<String, Vec2>,
}

impl Keyframe {
    pub fn new(length_in_tics: u32) -> Result<Self> {
        if length_in_tics == 0 {
            return Err(LimberError::InvalidKeyframe(
                "length_in_tics must be at least 1".into(),
            ));
        }
        Ok(Self {
            length_in_tics,
            bone_offsets: HashMap::new(),
        })
    }

    /// Builder-style offset insertion
    pub fn with_offset(mut self, bone: &str, x: f64, y: f64) -> Self {
        self.bone_offsets.insert(bone.to_string(), Vec2::new(x, y));
        self
    }

    pub fn offset(&self, bone: &str) -> Option<Vec2> {
        self.bone_offsets.get(bone).copied()
    }

    /// Same frame with every x offset negated
    pub fn mirrored_x(&self) -> Self {
        Self {
            length_in_tics: self.length_in_tics,
            bone_offsets: self
                .bone_offsets
                .iter()
                .map(|(name, v)| (name.clone(), Vec2::new(-v.x, v.y)))
                .collect(),
        }
    }

    /// Check invariants on a frame that did not go through [`Keyframe::new`]
    pub fn validate(&self) -> Result<()> {
        if self.length_in_tics == 0 {
            return Err(LimberError::InvalidKeyframe(
                "length_in_tics must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_rejected() {
        assert!(matches!(
            Keyframe::new(0),
            Err(LimberError::InvalidKeyframe(_))
        ));
    }

    #[test]
    fn builder_and_mirror() {
        let frame = Keyframe::new(20)
            .unwrap()
            .with_offset("head", 3.0, -1.0)
            .with_offset("pelvis", 0.0, -6.0);
        let mirrored = frame.mirrored_x();
        assert_eq!(mirrored.length_in_tics, 20);
        assert_eq!(mirrored.offset("head"), Some(Vec2::new(-3.0, -1.0)));
        assert_eq!(mirrored.offset("pelvis").unwrap().y, -6.0);
        assert_eq!(mirrored.offset("neck"), None);
    }

    #[test]
    fn deserialized_zero_length_fails_validation() {
        let frame: Keyframe = serde_json::from_str(r#"{"length_in_tics":0}"#).unwrap();
        assert!(frame.validate().is_err());
    }
}
