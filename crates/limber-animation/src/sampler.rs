//! Pure keyframe evaluation: locate the active frame, then blend

use crate::clip::KeyframeClip;
use crate::keyframe::Keyframe;
use crate::pose::PoseBuffer;
use limber_core::{easing, LimberError, Result, Vec2};

/// Where a tick falls inside a clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCursor {
    pub current: usize,
    /// Index of the frame after `current`, wrapping to 0
    pub next: usize,
    /// `ticks into current / next frame length`
    pub weight: f64,
}

/// Find the frame containing `tick` (taken modulo the clip length).
///
/// The blend weight divides by the *next* frame's length, not the current
/// one's. With unequal frame lengths the weight can exceed 1 or jump at a
/// boundary; existing clips are authored against that.
pub fn locate(clip: &KeyframeClip, tick: u64) -> Result<FrameCursor> {
    let frames = clip.frames();
    let total = clip.total_tic_length();
    if frames.is_empty() || total == 0 {
        return Err(LimberError::EmptyClip);
    }

    let mut relative = tick % total;
    for (i, frame) in frames.iter().enumerate() {
        let len = frame.length_in_tics as u64;
        if relative < len {
            let next = (i + 1) % frames.len();
            return Ok(FrameCursor {
                current: i,
                next,
                weight: relative as f64 / frames[next].length_in_tics as f64,
            });
        }
        relative -= len;
    }

    // Only reachable if the cached total disagrees with the frames
    Err(LimberError::RuntimeError(format!(
        "tick {} fell past the end of clip '{}'",
        tick, clip.name
    )))
}

/// Blended offset for one bone, or `None` if `current` does not animate it.
///
/// A bone the next frame omits holds the current frame's value.
pub fn blend_offset(current: &Keyframe, next: &Keyframe, bone: &str, weight: f64) -> Option<Vec2> {
    let from = current.offset(bone)?;
    let to = next.offset(bone).unwrap_or(from);
    Some(Vec2::new(
        easing::linear2(from.x, to.x, weight),
        easing::linear2(from.y, to.y, weight),
    ))
}

/// Add the clip's offsets at `tick` into every matching buffer entry
pub fn resolve_into(clip: &KeyframeClip, tick: u64, buffer: &mut PoseBuffer) -> Result<()> {
    let cursor = locate(clip, tick)?;
    let frames = clip.frames();
    let current = &frames[cursor.current];
    let next = &frames[cursor.next];

    for (name, value) in buffer.iter_mut() {
        if let Some(offset) = blend_offset(current, next, name, cursor.weight) {
            *value += offset;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(frames: &[(u32, f64)]) -> KeyframeClip {
        let mut clip = KeyframeClip::new("test");
        for &(len, x) in frames {
            clip.push_frame(Keyframe::new(len).unwrap().with_offset("bone", x, 0.0))
                .unwrap();
        }
        clip
    }

    fn buffer() -> PoseBuffer {
        let mut buffer = PoseBuffer::new();
        buffer.insert("bone", Vec2::ZERO);
        buffer.insert("other", Vec2::new(1.0, 1.0));
        buffer
    }

    #[test]
    fn empty_clip_errors() {
        let clip = KeyframeClip::new("empty");
        assert!(matches!(locate(&clip, 0), Err(LimberError::EmptyClip)));
        assert!(clip.resolve(0, &mut buffer()).is_err());
    }

    #[test]
    fn locate_walks_frames_and_wraps() {
        let clip = clip(&[(10, 0.0), (30, 0.0)]);
        assert_eq!(
            locate(&clip, 5).unwrap(),
            FrameCursor {
                current: 0,
                next: 1,
                weight: 5.0 / 30.0,
            }
        );
        let c = locate(&clip, 15).unwrap();
        assert_eq!((c.current, c.next), (1, 0));
        assert!((c.weight - 0.5).abs() < 1e-12);
        // 45 wraps to 5
        assert_eq!(locate(&clip, 45).unwrap(), locate(&clip, 5).unwrap());
    }

    #[test]
    fn weight_uses_next_frame_length() {
        // 15 ticks into a 20-tick frame followed by a 10-tick frame
        let clip = clip(&[(20, 0.0), (10, 10.0)]);
        let c = locate(&clip, 15).unwrap();
        assert!((c.weight - 1.5).abs() < 1e-12);
    }

    #[test]
    fn single_frame_clip_returns_its_offsets() {
        let clip = clip(&[(10, 7.0)]);
        for tick in [0, 3, 9, 10, 123] {
            let mut buf = buffer();
            clip.resolve(tick, &mut buf).unwrap();
            assert_eq!(buf.get("bone"), Some(Vec2::new(7.0, 0.0)));
        }
    }

    #[test]
    fn interpolates_between_frames() {
        let clip = clip(&[(10, 0.0), (10, 10.0)]);
        let mut buf = buffer();
        clip.resolve(5, &mut buf).unwrap();
        assert!((buf.get("bone").unwrap().x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn loops_with_period_of_total_length() {
        let clip = clip(&[(7, 1.0), (13, 4.0)]);
        for tick in 0..20 {
            let mut a = buffer();
            let mut b = buffer();
            clip.resolve(tick, &mut a).unwrap();
            clip.resolve(tick + 20, &mut b).unwrap();
            assert_eq!(a.get("bone"), b.get("bone"));
        }
    }

    #[test]
    fn resolve_is_additive() {
        let clip = clip(&[(10, 3.0)]);
        let mut buf = buffer();
        clip.resolve(0, &mut buf).unwrap();
        clip.resolve(0, &mut buf).unwrap();
        assert_eq!(buf.get("bone"), Some(Vec2::new(6.0, 0.0)));
    }

    #[test]
    fn unanimated_and_unknown_bones_untouched() {
        let mut clip = clip(&[(10, 3.0)]);
        clip.push_frame(Keyframe::new(10).unwrap().with_offset("ghost", 1.0, 1.0))
            .unwrap();
        let mut buf = buffer();
        clip.resolve(2, &mut buf).unwrap();
        assert_eq!(buf.get("other"), Some(Vec2::new(1.0, 1.0)));
        assert!(!buf.contains("ghost"));
    }

    #[test]
    fn bone_missing_from_next_frame_holds() {
        let a = Keyframe::new(10).unwrap().with_offset("bone", 2.0, 2.0);
        let b = Keyframe::new(10).unwrap();
        assert_eq!(blend_offset(&a, &b, "bone", 0.5), Some(Vec2::new(2.0, 2.0)));
        assert_eq!(blend_offset(&b, &a, "bone", 0.5), None);
    }
}
