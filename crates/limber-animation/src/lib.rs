//! Skeletal stick-figure animation for Limber
//!
//! The per-frame pipeline owned by [`figure::StickFigure`]:
//! 1. Reset the pose buffer to the rest pose
//! 2. Add the active keyframe clip's interpolated offsets
//! 3. Place the root in the world and run forward kinematics
//! 4. Clamp grounded effectors and plant feet while running
//! 5. Correct limb joints with the analytic two-bone IK solver
//! 6. Emit bone segments to a [`render::Renderer`]

pub mod bone;
pub mod clip;
pub mod clip_table;
pub mod figure;
pub mod ik;
pub mod keyframe;
pub mod pose;
pub mod render;
pub mod rig;
pub mod sampler;
pub mod state;

pub use bone::{Bone, BoneId, Skeleton};
pub use clip::KeyframeClip;
pub use clip_table::ClipTable;
pub use figure::{BendSigns, Facing, FigureStyle, LimbChain, Pose, Rig, Segment, StickFigure};
pub use keyframe::Keyframe;
pub use pose::PoseBuffer;
pub use render::{CommandRecorder, DrawCommand, Renderer};
pub use state::{select_clip, Attack, ClipId, MotionState};
