//! The stock 15-bone stick figure and its clips

use crate::bone::Skeleton;
use crate::clip::KeyframeClip;
use crate::clip_table::ClipTable;
use crate::figure::{BendSigns, Rig};
use crate::keyframe::Keyframe;
use crate::state::ClipId;
use limber_core::Result;
use log::debug;

pub const PELVIS: &str = "pelvis";
pub const NECK: &str = "neck";
pub const HEAD: &str = "head";
pub const LEFT_HIP: &str = "left_hip";
pub const LEFT_KNEE: &str = "left_knee";
pub const LEFT_FOOT: &str = "left_foot";
pub const RIGHT_HIP: &str = "right_hip";
pub const RIGHT_KNEE: &str = "right_knee";
pub const RIGHT_FOOT: &str = "right_foot";
pub const LEFT_SHOULDER: &str = "left_shoulder";
pub const LEFT_ELBOW: &str = "left_elbow";
pub const LEFT_HAND: &str = "left_hand";
pub const RIGHT_SHOULDER: &str = "right_shoulder";
pub const RIGHT_ELBOW: &str = "right_elbow";
pub const RIGHT_HAND: &str = "right_hand";

/// Rest offsets, parents first
const BONES: [(&str, Option<&str>, f64, f64); 15] = [
    (PELVIS, None, 0.0, 42.0),
    (NECK, Some(PELVIS), 0.0, 30.0),
    (HEAD, Some(NECK), 0.0, 16.0),
    (LEFT_HIP, Some(PELVIS), 0.0, 2.0),
    (LEFT_KNEE, Some(LEFT_HIP), 0.0, -25.0),
    (LEFT_FOOT, Some(LEFT_KNEE), 0.0, -28.0),
    (RIGHT_HIP, Some(PELVIS), 0.0, 2.0),
    (RIGHT_KNEE, Some(RIGHT_HIP), 0.0, -25.0),
    (RIGHT_FOOT, Some(RIGHT_KNEE), 0.0, -28.0),
    (LEFT_SHOULDER, Some(NECK), 0.0, 0.0),
    (LEFT_ELBOW, Some(LEFT_SHOULDER), 0.0, -18.0),
    (LEFT_HAND, Some(LEFT_ELBOW), 0.0, -20.0),
    (RIGHT_SHOULDER, Some(NECK), 0.0, 0.0),
    (RIGHT_ELBOW, Some(RIGHT_SHOULDER), 0.0, -18.0),
    (RIGHT_HAND, Some(RIGHT_ELBOW), 0.0, -20.0),
];

pub fn stick_figure_skeleton() -> Result<Skeleton> {
    let mut skeleton = Skeleton::new();
    for (name, parent, x, y) in BONES {
        skeleton.add_pos(x, y, name, parent)?;
    }
    Ok(skeleton)
}

/// Feet and hands spread, shared by both breathing frames
fn idle_frame(pelvis_y: f64, hand_y: f64) -> Result<Keyframe> {
    let frame = Keyframe::new(40)?
        .with_offset(PELVIS, 0.0, pelvis_y)
        .with_offset(LEFT_HIP, 8.0, 0.0)
        .with_offset(RIGHT_HIP, -8.0, 0.0)
        .with_offset(LEFT_FOOT, 8.0, 0.0)
        .with_offset(RIGHT_FOOT, -5.0, 0.0)
        .with_offset(LEFT_SHOULDER, 8.0, 0.0)
        .with_offset(RIGHT_SHOULDER, -8.0, 0.0)
        .with_offset(LEFT_HAND, 15.0, hand_y)
        .with_offset(RIGHT_HAND, -5.0, hand_y);
    Ok(frame)
}

pub fn idle_clip() -> Result<KeyframeClip> {
    KeyframeClip::new("idle")
        .with_frame(idle_frame(-1.0, 8.0)?)?
        .with_frame(idle_frame(-5.0, 5.0)?)
}

/// Leaning into the run with arms swung forward
pub fn run_right_clip() -> Result<KeyframeClip> {
    let stride = || -> Result<Keyframe> {
        let frame = Keyframe::new(20)?
            .with_offset(HEAD, 3.0, -1.0)
            .with_offset(NECK, 5.0, -2.0)
            .with_offset(PELVIS, 0.0, -6.0)
            .with_offset(LEFT_HAND, 0.0, 12.0)
            .with_offset(RIGHT_HAND, 0.0, 12.0);
        Ok(frame)
    };
    KeyframeClip::new("run-right")
        .with_frame(stride()?)?
        .with_frame(stride()?)
}

/// Knees tucked and arms raised
pub fn jump_clip() -> Result<KeyframeClip> {
    let tucked = Keyframe::new(10)?
        .with_offset(PELVIS, 0.0, -2.0)
        .with_offset(LEFT_FOOT, 6.0, 10.0)
        .with_offset(RIGHT_FOOT, -6.0, 10.0)
        .with_offset(LEFT_HAND, 10.0, 30.0)
        .with_offset(RIGHT_HAND, -10.0, 30.0);
    KeyframeClip::new("jump").with_frame(tucked)
}

/// Arms flung out, one leg reaching for the floor
pub fn fall_clip() -> Result<KeyframeClip> {
    let flailing = Keyframe::new(10)?
        .with_offset(LEFT_FOOT, 4.0, 4.0)
        .with_offset(RIGHT_FOOT, -4.0, 0.0)
        .with_offset(LEFT_HAND, 18.0, 25.0)
        .with_offset(RIGHT_HAND, -18.0, 25.0);
    KeyframeClip::new("fall").with_frame(flailing)
}

/// Wind up behind, then strike forward with the right hand
pub fn attack_right_clip() -> Result<KeyframeClip> {
    let wind_up = Keyframe::new(12)?
        .with_offset(NECK, -2.0, 0.0)
        .with_offset(RIGHT_HAND, -10.0, 10.0);
    let strike = Keyframe::new(8)?
        .with_offset(NECK, 4.0, 0.0)
        .with_offset(RIGHT_SHOULDER, 4.0, 0.0)
        .with_offset(RIGHT_HAND, 30.0, 25.0);
    KeyframeClip::new("attack-right")
        .with_frame(wind_up)?
        .with_frame(strike)
}

pub fn stock_clips() -> Result<ClipTable> {
    let run_right = run_right_clip()?;
    let run_left = run_right.mirrored_x("run-left");
    let attack_right = attack_right_clip()?;
    let attack_left = attack_right.mirrored_x("attack-left");

    let mut table = ClipTable::new();
    table.add_clip(ClipId::Idle, idle_clip()?)?;
    table.add_clip(ClipId::RunLeft, run_left)?;
    table.add_clip(ClipId::RunRight, run_right)?;
    table.add_clip(ClipId::Jump, jump_clip()?)?;
    table.add_clip(ClipId::Fall, fall_clip()?)?;
    table.add_clip(ClipId::AttackLeft, attack_left)?;
    table.add_clip(ClipId::AttackRight, attack_right)?;
    Ok(table)
}

/// The stock figure: IK on all four limbs, feet clamped to the floor, feet
/// and hands planted while running.
///
/// Knees bend towards the facing direction and elbows away from it.
pub fn stick_figure_rig() -> Result<Rig> {
    let skeleton = stick_figure_skeleton()?;
    debug!("stock skeleton built with {} bones", skeleton.len());
    let legs = BendSigns::mirrored(1.0);
    let arms = BendSigns::mirrored(-1.0);

    Rig::new(skeleton, stock_clips()?)?
        .with_limb(LEFT_HIP, LEFT_KNEE, LEFT_FOOT, legs)?
        .with_limb(RIGHT_HIP, RIGHT_KNEE, RIGHT_FOOT, legs)?
        .with_limb(LEFT_SHOULDER, LEFT_ELBOW, LEFT_HAND, arms)?
        .with_limb(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_HAND, arms)?
        .with_grounded(LEFT_FOOT)?
        .with_grounded(RIGHT_FOOT)?
        .with_planted(LEFT_FOOT)?
        .with_planted(RIGHT_FOOT)?
        .with_planted(LEFT_HAND)?
        .with_planted(RIGHT_HAND)?
        .with_stride(RIGHT_KNEE, RIGHT_FOOT)?
        .with_head(HEAD)
}
