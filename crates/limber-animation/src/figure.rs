//! Stick-figure orchestrator
//!
//! [`StickFigure`] owns the pose buffer and runs the whole per-frame
//! pipeline: rest pose, clip offsets, world placement, forward kinematics,
//! floor clamp, foot planting, two-bone IK, then emission to a
//! [`Renderer`].
//!
//! The only state carried between frames is the plant cache: the last
//! horizontal position of every planted effector. It is read while planting
//! and rewritten at the end of that step every frame.

use crate::bone::{BoneId, Skeleton};
use crate::clip_table::ClipTable;
use crate::ik;
use crate::pose::PoseBuffer;
use crate::render::Renderer;
use crate::state::{select_clip, Attack, ClipId, MotionState};
use limber_core::{Color, LimberError, Result, Vec2};
use log::{debug, trace, warn};
use serde::Serialize;

const LEGEND_X: f64 = 10.0;
const LEGEND_Y: f64 = 10.0;
const LEGEND_ROW: f64 = 15.0;
const LEGEND_SWATCH: f64 = 10.0;
const LEGEND_HIT_WIDTH: f64 = 90.0;
const PALETTE_STEPS: f64 = 14.0;

/// Which way the figure is facing. Only horizontal velocity changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// IK bend sign for each facing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendSigns {
    pub facing_right: f64,
    pub facing_left: f64,
}

impl BendSigns {
    /// Bend `right` when facing right and the mirror when facing left
    pub fn mirrored(right: f64) -> Self {
        Self {
            facing_right: right,
            facing_left: -right,
        }
    }

    pub fn for_facing(&self, facing: Facing) -> f64 {
        match facing {
            Facing::Right => self.facing_right,
            Facing::Left => self.facing_left,
        }
    }
}

/// A base→joint→end-effector chain solved with two-bone IK
#[derive(Debug, Clone)]
pub struct LimbChain {
    pub base: BoneId,
    pub joint: BoneId,
    pub end_effector: BoneId,
    pub bend: BendSigns,
}

impl LimbChain {
    /// Look the chain up by name, checking the three bones really are
    /// parent and child
    pub fn named(
        skeleton: &Skeleton,
        base: &str,
        joint: &str,
        end_effector: &str,
        bend: BendSigns,
    ) -> Result<Self> {
        let base_id = skeleton.id(base)?;
        let joint_id = skeleton.id(joint)?;
        let effector_id = skeleton.id(end_effector)?;

        if skeleton.bone(joint_id)?.parent != Some(base_id) {
            return Err(LimberError::InvalidParameter {
                name: joint.to_string(),
                reason: format!("parent is not {}", base),
            });
        }
        if skeleton.bone(effector_id)?.parent != Some(joint_id) {
            return Err(LimberError::InvalidParameter {
                name: end_effector.to_string(),
                reason: format!("parent is not {}", joint),
            });
        }

        Ok(Self {
            base: base_id,
            joint: joint_id,
            end_effector: effector_id,
            bend,
        })
    }
}

/// Static configuration of a figure: skeleton, clips and which bones get
/// IK, planting and the floor clamp
#[derive(Debug, Clone)]
pub struct Rig {
    pub skeleton: Skeleton,
    pub clips: ClipTable,
    pub limbs: Vec<LimbChain>,
    /// Effectors that stay put horizontally while running
    pub planted: Vec<BoneId>,
    /// Effectors kept at or above the floor
    pub grounded: Vec<BoneId>,
    /// Joint and effector whose lengths give the leg reach for stepping
    pub stride: Option<(BoneId, BoneId)>,
    /// Bone drawn with a head rectangle
    pub head: Option<BoneId>,
}

impl Rig {
    /// A rig without IK, planting or head. Every clip id must be present.
    pub fn new(skeleton: Skeleton, clips: ClipTable) -> Result<Self> {
        skeleton.root()?;
        for id in ClipId::ALL {
            if !clips.has_clip(id) {
                return Err(LimberError::ClipNotFound(id.to_string()));
            }
        }
        Ok(Self {
            skeleton,
            clips,
            limbs: Vec::new(),
            planted: Vec::new(),
            grounded: Vec::new(),
            stride: None,
            head: None,
        })
    }

    pub fn with_limb(
        mut self,
        base: &str,
        joint: &str,
        effector: &str,
        bend: BendSigns,
    ) -> Result<Self> {
        let limb = LimbChain::named(&self.skeleton, base, joint, effector, bend)?;
        self.limbs.push(limb);
        Ok(self)
    }

    pub fn with_planted(mut self, name: &str) -> Result<Self> {
        self.planted.push(self.skeleton.id(name)?);
        Ok(self)
    }

    pub fn with_grounded(mut self, name: &str) -> Result<Self> {
        self.grounded.push(self.skeleton.id(name)?);
        Ok(self)
    }

    pub fn with_stride(mut self, joint: &str, effector: &str) -> Result<Self> {
        self.stride = Some((self.skeleton.id(joint)?, self.skeleton.id(effector)?));
        Ok(self)
    }

    pub fn with_head(mut self, name: &str) -> Result<Self> {
        self.head = Some(self.skeleton.id(name)?);
        Ok(self)
    }
}

/// Line and head styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub line_thickness: f64,
    pub head_width: f64,
    pub head_height: f64,
    pub color: Color,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            line_thickness: 6.0,
            head_width: 16.0,
            head_height: 20.0,
            color: Color::RED,
        }
    }
}

/// A line from a bone to its parent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub bone: String,
    pub from: Vec2,
    pub to: Vec2,
}

/// Snapshot of one solved frame
#[derive(Debug, Clone, Serialize)]
pub struct Pose {
    pub tick: u64,
    pub clip: ClipId,
    pub facing: Facing,
    /// Distance the feet may trail the body before stepping
    pub step_reach: f64,
    pub joints: PoseBuffer,
    pub segments: Vec<Segment>,
}

pub struct StickFigure {
    rig: Rig,
    buffer: PoseBuffer,
    /// Last x of each planted effector, aligned with `rig.planted`
    plant_cache: Vec<Option<f64>>,
    velocity: Vec2,
    facing: Facing,
    attack: Option<Attack>,
    override_clip: Option<ClipId>,
    style: FigureStyle,
    pub debug: bool,
    current_clip: Option<ClipId>,
    step_reach: f64,
}

impl StickFigure {
    pub fn new(rig: Rig) -> Self {
        let buffer = PoseBuffer::from_skeleton(&rig.skeleton);
        let plant_cache = vec![None; rig.planted.len()];
        Self {
            rig,
            buffer,
            plant_cache,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            attack: None,
            override_clip: None,
            style: FigureStyle::default(),
            debug: false,
            current_clip: None,
            step_reach: 0.0,
        }
    }

    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        if velocity.x > 0.0 {
            self.facing = Facing::Right;
        } else if velocity.x < 0.0 {
            self.facing = Facing::Left;
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Latch a left attack. Ignored while another attack is latched.
    pub fn attack_left(&mut self) {
        self.attack.get_or_insert(Attack::Left);
    }

    /// Latch a right attack. Ignored while another attack is latched.
    pub fn attack_right(&mut self) {
        self.attack.get_or_insert(Attack::Right);
    }

    pub fn attack(&self) -> Option<Attack> {
        self.attack
    }

    pub fn reset_attacks(&mut self) {
        self.attack = None;
    }

    /// Force a clip regardless of motion; `None` returns to automatic
    /// selection
    pub fn set_override(&mut self, clip: Option<ClipId>) {
        self.override_clip = clip;
    }

    /// Clip chosen by the most recent update
    pub fn current_clip(&self) -> Option<ClipId> {
        self.current_clip
    }

    pub fn buffer(&self) -> &PoseBuffer {
        &self.buffer
    }

    pub fn plant_cache(&self) -> &[Option<f64>] {
        &self.plant_cache
    }

    /// Forget where planted effectors were, e.g. after a teleport
    pub fn reset_plants(&mut self) {
        self.plant_cache.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn motion_state(&self, position: Vec2) -> MotionState {
        MotionState {
            position,
            velocity: self.velocity,
            attack: self.attack,
            override_clip: self.override_clip,
        }
    }

    /// Solve the pose for one frame into the internal buffer.
    ///
    /// `position` is relative to the floor; the root ends up at
    /// `position + (0, floor_height)` plus its rest and clip offsets.
    pub fn update(&mut self, position: Vec2, tick: u64, floor_height: f64) -> Result<ClipId> {
        let clip_id = select_clip(&self.motion_state(position));
        if self.current_clip != Some(clip_id) {
            debug!(
                "clip {} -> {} at tick {}",
                self.current_clip.map_or("none", |c| c.as_str()),
                clip_id,
                tick
            );
            self.current_clip = Some(clip_id);
        }

        let skeleton = &self.rig.skeleton;
        for (id, bone) in skeleton.iter() {
            *self.buffer.by_id_mut(id)? = bone.rest_offset;
        }

        let clip = self.rig.clips.get_clip(clip_id)?;
        clip.resolve(tick, &mut self.buffer)?;

        let root = skeleton.root()?;
        let pelvis_height = self.buffer.by_id(root)?.y;
        *self.buffer.by_id_mut(root)? += position + Vec2::new(0.0, floor_height);
        forward_kinematics(skeleton, &mut self.buffer, root)?;

        for &id in &self.rig.grounded {
            let p = self.buffer.by_id_mut(id)?;
            p.y = p.y.max(floor_height);
        }

        self.step_reach = self.plant_effectors(position, pelvis_height)?;

        for limb in &self.rig.limbs {
            let l1 = self.rig.skeleton.bone(limb.joint)?.length;
            let l2 = self.rig.skeleton.bone(limb.end_effector)?.length;
            let joint = ik::solve_global(
                l1,
                l2,
                self.buffer.by_id(limb.end_effector)?,
                self.buffer.by_id(limb.base)?,
                limb.bend.for_facing(self.facing),
            );
            *self.buffer.by_id_mut(limb.joint)? = joint;
        }

        Ok(clip_id)
    }

    /// Keep planted effectors where they were while running, stepping ahead
    /// once the body gets a full stride away. Returns the stride length.
    fn plant_effectors(&mut self, position: Vec2, pelvis_height: f64) -> Result<f64> {
        let Some((joint, effector)) = self.rig.stride else {
            return Ok(0.0);
        };
        let skeleton = &self.rig.skeleton;
        let reach = skeleton.bone(joint)?.length + skeleton.bone(effector)?.length;
        let span = reach * reach - pelvis_height * pelvis_height;
        if span < 0.0 {
            warn!(
                "pelvis offset {:.1} exceeds leg reach {:.1}, planting disabled",
                pelvis_height, reach
            );
        }
        let stride = span.max(0.0).sqrt();
        let running = self.velocity.x != 0.0 && self.velocity.y == 0.0;

        for (slot, &id) in self.plant_cache.iter_mut().zip(&self.rig.planted) {
            let p = self.buffer.by_id_mut(id)?;
            if let (true, Some(last_x)) = (running, *slot) {
                p.x = last_x;
                if self.velocity.x > 0.0 && position.x - last_x >= stride {
                    p.x = position.x + stride;
                    trace!("step right to {:.1}", p.x);
                } else if self.velocity.x < 0.0 && last_x - position.x >= stride {
                    p.x = position.x - stride;
                    trace!("step left to {:.1}", p.x);
                }
            }
            *slot = Some(p.x);
        }
        Ok(stride)
    }

    /// Segments from each non-root bone to its parent, in skeleton order
    pub fn segments(&self) -> Result<Vec<Segment>> {
        let mut segments = Vec::with_capacity(self.rig.skeleton.len());
        for (id, bone) in self.rig.skeleton.iter() {
            if let Some(parent) = bone.parent {
                segments.push(Segment {
                    bone: bone.name.clone(),
                    from: self.buffer.by_id(id)?,
                    to: self.buffer.by_id(parent)?,
                });
            }
        }
        Ok(segments)
    }

    /// Solve a frame and return a snapshot of it
    pub fn pose(&mut self, position: Vec2, tick: u64, floor_height: f64) -> Result<Pose> {
        let clip = self.update(position, tick, floor_height)?;
        Ok(Pose {
            tick,
            clip,
            facing: self.facing,
            step_reach: self.step_reach,
            joints: self.buffer.clone(),
            segments: self.segments()?,
        })
    }

    /// Solve a frame and draw it. Nothing is drawn if solving fails.
    pub fn draw(
        &mut self,
        renderer: &mut dyn Renderer,
        position: Vec2,
        tick: u64,
        floor_height: f64,
    ) -> Result<()> {
        self.update(position, tick, floor_height)?;

        for (id, bone) in self.rig.skeleton.iter() {
            let Some(parent) = bone.parent else { continue };
            let color = if self.debug {
                bone_color(id)
            } else {
                self.style.color
            };
            renderer.draw_line(
                self.buffer.by_id(id)?,
                self.buffer.by_id(parent)?,
                self.style.line_thickness,
                color,
            );
        }

        if let Some(head) = self.rig.head {
            let p = self.buffer.by_id(head)?;
            let color = if self.debug {
                bone_color(head)
            } else {
                self.style.color
            };
            renderer.draw_rect(
                p.x - self.style.head_width / 2.0,
                p.y - self.style.head_height / 2.0,
                self.style.head_width,
                self.style.head_height,
                color,
            );
        }

        if self.debug {
            self.draw_debug(renderer, position, floor_height)?;
        }
        Ok(())
    }

    fn draw_debug(
        &self,
        renderer: &mut dyn Renderer,
        position: Vec2,
        floor_height: f64,
    ) -> Result<()> {
        for (id, bone) in self.rig.skeleton.iter() {
            let y = LEGEND_Y + LEGEND_ROW * id.0 as f64;
            renderer.draw_rect(LEGEND_X, y, LEGEND_SWATCH, LEGEND_SWATCH, bone_color(id));
            renderer.text(
                LEGEND_X + LEGEND_SWATCH + 5.0,
                y + 2.0,
                &bone.name,
                Color::WHITE,
            );
        }

        let ground = Vec2::new(position.x, position.y + floor_height);
        renderer.stroke_circle(ground, 3.0, Color::ORANGE);
        let root = self.rig.skeleton.root()?;
        renderer.stroke_circle(self.buffer.by_id(root)?, 5.0, Color::YELLOW);

        if self.rig.stride.is_none() {
            return Ok(());
        }
        let ahead = Vec2::new(position.x + self.step_reach, ground.y);
        let behind = Vec2::new(position.x - self.step_reach, ground.y);
        renderer.stroke_circle(ahead, 3.0, Color::LIME_GREEN);
        renderer.stroke_circle(behind, 3.0, Color::LIME_GREEN);

        // Knee position the solver gives each leg with its current foot
        for limb in &self.rig.limbs {
            if !self.rig.grounded.contains(&limb.end_effector) {
                continue;
            }
            let l1 = self.rig.skeleton.bone(limb.joint)?.length;
            let l2 = self.rig.skeleton.bone(limb.end_effector)?.length;
            let base = self.buffer.by_id(limb.base)?;
            let foot = self.buffer.by_id(limb.end_effector)?;
            let joint = ik::solve_global(l1, l2, foot, base, 1.0);
            renderer.stroke_circle(joint, 3.0, Color::LIME_GREEN);
        }
        Ok(())
    }

    /// Name of the bone whose legend row contains `(x, y)`, if any
    pub fn debug_info_at(&self, x: f64, y: f64) -> Option<&str> {
        if x <= LEGEND_X || x >= LEGEND_X + LEGEND_HIT_WIDTH {
            return None;
        }
        self.rig.skeleton.iter().find_map(|(id, bone)| {
            let top = LEGEND_Y + LEGEND_ROW * id.0 as f64;
            (y > top && y < top + LEGEND_SWATCH).then_some(bone.name.as_str())
        })
    }
}

/// Debug palette colour for a bone
pub fn bone_color(id: BoneId) -> Color {
    let hue = id.0 as f64 * 360.0 / PALETTE_STEPS;
    Color::from_hsl(hue as f32, 1.0, 0.5)
}

/// Turn parent-relative offsets into absolute positions, depth first from
/// `id`
fn forward_kinematics(skeleton: &Skeleton, buffer: &mut PoseBuffer, id: BoneId) -> Result<()> {
    let origin = buffer.by_id(id)?;
    for &child in &skeleton.bone(id)?.children {
        *buffer.by_id_mut(child)? += origin;
        forward_kinematics(skeleton, buffer, child)?;
    }
    Ok(())
}
