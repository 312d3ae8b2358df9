//! Choosing the active clip from a character's motion

use limber_core::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The clips a stick figure can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipId {
    Idle,
    RunLeft,
    RunRight,
    Jump,
    Fall,
    AttackLeft,
    AttackRight,
}

impl ClipId {
    pub const ALL: [ClipId; 7] = [
        ClipId::Idle,
        ClipId::RunLeft,
        ClipId::RunRight,
        ClipId::Jump,
        ClipId::Fall,
        ClipId::AttackLeft,
        ClipId::AttackRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClipId::Idle => "idle",
            ClipId::RunLeft => "run-left",
            ClipId::RunRight => "run-right",
            ClipId::Jump => "jump",
            ClipId::Fall => "fall",
            ClipId::AttackLeft => "attack-left",
            ClipId::AttackRight => "attack-right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latched attack request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attack {
    Left,
    Right,
}

/// Everything clip selection looks at. `position.y` is height above the
/// floor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub attack: Option<Attack>,
    pub override_clip: Option<ClipId>,
}

impl MotionState {
    pub fn is_jumping(&self) -> bool {
        self.velocity.y > 0.0 && self.position.y > 0.0
    }

    pub fn is_falling(&self) -> bool {
        self.velocity.y <= 0.0 && self.position.y != 0.0
    }

    /// Moving horizontally with no vertical velocity
    pub fn is_running(&self) -> bool {
        self.velocity.x != 0.0 && self.velocity.y == 0.0
    }
}

type Guard = fn(&MotionState) -> Option<ClipId>;

/// Guards in precedence order; the first to match wins
const GUARDS: [Guard; 4] = [
    |s| s.override_clip,
    |s| {
        s.attack.map(|a| match a {
            Attack::Left => ClipId::AttackLeft,
            Attack::Right => ClipId::AttackRight,
        })
    },
    |s| {
        if s.is_jumping() {
            Some(ClipId::Jump)
        } else if s.is_falling() {
            Some(ClipId::Fall)
        } else {
            None
        }
    },
    |s| match s.is_running() {
        true if s.velocity.x > 0.0 => Some(ClipId::RunRight),
        true => Some(ClipId::RunLeft),
        false => None,
    },
];

/// Pick the clip to play: override, then attack, then airborne, then
/// running, falling back to idle.
pub fn select_clip(state: &MotionState) -> ClipId {
    GUARDS
        .iter()
        .find_map(|guard| guard(state))
        .unwrap_or(ClipId::Idle)
}
