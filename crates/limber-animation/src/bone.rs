//! Bone tree stored as an arena
//!
//! Bones reference their parent and children by [`BoneId`] (the index into
//! the skeleton's bone list) instead of holding references to each other.
//! A bone can only be added after its parent, so the arena is always in
//! topological order and can never contain a cycle.

use limber_core::{LimberError, Result, Vec2};
use serde::Serialize;
use std::collections::HashMap;

/// Stable index of a bone inside its [`Skeleton`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct BoneId(pub usize);

/// A node in the bone tree.
///
/// `rest_offset`, `length` and `angle` all describe the same rest-pose
/// displacement from the parent, in cartesian and polar form.
#[derive(Debug, Clone)]
pub struct Bone {
    pub name: String,
    pub parent: Option<BoneId>,
    pub children: Vec<BoneId>,
    pub rest_offset: Vec2,
    pub length: f64,
    pub angle: f64,
}

impl Bone {
    /// Bone whose rest offset is given in polar form
    pub fn from_polar(angle: f64, length: f64, name: &str, parent: Option<BoneId>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            rest_offset: Vec2::from_polar(angle, length),
            length,
            angle,
        }
    }

    /// Bone whose rest offset is given as a cartesian displacement
    pub fn from_pos(x: f64, y: f64, name: &str, parent: Option<BoneId>) -> Self {
        let rest_offset = Vec2::new(x, y);
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            rest_offset,
            length: rest_offset.magnitude(),
            angle: rest_offset.angle(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A rooted bone tree.
///
/// Adding a bone registers it in its parent's child list; that is the only
/// mutation bones ever see after construction.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    bones: Vec<Bone>,
    name_to_index: HashMap<String, BoneId>,
    root: Option<BoneId>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bone built with [`Bone::from_polar`] or [`Bone::from_pos`].
    ///
    /// Fails on duplicate names, unknown parents, or a second root.
    pub fn add(&mut self, mut bone: Bone) -> Result<BoneId> {
        if self.name_to_index.contains_key(&bone.name) {
            return Err(LimberError::DuplicateBone(bone.name));
        }

        let id = BoneId(self.bones.len());
        bone.children.clear();

        match bone.parent {
            Some(parent) => {
                let parent_bone = self
                    .bones
                    .get_mut(parent.0)
                    .ok_or_else(|| LimberError::BoneNotFound(format!("#{}", parent.0)))?;
                parent_bone.children.push(id);
            }
            None => {
                if let Some(existing) = self.root {
                    return Err(LimberError::MultipleRoots {
                        existing: self.bones[existing.0].name.clone(),
                        name: bone.name,
                    });
                }
                self.root = Some(id);
            }
        }

        self.name_to_index.insert(bone.name.clone(), id);
        self.bones.push(bone);
        Ok(id)
    }

    /// Shorthand for `add(Bone::from_pos(..))` with the parent given by name
    pub fn add_pos(&mut self, x: f64, y: f64, name: &str, parent: Option<&str>) -> Result<BoneId> {
        let parent = parent.map(|p| self.id(p)).transpose()?;
        self.add(Bone::from_pos(x, y, name, parent))
    }

    /// Shorthand for `add(Bone::from_polar(..))` with the parent given by name
    pub fn add_polar(
        &mut self,
        angle: f64,
        length: f64,
        name: &str,
        parent: Option<&str>,
    ) -> Result<BoneId> {
        let parent = parent.map(|p| self.id(p)).transpose()?;
        self.add(Bone::from_polar(angle, length, name, parent))
    }

    pub fn find(&self, name: &str) -> Option<BoneId> {
        self.name_to_index.get(name).copied()
    }

    /// Like [`find`](Self::find) but a miss is an error
    pub fn id(&self, name: &str) -> Result<BoneId> {
        self.find(name)
            .ok_or_else(|| LimberError::BoneNotFound(name.to_string()))
    }

    pub fn bone(&self, id: BoneId) -> Result<&Bone> {
        self.bones
            .get(id.0)
            .ok_or_else(|| LimberError::BoneNotFound(format!("#{}", id.0)))
    }

    pub fn root(&self) -> Result<BoneId> {
        self.root.ok_or(LimberError::MissingRoot)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Bones in insertion (topological) order
    pub fn iter(&self) -> impl Iterator<Item = (BoneId, &Bone)> {
        self.bones.iter().enumerate().map(|(i, b)| (BoneId(i), b))
    }

    /// Total rest length from `from` down to `to` along the parent chain
    pub fn chain_length(&self, from: BoneId, to: BoneId) -> Result<f64> {
        let ancestor = &self.bone(from)?.name;
        let descendant = &self.bone(to)?.name;
        let mut total = 0.0;
        let mut current = to;
        while current != from {
            let bone = self.bone(current)?;
            total += bone.length;
            current = bone.parent.ok_or_else(|| {
                LimberError::BoneNotFound(format!(
                    "{} is not an ancestor of {}",
                    ancestor, descendant
                ))
            })?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn from_pos_derives_polar_form() {
        let bone = Bone::from_pos(0.0, -25.0, "knee", None);
        assert!((bone.length - 25.0).abs() < 1e-12);
        assert!((bone.angle + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn from_polar_derives_offset() {
        let bone = Bone::from_polar(FRAC_PI_2, 10.0, "neck", None);
        assert!(bone.rest_offset.x.abs() < 1e-12);
        assert!((bone.rest_offset.y - 10.0).abs() < 1e-12);
        assert_eq!(bone.length, 10.0);
    }

    #[test]
    fn adding_child_registers_with_parent() {
        let mut skel = Skeleton::new();
        let root = skel.add_pos(0.0, 42.0, "pelvis", None).unwrap();
        let neck = skel.add_pos(0.0, 30.0, "neck", Some("pelvis")).unwrap();
        let hip = skel.add_pos(0.0, 2.0, "hip", Some("pelvis")).unwrap();

        assert_eq!(skel.root().unwrap(), root);
        assert_eq!(skel.bone(root).unwrap().children, vec![neck, hip]);
        assert_eq!(skel.bone(neck).unwrap().parent, Some(root));
        assert!(skel.bone(root).unwrap().is_root());
    }

    #[test]
    fn rejects_second_root() {
        let mut skel = Skeleton::new();
        skel.add_pos(0.0, 0.0, "a", None).unwrap();
        let err = skel.add_pos(0.0, 0.0, "b", None).unwrap_err();
        assert!(matches!(err, LimberError::MultipleRoots { .. }));
    }

    #[test]
    fn rejects_duplicate_and_unknown_parent() {
        let mut skel = Skeleton::new();
        skel.add_pos(0.0, 0.0, "root", None).unwrap();
        assert!(matches!(
            skel.add_pos(1.0, 0.0, "root", Some("root")),
            Err(LimberError::DuplicateBone(_))
        ));
        assert!(matches!(
            skel.add_pos(1.0, 0.0, "arm", Some("ghost")),
            Err(LimberError::BoneNotFound(_))
        ));
        assert!(matches!(
            skel.add(Bone::from_pos(1.0, 0.0, "arm", Some(BoneId(9)))),
            Err(LimberError::BoneNotFound(_))
        ));
    }

    #[test]
    fn empty_skeleton_has_no_root() {
        let skel = Skeleton::new();
        assert!(matches!(skel.root(), Err(LimberError::MissingRoot)));
    }

    #[test]
    fn chain_length_sums_lengths() {
        let mut skel = Skeleton::new();
        let hip = skel.add_pos(0.0, 2.0, "hip", None).unwrap();
        skel.add_pos(0.0, -25.0, "knee", Some("hip")).unwrap();
        let foot = skel.add_pos(0.0, -28.0, "foot", Some("knee")).unwrap();
        assert!((skel.chain_length(hip, foot).unwrap() - 53.0).abs() < 1e-12);
        assert!(skel.chain_length(foot, hip).is_err());
    }

    #[test]
    fn chain_length_rejects_unknown_ids() {
        let mut skel = Skeleton::new();
        let hip = skel.add_pos(0.0, 2.0, "hip", None).unwrap();
        let foot = skel.add_pos(0.0, -28.0, "foot", Some("hip")).unwrap();
        assert!(matches!(
            skel.chain_length(BoneId(42), foot),
            Err(LimberError::BoneNotFound(_))
        ));
        assert!(skel.chain_length(hip, BoneId(42)).is_err());
    }
}
