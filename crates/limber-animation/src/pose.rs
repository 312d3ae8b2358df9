//! Name-keyed, insertion-ordered pose buffer
//!
//! Holds one position per bone. Clips address entries by bone name; the
//! figure pipeline addresses them by [`BoneId`], which works because a
//! buffer built with [`PoseBuffer::from_skeleton`] stores bones in skeleton
//! order.

use crate::bone::{BoneId, Skeleton};
use limber_core::{LimberError, Result, Vec2};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PoseBuffer {
    names: Vec<String>,
    values: Vec<Vec2>,
    index: HashMap<String, usize>,
}

impl PoseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding every bone's rest offset, in skeleton order
    pub fn from_skeleton(skeleton: &Skeleton) -> Self {
        let mut buffer = Self::new();
        for (_, bone) in skeleton.iter() {
            buffer.insert(&bone.name, bone.rest_offset);
        }
        buffer
    }

    /// Insert or overwrite. New names are appended, so iteration order is
    /// first-insertion order.
    pub fn insert(&mut self, name: &str, value: Vec2) {
        match self.index.get(name) {
            Some(&i) => self.values[i] = value,
            None => {
                self.index.insert(name.to_string(), self.values.len());
                self.names.push(name.to_string());
                self.values.push(value);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Vec2> {
        self.index.get(name).map(|&i| self.values[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec2> {
        match self.index.get(name) {
            Some(&i) => self.values.get_mut(i),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of the bone at `id`; a buffer too short for it is an error
    pub fn by_id(&self, id: BoneId) -> Result<Vec2> {
        self.values
            .get(id.0)
            .copied()
            .ok_or_else(|| missing(id))
    }

    pub fn by_id_mut(&mut self, id: BoneId) -> Result<&mut Vec2> {
        self.values
            .get_mut(id.0)
            .ok_or_else(|| missing(id))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec2)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter_mut())
    }
}

fn missing(id: BoneId) -> LimberError {
    LimberError::BoneNotFound(format!("#{} (pose buffer)", id.0))
}

impl Serialize for PoseBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
