//! The world: a floor, a size, and one hosted actor

use crate::config::WorldConfig;
use limber_animation::{ClipId, Renderer, StickFigure};
use limber_core::{Color, Result, Vec2};
use log::debug;

const FLOOR_COLOR: Color = Color::new(0.067, 0.067, 0.067, 1.0);

/// Something the world can host and draw every tick
pub trait Actor {
    /// Called once when the world takes the actor
    fn load(&mut self) -> Result<()> {
        Ok(())
    }

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    fn attack_left(&mut self) {}

    fn attack_right(&mut self) {}

    fn reset_attacks(&mut self) {}

    /// Clip shown by the most recent draw, for actors that play clips
    fn current_clip(&self) -> Option<ClipId> {
        None
    }

    /// Draw at `position` (relative to the floor) for `tick`
    fn draw(
        &mut self,
        renderer: &mut dyn Renderer,
        position: Vec2,
        tick: u64,
        floor_height: f64,
    ) -> Result<()>;
}

impl Actor for StickFigure {
    fn load(&mut self) -> Result<()> {
        debug!(
            "loaded stick figure with {} bones",
            self.rig().skeleton.len()
        );
        Ok(())
    }

    fn velocity(&self) -> Vec2 {
        StickFigure::velocity(self)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        StickFigure::set_velocity(self, velocity);
    }

    fn attack_left(&mut self) {
        StickFigure::attack_left(self);
    }

    fn attack_right(&mut self) {
        StickFigure::attack_right(self);
    }

    fn reset_attacks(&mut self) {
        StickFigure::reset_attacks(self);
    }

    fn current_clip(&self) -> Option<ClipId> {
        StickFigure::current_clip(self)
    }

    fn draw(
        &mut self,
        renderer: &mut dyn Renderer,
        position: Vec2,
        tick: u64,
        floor_height: f64,
    ) -> Result<()> {
        StickFigure::draw(self, renderer, position, tick, floor_height)
    }
}

pub struct World {
    pub width: f64,
    pub height: f64,
    floor_height: f64,
    player: Option<Box<dyn Actor>>,
}

impl World {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            floor_height: 0.0,
            player: None,
        }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        let mut world = Self::new(config.width, config.height);
        world.set_floor(config.floor_height);
        world
    }

    /// Set the floor height, constrained to `[0, height]`
    pub fn set_floor(&mut self, height: f64) {
        self.floor_height = height.clamp(0.0, self.height);
    }

    pub fn floor_height(&self) -> f64 {
        self.floor_height
    }

    pub fn load_player(&mut self, mut player: Box<dyn Actor>) -> Result<()> {
        player.load()?;
        self.player = Some(player);
        Ok(())
    }

    pub fn player(&self) -> Option<&dyn Actor> {
        self.player.as_deref()
    }

    pub fn player_mut(&mut self) -> Option<&mut (dyn Actor + 'static)> {
        self.player.as_deref_mut()
    }

    /// Clear, draw the floor, then the player if there is one and it has a
    /// position
    pub fn draw(
        &mut self,
        renderer: &mut dyn Renderer,
        tick: u64,
        player_position: Option<Vec2>,
    ) -> Result<()> {
        renderer.clear();
        renderer.draw_rect(0.0, 0.0, self.width, self.floor_height, FLOOR_COLOR);
        if let (Some(player), Some(position)) = (self.player.as_mut(), player_position) {
            player.draw(renderer, position, tick, self.floor_height)?;
        }
        Ok(())
    }
}
