//! Scripted player movement
//!
//! Turns held controls into a velocity for the hosted actor and moves the
//! player position. The animation core never integrates motion itself.

use crate::config::PlayerConfig;
use crate::world::Actor;
use limber_core::Vec2;

/// Controls held down this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack_left: bool,
    pub attack_right: bool,
}

pub struct PlayerDriver {
    /// Position relative to the floor
    pub position: Vec2,
    config: PlayerConfig,
    world_width: f64,
}

impl PlayerDriver {
    pub fn new(config: PlayerConfig, start_x: f64, world_width: f64) -> Self {
        Self {
            position: Vec2::new(start_x, 0.0),
            config,
            world_width,
        }
    }

    /// Set the actor's velocity from `controls`, then move
    pub fn step(&mut self, controls: Controls, actor: &mut dyn Actor) {
        let mut velocity = actor.velocity();
        velocity.x = 0.0;
        if self.position.y > 0.0 {
            velocity.y -= self.config.gravity;
        } else {
            velocity.y = 0.0;
        }

        if controls.left && !controls.right && self.position.x > 0.0 {
            velocity.x = -self.config.run_speed;
        }
        if controls.right && !controls.left && self.position.x < self.world_width {
            velocity.x = self.config.run_speed;
        }
        if controls.jump && self.position.y == 0.0 {
            velocity.y = self.config.jump_height;
        }

        match (controls.attack_left, controls.attack_right) {
            (true, false) => actor.attack_left(),
            (false, true) => actor.attack_right(),
            (false, false) => actor.reset_attacks(),
            (true, true) => {}
        }

        actor.set_velocity(velocity);

        self.position += velocity;
        self.position.x = self.position.x.clamp(0.0, self.world_width);
        self.position.y = self.position.y.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limber_animation::Renderer;
    use limber_core::Result;

    #[derive(Default)]
    struct Body {
        velocity: Vec2,
        attacking: Option<bool>,
    }

    impl Actor for Body {
        fn velocity(&self) -> Vec2 {
            self.velocity
        }

        fn set_velocity(&mut self, velocity: Vec2) {
            self.velocity = velocity;
        }

        fn attack_left(&mut self) {
            self.attacking = Some(true);
        }

        fn reset_attacks(&mut self) {
            self.attacking = None;
        }

        fn draw(&mut self, _: &mut dyn Renderer, _: Vec2, _: u64, _: f64) -> Result<()> {
            Ok(())
        }
    }

    fn driver() -> PlayerDriver {
        PlayerDriver::new(PlayerConfig::default(), 100.0, 640.0)
    }

    #[test]
    fn runs_at_configured_speed() {
        let mut driver = driver();
        let mut body = Body::default();
        let controls = Controls {
            right: true,
            ..Default::default()
        };
        driver.step(controls, &mut body);
        assert_eq!(body.velocity, Vec2::new(10.0, 0.0));
        assert_eq!(driver.position, Vec2::new(110.0, 0.0));

        // Both directions cancel out
        driver.step(
            Controls {
                left: true,
                right: true,
                ..Default::default()
            },
            &mut body,
        );
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn jump_rises_and_lands() {
        let mut driver = driver();
        let mut body = Body::default();
        driver.step(
            Controls {
                jump: true,
                ..Default::default()
            },
            &mut body,
        );
        assert_eq!(body.velocity.y, 15.0);
        assert_eq!(driver.position.y, 15.0);

        // Holding jump in the air does nothing, gravity takes over
        let mut peak = driver.position.y;
        for _ in 0..100 {
            driver.step(
                Controls {
                    jump: true,
                    ..Default::default()
                },
                &mut body,
            );
            peak = peak.max(driver.position.y);
            if driver.position.y == 0.0 {
                break;
            }
        }
        assert_eq!(driver.position.y, 0.0);
        assert!(peak > 100.0);
    }

    #[test]
    fn stays_inside_world() {
        let mut driver = PlayerDriver::new(PlayerConfig::default(), 5.0, 640.0);
        let mut body = Body::default();
        let left = Controls {
            left: true,
            ..Default::default()
        };
        driver.step(left, &mut body);
        assert_eq!(driver.position.x, 0.0);
        driver.step(left, &mut body);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn attack_latches_until_released() {
        let mut driver = driver();
        let mut body = Body::default();
        driver.step(
            Controls {
                attack_left: true,
                ..Default::default()
            },
            &mut body,
        );
        assert_eq!(body.attacking, Some(true));
        driver.step(Controls::default(), &mut body);
        assert_eq!(body.attacking, None);
    }
}
