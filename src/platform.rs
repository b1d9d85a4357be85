//! Surfaces the player can stand on.
//!
//! Both kinds ignore a player that is moving upward or already dead. The
//! landing line of a platform is its centre `y`; the flying variant also
//! refuses to lift a player who arrives from below or from the side.

use rand::Rng;

use crate::camera::Camera;
use crate::config::{FlyingPlatformConfig, PlatformConfig};
use crate::entities::{Entity, Player};
use crate::object::{Body, GameObject, Patrol, Resolve, Sprite};
use crate::render::Renderer;

fn accepts_landing(player: &Player) -> bool {
    player.velocity_y() >= 0.0 && !player.is_dead()
}

// ── Ground ────────────────────────────────────────────────────────────────────

/// The static base platform.
#[derive(Clone, Debug)]
pub struct Platform {
    body: Body,
    sprite: Sprite,
}

impl Platform {
    pub fn new(x: f64, y: f64, config: &PlatformConfig) -> Self {
        Self {
            body: Body::new(x, y, &config.sprite, None, config.speed),
            sprite: config.sprite.clone(),
        }
    }
}

impl GameObject for Platform {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &'static str {
        "Platform"
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.sprite.draw_at(self.body.x, self.body.y, camera, renderer);
    }
}

impl Resolve<Player> for Platform {
    fn resolve_collision(&mut self, player: &mut Player) {
        if accepts_landing(player) {
            player.land_on(self.body.y, self.body.height);
        }
    }
}

// ── Flying ────────────────────────────────────────────────────────────────────

/// A platform drifting back and forth around its spawn point.
#[derive(Clone, Debug)]
pub struct FlyingPlatform {
    body: Body,
    sprite: Sprite,
    patrol: Patrol,
}

impl FlyingPlatform {
    pub fn new(x: f64, y: f64, config: &FlyingPlatformConfig, rng: &mut impl Rng) -> Self {
        Self {
            body: Body::new(x, y, &config.sprite, None, config.random_speed),
            sprite: config.sprite.clone(),
            patrol: Patrol::new(x, config.random_speed, config.max_displacement_x, rng),
        }
    }

    pub fn update(&mut self) {
        self.body.x = self.patrol.step(self.body.x);
    }
}

impl GameObject for FlyingPlatform {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &'static str {
        "FlyingPlatform"
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.sprite.draw_at(self.body.x, self.body.y, camera, renderer);
    }
}

impl Resolve<Player> for FlyingPlatform {
    /// Lands only a player whose feet are at or above the landing line and
    /// who last stood on a surface at the same height or lower on screen.
    fn resolve_collision(&mut self, player: &mut Player) {
        if !accepts_landing(player) {
            return;
        }
        let from_above = player.body().bottom() <= self.body.y;
        let from_equal_or_higher = player.previous_platform_y() >= self.body.y;
        if from_above && from_equal_or_higher {
            player.land_on(self.body.y, self.body.height);
        }
    }
}
