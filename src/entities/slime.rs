use rand::Rng;

use crate::camera::Camera;
use crate::config::EnemyConfig;
use crate::object::{Body, GameObject, Patrol, Resolve, Sprite};
use crate::render::Renderer;

use super::{Entity, Player};

/// Patrolling enemy that hurts the player on contact, once.
#[derive(Clone, Debug)]
pub struct Slime {
    body: Body,
    sprite: Sprite,
    patrol: Patrol,
    damage: f64,
    /// Cleared by the first hit and never restored.
    can_damage: bool,
}

impl Slime {
    pub fn new(x: f64, y: f64, config: &EnemyConfig, rng: &mut impl Rng) -> Self {
        Self {
            body: Body::new(x, y, &config.sprite, config.radius, config.speed),
            sprite: config.sprite.clone(),
            patrol: Patrol::new(x, config.random_speed, config.max_displacement_x, rng),
            damage: config.damage,
            can_damage: true,
        }
    }

    pub fn update(&mut self) {
        self.body.x = self.patrol.step(self.body.x);
    }

    pub fn can_damage(&self) -> bool {
        self.can_damage
    }
}

impl GameObject for Slime {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &'static str {
        "Slime"
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.sprite.draw_at(self.body.x, self.body.y, camera, renderer);
    }
}

impl Resolve<Player> for Slime {
    /// An invincible player does not use up the slime's hit.
    fn resolve_collision(&mut self, player: &mut Player) {
        if player.can_take_damage() && self.can_damage {
            player.take_damage(self.damage);
            self.can_damage = false;
        }
    }
}
