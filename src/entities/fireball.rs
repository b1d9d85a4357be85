use crate::camera::Camera;
use crate::config::FireballConfig;
use crate::object::{Body, GameObject, Resolve, Sprite};
use crate::render::Renderer;

use super::{Direction, Entity, Shooter};

/// Projectile fired by the player or the boss.
#[derive(Clone, Debug)]
pub struct Fireball {
    body: Body,
    sprite: Sprite,
    direction: Direction,
    damage: f64,
    owner: Shooter,
}

impl Fireball {
    pub fn new(x: f64, y: f64, direction: Direction, owner: Shooter, config: &FireballConfig) -> Self {
        Self {
            body: Body::new(x, y, &config.sprite, config.radius, config.speed),
            sprite: config.sprite.clone(),
            direction,
            damage: config.damage,
            owner,
        }
    }

    /// Fly one frame, then flag for removal once past the camera edge it is
    /// heading towards. A fireball spawned off-screen behind the view is kept.
    pub fn update(&mut self, camera: &Camera) {
        self.body.x += self.body.speed * self.direction.scalar();

        let gone = match self.direction {
            Direction::Left => self.body.x < camera.x(),
            Direction::Right => self.body.x > camera.right(),
        };
        if gone {
            self.body.can_remove = true;
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn owner(&self) -> Shooter {
        self.owner
    }
}

impl GameObject for Fireball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &'static str {
        "Fireball"
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.sprite.draw_at(self.body.x, self.body.y, camera, renderer);
    }
}

/// Damages any entity except the one that fired it, then despawns.
impl<E: Entity> Resolve<E> for Fireball {
    fn resolve_collision(&mut self, other: &mut E) {
        if other.shooter() == self.owner {
            return;
        }
        other.take_damage(self.damage);
        self.body.can_remove = true;
    }
}
