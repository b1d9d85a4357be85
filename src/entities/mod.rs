//! Entities: game objects with a facing, health, a death animation and
//! status lines.
//!
//! An entity is **Alive** while health is above zero, **Dying** once it hits
//! zero (sinking off the bottom of the window, ignoring controls and AI) and
//! **Dead** when the sink finishes. Dead is terminal.

mod boss;
mod fireball;
mod player;
mod slime;

pub use boss::{Boss, SHOOT_COOLDOWN};
pub use fireball::Fireball;
pub use player::{Player, GRAVITY, JUMP_SPEED};
pub use slime::Slime;

use crate::camera::Camera;
use crate::config::FireballConfig;
use crate::object::{Body, GameObject, Sprite};
use crate::render::Renderer;
use crate::text::{StatusMessage, StatusSource};

/// Pixels per frame an entity sinks while dying.
pub const DEATH_ANIMATION_SPEED: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// −1 for left, +1 for right.
    pub fn scalar(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Identity of whoever fired a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shooter {
    Player,
    Boss,
}

// ── Shared state ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct EntityCore {
    pub body: Body,
    sprite_left: Option<Sprite>,
    sprite_right: Option<Sprite>,
    facing: Direction,
    health: f64,
    death_complete: bool,
    messages: Vec<StatusMessage>,
    projectile: FireballConfig,
    window_height: f64,
}

impl EntityCore {
    pub fn new(
        body: Body,
        sprite_left: Option<Sprite>,
        sprite_right: Option<Sprite>,
        health: f64,
        projectile: FireballConfig,
        window_height: f64,
    ) -> Self {
        Self {
            body,
            sprite_left,
            sprite_right,
            facing: Direction::Right,
            health: health.max(0.0),
            death_complete: false,
            messages: Vec::new(),
            projectile,
            window_height,
        }
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Direction) {
        self.facing = facing;
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn death_complete(&self) -> bool {
        self.death_complete
    }

    /// Floor-clamped at zero; no-op once already at zero.
    pub fn apply_damage(&mut self, amount: f64) {
        if self.is_dead() || amount <= 0.0 {
            return;
        }
        self.health = (self.health - amount).max(0.0);
    }

    /// One frame of the sink-off-screen animation.
    pub fn animate_death(&mut self) {
        if self.death_complete {
            return;
        }
        if self.body.top() < self.window_height {
            self.body.y += DEATH_ANIMATION_SPEED;
        } else {
            self.death_complete = true;
        }
    }

    pub fn add_message(&mut self, message: StatusMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    /// Fireball at the entity's centre, heading the way it faces.
    pub fn spawn_fireball(&self, owner: Shooter) -> Fireball {
        Fireball::new(self.body.x, self.body.y, self.facing, owner, &self.projectile)
    }

    fn sprite(&self) -> Option<&Sprite> {
        match self.facing {
            Direction::Left => self.sprite_left.as_ref(),
            Direction::Right => self.sprite_right.as_ref(),
        }
    }

    /// Status lines first (registration order), then the facing sprite.
    pub fn draw(
        &self,
        value_of: impl Fn(StatusSource) -> String,
        camera: &Camera,
        renderer: &mut dyn Renderer,
    ) {
        for message in &self.messages {
            message.draw(&value_of(message.source), renderer);
        }
        if let Some(sprite) = self.sprite() {
            sprite.draw_at(self.body.x, self.body.y, camera, renderer);
        }
    }
}

/// `round(health * 100)` as shown on the HUD.
pub(crate) fn health_label(health: f64) -> String {
    format!("{}", (health * 100.0).round() as i64)
}

// ── Entity contract ───────────────────────────────────────────────────────────

pub trait Entity: GameObject {
    fn core(&self) -> &EntityCore;
    fn core_mut(&mut self) -> &mut EntityCore;

    fn shooter(&self) -> Shooter;

    fn status_value(&self, source: StatusSource) -> String;

    fn take_damage(&mut self, amount: f64) {
        self.core_mut().apply_damage(amount);
    }

    fn shoot(&mut self) -> Option<Fireball> {
        Some(self.core().spawn_fireball(self.shooter()))
    }

    fn health(&self) -> f64 {
        self.core().health()
    }

    fn is_dead(&self) -> bool {
        self.core().is_dead()
    }

    fn death_complete(&self) -> bool {
        self.core().death_complete()
    }

    fn facing(&self) -> Direction {
        self.core().facing()
    }
}
