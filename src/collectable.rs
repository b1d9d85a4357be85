//! Items the player picks up by touching them.
//!
//! Collection is one-shot. A collected item rises off the top of the screen
//! and then flags itself for removal.

use crate::camera::Camera;
use crate::config::{PowerUpConfig, PropConfig};
use crate::entities::Player;
use crate::object::{Body, GameObject, Resolve, Sprite};
use crate::render::Renderer;

/// Pixels per frame a collected item rises.
pub const COLLECT_ANIMATION_SPEED: f64 = 10.0;

/// Something a `T` can collect.
pub trait Collectable<T> {
    fn collect(&mut self, collector: &mut T);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Coin,
    /// Invincibility for the given number of frames.
    InvinciblePower(u32),
    /// Double score for the given number of frames.
    DoubleScore(u32),
}

#[derive(Clone, Debug)]
pub struct Item {
    body: Body,
    sprite: Sprite,
    kind: ItemKind,
    consumed: bool,
}

impl Item {
    fn with_kind(x: f64, y: f64, config: &PropConfig, kind: ItemKind) -> Self {
        Self {
            body: Body::new(x, y, &config.sprite, config.radius, config.speed),
            sprite: config.sprite.clone(),
            kind,
            consumed: false,
        }
    }

    pub fn coin(x: f64, y: f64, config: &PropConfig) -> Self {
        Self::with_kind(x, y, config, ItemKind::Coin)
    }

    pub fn invincible_power(x: f64, y: f64, config: &PowerUpConfig) -> Self {
        Self::with_kind(x, y, &config.prop, ItemKind::InvinciblePower(config.max_frames))
    }

    pub fn double_score(x: f64, y: f64, config: &PowerUpConfig) -> Self {
        Self::with_kind(x, y, &config.prop, ItemKind::DoubleScore(config.max_frames))
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn update(&mut self) {
        if !self.consumed {
            return;
        }
        if self.body.y + self.body.height < 0.0 {
            self.body.can_remove = true;
        } else {
            self.body.y -= COLLECT_ANIMATION_SPEED;
        }
    }
}

impl Collectable<Player> for Item {
    fn collect(&mut self, player: &mut Player) {
        self.consumed = true;
        match self.kind {
            ItemKind::Coin => player.increase_score(),
            ItemKind::InvinciblePower(frames) => player.use_invincible_power(frames),
            ItemKind::DoubleScore(frames) => player.use_double_score(frames),
        }
    }
}

impl GameObject for Item {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &'static str {
        match self.kind {
            ItemKind::Coin => "Coin",
            ItemKind::InvinciblePower(_) => "InvinciblePowerUp",
            ItemKind::DoubleScore(_) => "DoubleScorePowerUp",
        }
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.sprite.draw_at(self.body.x, self.body.y, camera, renderer);
    }
}

impl Resolve<Player> for Item {
    fn resolve_collision(&mut self, player: &mut Player) {
        if !self.consumed {
            self.collect(player);
        }
    }
}
