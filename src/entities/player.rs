use log::{debug, info};

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::input::{InputSource, Key, KeyLatch};
use crate::object::{Body, GameObject};
use crate::render::Renderer;
use crate::text::{StatusMessage, StatusSource, Text};

use super::{health_label, Direction, Entity, EntityCore, Fireball, Shooter};

/// Added to vertical velocity each airborne frame.
pub const GRAVITY: f64 = 1.0;
/// Upward velocity given by a jump.
pub const JUMP_SPEED: f64 = 20.0;

/// The controllable character.
///
/// `on_platform` and `can_shoot` are per-frame facts: they are cleared at the
/// end of every update and must be re-asserted during the same frame by a
/// platform collision or by the boss respectively.
#[derive(Clone, Debug)]
pub struct Player {
    core: EntityCore,
    score: u32,
    velocity_y: f64,
    on_platform: bool,
    previous_platform_y: f64,
    /// Spawn x; the camera keeps the player this far from its left edge.
    camera_offset: f64,
    invincible_timer: u32,
    double_score_timer: u32,
    reached_flag: bool,
    can_shoot: bool,
    jump_latch: KeyLatch,
    shoot_latch: KeyLatch,
    boundary_x: Option<(f64, f64)>,
}

impl Player {
    pub fn new(x: f64, y: f64, config: &GameConfig) -> Self {
        let player = &config.player;
        let body = Body::new(x, y, &player.sprite_left, player.radius, player.speed);
        let mut core = EntityCore::new(
            body,
            Some(player.sprite_left.clone()),
            Some(player.sprite_right.clone()),
            player.health,
            config.fireball.clone(),
            config.window.height,
        );
        core.add_message(StatusMessage::new(
            Text::placed(config.messages.health.clone(), config.hud.player_health),
            StatusSource::Health,
        ));
        core.add_message(StatusMessage::new(
            Text::placed(config.messages.score.clone(), config.hud.score),
            StatusSource::Score,
        ));

        Self {
            core,
            score: 0,
            velocity_y: 0.0,
            on_platform: false,
            previous_platform_y: 0.0,
            camera_offset: x,
            invincible_timer: 0,
            double_score_timer: 0,
            reached_flag: false,
            can_shoot: false,
            jump_latch: KeyLatch::default(),
            shoot_latch: KeyLatch::default(),
            boundary_x: None,
        }
    }

    /// Keep the sprite inside `[left, right]`.
    pub fn set_boundary_x(&mut self, left: f64, right: f64) {
        self.boundary_x = Some((left, right));
    }

    // ── Per-frame update ──────────────────────────────────────────────────────

    /// Advance one frame. Returns a fireball if one was fired.
    pub fn update(&mut self, input: &dyn InputSource, camera: &mut Camera) -> Option<Fireball> {
        if self.core.is_dead() {
            let was_complete = self.core.death_complete();
            self.core.animate_death();
            if !was_complete && self.core.death_complete() {
                info!("Player death animation complete");
            }
            return None;
        }

        if input.is_down(Key::Left) {
            self.move_horizontally(Direction::Left);
        } else if input.is_down(Key::Right) {
            self.move_horizontally(Direction::Right);
        }

        if self.jump_latch.trigger(input.is_down(Key::Jump)) {
            self.jump();
        }

        let fireball = if self.shoot_latch.trigger(input.is_down(Key::Shoot)) {
            self.shoot()
        } else {
            None
        };

        camera.set_x(self.core.body.x - self.camera_offset);

        self.core.body.y += self.velocity_y;
        if !self.on_platform {
            self.velocity_y += GRAVITY;
        }

        self.double_score_timer = self.double_score_timer.saturating_sub(1);
        self.invincible_timer = self.invincible_timer.saturating_sub(1);

        self.on_platform = false;
        self.can_shoot = false;

        fireball
    }

    fn move_horizontally(&mut self, direction: Direction) {
        let body = &mut self.core.body;
        body.x += direction.scalar() * body.speed;
        if let Some((left, right)) = self.boundary_x {
            let half = body.width / 2.0;
            body.x = body.x.max(left + half).min(right - half);
        }
        self.core.set_facing(direction);
    }

    fn jump(&mut self) {
        if self.on_platform {
            self.on_platform = false;
            self.velocity_y = -JUMP_SPEED;
        }
    }

    // ── Effects applied by other objects ──────────────────────────────────────

    /// Rest on top of a surface centred at `platform_y`.
    pub fn land_on(&mut self, platform_y: f64, platform_height: f64) {
        self.core.body.y = platform_y - platform_height / 2.0 - self.core.body.height / 2.0;
        self.velocity_y = 0.0;
        self.on_platform = true;
        self.previous_platform_y = platform_y;
    }

    pub fn can_take_damage(&self) -> bool {
        self.invincible_timer == 0
    }

    /// Replaces any remaining duration; never stacks.
    pub fn use_double_score(&mut self, frames: u32) {
        self.double_score_timer = frames;
    }

    /// Replaces any remaining duration; never stacks.
    pub fn use_invincible_power(&mut self, frames: u32) {
        self.invincible_timer = frames;
    }

    pub fn increase_score(&mut self) {
        self.score += if self.double_score_timer > 0 { 2 } else { 1 };
    }

    pub fn grant_shoot(&mut self) {
        self.can_shoot = true;
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn velocity_y(&self) -> f64 {
        self.velocity_y
    }

    pub fn set_velocity_y(&mut self, velocity_y: f64) {
        self.velocity_y = velocity_y;
    }

    pub fn is_on_platform(&self) -> bool {
        self.on_platform
    }

    pub fn previous_platform_y(&self) -> f64 {
        self.previous_platform_y
    }

    pub fn set_previous_platform_y(&mut self, y: f64) {
        self.previous_platform_y = y;
    }

    pub fn invincible_timer(&self) -> u32 {
        self.invincible_timer
    }

    pub fn double_score_timer(&self) -> u32 {
        self.double_score_timer
    }

    pub fn reached_flag(&self) -> bool {
        self.reached_flag
    }

    pub fn set_reached_flag(&mut self, reached: bool) {
        self.reached_flag = reached;
    }

    pub fn can_shoot(&self) -> bool {
        self.can_shoot
    }
}

impl GameObject for Player {
    fn body(&self) -> &Body {
        &self.core.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.core.body
    }

    fn name(&self) -> &'static str {
        "Player"
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.core.draw(|source| self.status_value(source), camera, renderer);
    }
}

impl Entity for Player {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn shooter(&self) -> Shooter {
        Shooter::Player
    }

    fn status_value(&self, source: StatusSource) -> String {
        match source {
            StatusSource::Health => health_label(self.core.health()),
            StatusSource::Score => self.score.to_string(),
        }
    }

    /// Ignored while invincible.
    fn take_damage(&mut self, amount: f64) {
        if !self.can_take_damage() || self.core.is_dead() {
            return;
        }
        self.core.apply_damage(amount);
        if self.core.is_dead() {
            info!("Player died");
        }
    }

    /// Only while the boss has granted permission this frame.
    fn shoot(&mut self) -> Option<Fireball> {
        if !self.can_shoot {
            return None;
        }
        debug!("Player fired {:?}", self.core.facing());
        Some(self.core.spawn_fireball(Shooter::Player))
    }
}
