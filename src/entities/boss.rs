use log::{debug, info};
use rand::Rng;

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::object::{Body, GameObject, Resolve};
use crate::render::{Renderer, Rgb};
use crate::text::{StatusMessage, StatusSource, Text};

use super::{health_label, Direction, Entity, EntityCore, Fireball, Player, Shooter};

/// Frames between shot decisions while the player is in range.
pub const SHOOT_COOLDOWN: u32 = 100;

const HEALTH_COLOR: Rgb = Rgb(255, 0, 0);

/// Final-level enemy. Stationary; turns to face the player and fires at
/// random while the player is within its activation radius.
#[derive(Clone, Debug)]
pub struct Boss {
    core: EntityCore,
    activation_radius: f64,
    shoot_timer: u32,
}

impl Boss {
    pub fn new(x: f64, y: f64, config: &GameConfig) -> Self {
        let boss = &config.boss;
        let body = Body::new(x, y, &boss.sprite, boss.radius, boss.speed);
        let mut core = EntityCore::new(
            body,
            Some(boss.sprite.clone()),
            Some(boss.sprite.clone()),
            boss.health,
            config.fireball.clone(),
            config.window.height,
        );
        core.set_facing(Direction::Left);
        core.add_message(StatusMessage::new(
            Text::placed(config.messages.health.clone(), config.hud.boss_health)
                .with_color(HEALTH_COLOR),
            StatusSource::Health,
        ));

        Self {
            core,
            activation_radius: boss.activation_radius,
            shoot_timer: SHOOT_COOLDOWN,
        }
    }

    /// Advance one frame. Returns a fireball if one was fired.
    pub fn update(&mut self, player: &mut Player, rng: &mut impl Rng) -> Option<Fireball> {
        if self.core.is_dead() {
            let was_complete = self.core.death_complete();
            self.core.animate_death();
            if !was_complete && self.core.death_complete() {
                info!("Boss defeated");
            }
            return None;
        }

        let player_x = player.body().x;
        if (self.core.body.x - player_x).abs() > self.activation_radius {
            return None;
        }

        player.grant_shoot();

        let facing = if self.core.body.x < player_x {
            Direction::Right
        } else {
            Direction::Left
        };
        self.core.set_facing(facing);

        if self.shoot_timer > 0 {
            self.shoot_timer -= 1;
            return None;
        }

        self.shoot_timer = SHOOT_COOLDOWN;
        if rng.gen_bool(0.5) {
            debug!("Boss fired {:?}", facing);
            self.shoot()
        } else {
            None
        }
    }

    pub fn shoot_timer(&self) -> u32 {
        self.shoot_timer
    }
}

impl GameObject for Boss {
    fn body(&self) -> &Body {
        &self.core.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.core.body
    }

    fn name(&self) -> &'static str {
        "Boss"
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.core.draw(|source| self.status_value(source), camera, renderer);
    }
}

impl Entity for Boss {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn shooter(&self) -> Shooter {
        Shooter::Boss
    }

    fn status_value(&self, source: StatusSource) -> String {
        match source {
            StatusSource::Health => health_label(self.core.health()),
            StatusSource::Score => String::new(),
        }
    }
}

/// Touching the player has no effect; only its fireballs hurt.
impl Resolve<Player> for Boss {}
