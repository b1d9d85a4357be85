//! Level orchestration.
//!
//! A level owns every object of one play-through and runs the frame:
//!
//! 1. Draw and update each object in insertion order. Each non-player object
//!    is then tested against the player.
//! 2. Draw and update every fireball, testing it against the player and the
//!    boss.
//! 3. Purge everything flagged for removal. Nothing is removed mid-pass.
//! 4. Evaluate win, then loss.
//!
//! Collision pairing table (receiver → target). Only these pairs are tested;
//! the receiver is the side that reacts.
//!
//! | receiver        | target | effect                                  |
//! |-----------------|--------|-----------------------------------------|
//! | Platform        | Player | land                                    |
//! | FlyingPlatform  | Player | land when arriving from above           |
//! | Slime           | Player | one-shot damage                         |
//! | Item            | Player | collect                                 |
//! | Flag            | Player | mark flag reached                       |
//! | Boss            | Player | none                                    |
//! | Fireball        | Player | damage unless fired by the player       |
//! | Fireball        | Boss   | damage unless fired by the boss         |

use std::fmt;

use log::{debug, info, warn};
use rand::Rng;

use crate::camera::Camera;
use crate::collectable::Item;
use crate::config::GameConfig;
use crate::entities::{Boss, Entity, Fireball, Player, Slime};
use crate::error::LayoutError;
use crate::flag::Flag;
use crate::input::InputSource;
use crate::layout::{validate, SpawnKind, SpawnRecord};
use crate::object::{Body, GameObject, Resolve};
use crate::platform::{FlyingPlatform, Platform};
use crate::render::Renderer;

// ── Identity & outcome ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelId {
    One,
    Two,
    Three,
}

impl LevelId {
    pub const ALL: [LevelId; 3] = [LevelId::One, LevelId::Two, LevelId::Three];

    pub fn index(self) -> usize {
        match self {
            LevelId::One => 0,
            LevelId::Two => 1,
            LevelId::Three => 2,
        }
    }

    /// The final level is only won once the boss has finished dying.
    pub fn requires_boss_defeat(self) -> bool {
        self == LevelId::Three
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.index() + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelStatus {
    Active,
    Won,
    Lost,
}

// ── Object slots ──────────────────────────────────────────────────────────────

/// Non-entity level objects. All of them resolve against the player.
#[derive(Clone, Debug)]
pub enum Prop {
    Platform(Platform),
    FlyingPlatform(FlyingPlatform),
    Slime(Slime),
    Item(Item),
    Flag(Flag),
}

impl Prop {
    fn as_object(&self) -> &dyn GameObject {
        match self {
            Prop::Platform(p) => p,
            Prop::FlyingPlatform(p) => p,
            Prop::Slime(s) => s,
            Prop::Item(i) => i,
            Prop::Flag(f) => f,
        }
    }

    pub fn body(&self) -> &Body {
        self.as_object().body()
    }

    pub fn name(&self) -> &'static str {
        self.as_object().name()
    }

    pub fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.as_object().draw(camera, renderer);
    }

    pub fn update(&mut self) {
        match self {
            Prop::FlyingPlatform(p) => p.update(),
            Prop::Slime(s) => s.update(),
            Prop::Item(i) => i.update(),
            Prop::Platform(_) | Prop::Flag(_) => {}
        }
    }

    pub fn collide_with(&mut self, player: &mut Player) -> bool {
        match self {
            Prop::Platform(p) => p.collide_with(player),
            Prop::FlyingPlatform(p) => p.collide_with(player),
            Prop::Slime(s) => s.collide_with(player),
            Prop::Item(i) => i.collide_with(player),
            Prop::Flag(f) => f.collide_with(player),
        }
    }
}

/// One entry of the update order. The player and boss live in dedicated
/// fields of [`Level`]; their slots only fix where they update.
#[derive(Clone, Debug)]
pub enum Slot {
    Player,
    Boss,
    Prop(Prop),
}

impl Slot {
    fn can_remove(&self) -> bool {
        match self {
            Slot::Prop(prop) => prop.body().can_remove,
            Slot::Player | Slot::Boss => false,
        }
    }
}

// ── Level ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Level {
    id: LevelId,
    camera: Camera,
    objects: Vec<Slot>,
    fireballs: Vec<Fireball>,
    player: Player,
    boss: Option<Boss>,
    status: LevelStatus,
}

impl Level {
    pub fn new(
        id: LevelId,
        records: &[SpawnRecord],
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, LayoutError> {
        validate(id, records)?;

        let level_width = config.level.width;
        let mut camera = Camera::new(0.0, 0.0, config.window.width, config.window.height);
        camera.set_boundary_x(0.0, level_width);

        let mut objects = Vec::with_capacity(records.len());
        let mut player = None;
        let mut boss = None;

        for record in records {
            let (x, y) = (record.x, record.y);
            let prop = match record.kind {
                SpawnKind::Player => {
                    if player.is_some() {
                        warn!("{id}: ignoring extra PLAYER at ({x}, {y})");
                        continue;
                    }
                    let mut p = Player::new(x, y, config);
                    p.set_boundary_x(0.0, level_width);
                    player = Some(p);
                    objects.push(Slot::Player);
                    continue;
                }
                SpawnKind::EnemyBoss => {
                    if boss.is_some() {
                        warn!("{id}: ignoring extra ENEMY_BOSS at ({x}, {y})");
                        continue;
                    }
                    boss = Some(Boss::new(x, y, config));
                    objects.push(Slot::Boss);
                    continue;
                }
                SpawnKind::Platform => Prop::Platform(Platform::new(x, y, &config.platform)),
                SpawnKind::FlyingPlatform => Prop::FlyingPlatform(FlyingPlatform::new(
                    x,
                    y,
                    &config.flying_platform,
                    rng,
                )),
                SpawnKind::Enemy => Prop::Slime(Slime::new(x, y, &config.enemy, rng)),
                SpawnKind::Coin => Prop::Item(Item::coin(x, y, &config.coin)),
                SpawnKind::InvinciblePower => {
                    Prop::Item(Item::invincible_power(x, y, &config.invincible_power))
                }
                SpawnKind::DoubleScore => {
                    Prop::Item(Item::double_score(x, y, &config.double_score))
                }
                SpawnKind::EndFlag => Prop::Flag(Flag::new(x, y, &config.end_flag)),
            };
            objects.push(Slot::Prop(prop));
        }

        let player = player.ok_or(LayoutError::MissingPlayer { level: id })?;
        debug!(
            "Built {id}: {} objects, boss {}",
            objects.len(),
            if boss.is_some() { "present" } else { "absent" }
        );

        Ok(Self {
            id,
            camera,
            objects,
            fireballs: Vec::new(),
            player,
            boss,
            status: LevelStatus::Active,
        })
    }

    // ── Frame ─────────────────────────────────────────────────────────────────

    /// Run one frame and report the resulting status. Once the level is won
    /// or lost it stops updating.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        rng: &mut impl Rng,
    ) -> LevelStatus {
        if self.status != LevelStatus::Active {
            return self.status;
        }

        self.update_objects(input, renderer, rng);
        self.update_fireballs(renderer);

        self.objects.retain(|slot| !slot.can_remove());
        self.fireballs.retain(|fireball| !fireball.can_remove());

        self.status = self.evaluate();
        if self.status != LevelStatus::Active {
            info!("{} finished: {:?}", self.id, self.status);
        }
        self.status
    }

    fn update_objects(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        rng: &mut impl Rng,
    ) {
        let Level {
            camera,
            objects,
            fireballs,
            player,
            boss,
            ..
        } = self;

        for slot in objects.iter_mut() {
            match slot {
                Slot::Player => {
                    player.draw(camera, renderer);
                    fireballs.extend(player.update(input, camera));
                }
                Slot::Boss => {
                    if let Some(boss) = boss.as_mut() {
                        boss.draw(camera, renderer);
                        fireballs.extend(boss.update(player, rng));
                        boss.collide_with(player);
                    }
                }
                Slot::Prop(prop) => {
                    prop.draw(camera, renderer);
                    prop.update();
                    prop.collide_with(player);
                }
            }
        }
    }

    fn update_fireballs(&mut self, renderer: &mut dyn Renderer) {
        let Level {
            camera,
            fireballs,
            player,
            boss,
            ..
        } = self;

        for fireball in fireballs.iter_mut() {
            fireball.draw(camera, renderer);
            fireball.update(camera);
            fireball.collide_with(player);
            if let Some(boss) = boss.as_mut() {
                if !fireball.can_remove() {
                    fireball.collide_with(boss);
                }
            }
        }
    }

    fn evaluate(&mut self) -> LevelStatus {
        if self.id.requires_boss_defeat() {
            let boss_defeated = self.boss.as_ref().is_some_and(|b| b.death_complete());
            if self.player.reached_flag() && !boss_defeated {
                self.player.set_reached_flag(false);
            }
        }

        if self.player.reached_flag() {
            LevelStatus::Won
        } else if self.player.death_complete() {
            LevelStatus::Lost
        } else {
            LevelStatus::Active
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn id(&self) -> LevelId {
        self.id
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub fn boss_mut(&mut self) -> Option<&mut Boss> {
        self.boss.as_mut()
    }

    pub fn objects(&self) -> &[Slot] {
        &self.objects
    }

    pub fn fireballs(&self) -> &[Fireball] {
        &self.fireballs
    }

    pub fn add_fireball(&mut self, fireball: Fireball) {
        debug!("{}: fireball added by {:?}", self.id, fireball.owner());
        self.fireballs.push(fireball);
    }

    pub fn props(&self) -> impl Iterator<Item = &Prop> {
        self.objects.iter().filter_map(|slot| match slot {
            Slot::Prop(prop) => Some(prop),
            _ => None,
        })
    }
}
