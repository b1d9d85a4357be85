//! Immutable game configuration.
//!
//! Loaded once at startup from an INI file and handed to each object's
//! constructor, which copies out the values it needs. Every key is required;
//! a missing or malformed value aborts startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! image_left = player_left
//! image_right = player_right
//! width = 40
//! height = 50
//! radius = 20
//! speed = 5
//! health = 1.0
//! ```
//!
//! A negative `radius` selects rectangle collision for that object type.

use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use log::info;

use crate::error::ConfigError;
use crate::object::Sprite;

pub const DEFAULT_CONFIG_PATH: &str = "assets/game.ini";

// ── Section types ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub background: Sprite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelConfig {
    /// Horizontal extent of every level; bounds both camera and player.
    pub width: f64,
    /// Layout files for levels 1, 2 and 3.
    pub layouts: [PathBuf; 3],
}

/// Font size and anchor of a piece of HUD text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    pub size: u32,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudConfig {
    pub title: TextPlacement,
    /// Instruction text is centred horizontally; only `y` is configured.
    pub instruction_size: u32,
    pub instruction_y: f64,
    pub message_size: u32,
    pub message_y: f64,
    pub score: TextPlacement,
    pub player_health: TextPlacement,
    pub boss_health: TextPlacement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Messages {
    pub title: String,
    pub instruction: String,
    pub game_won: String,
    pub game_over: String,
    pub health: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerConfig {
    pub sprite_left: Sprite,
    pub sprite_right: Sprite,
    pub radius: Option<f64>,
    pub speed: f64,
    pub health: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformConfig {
    pub sprite: Sprite,
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlyingPlatformConfig {
    pub sprite: Sprite,
    pub random_speed: f64,
    pub max_displacement_x: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyConfig {
    pub sprite: Sprite,
    pub radius: Option<f64>,
    pub speed: f64,
    pub damage: f64,
    pub random_speed: f64,
    pub max_displacement_x: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BossConfig {
    pub sprite: Sprite,
    pub radius: Option<f64>,
    pub speed: f64,
    pub health: f64,
    pub activation_radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FireballConfig {
    pub sprite: Sprite,
    pub radius: Option<f64>,
    pub speed: f64,
    pub damage: f64,
}

/// Shape data shared by coins and the end flag.
#[derive(Clone, Debug, PartialEq)]
pub struct PropConfig {
    pub sprite: Sprite,
    pub radius: Option<f64>,
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUpConfig {
    pub prop: PropConfig,
    /// Frames the effect lasts once collected.
    pub max_frames: u32,
}

// ── Root ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub level: LevelConfig,
    pub hud: HudConfig,
    pub messages: Messages,
    pub player: PlayerConfig,
    pub platform: PlatformConfig,
    pub flying_platform: FlyingPlatformConfig,
    pub enemy: EnemyConfig,
    pub boss: BossConfig,
    pub fireball: FireballConfig,
    pub coin: PropConfig,
    pub invincible_power: PowerUpConfig,
    pub double_score: PowerUpConfig,
    pub end_flag: PropConfig,
}

impl GameConfig {
    /// Load configuration from an INI file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path).map_err(|details| ConfigError::Load {
            path: path.display().to_string(),
            details,
        })?;
        let config = Self::from_ini(&ini)?;
        info!(
            "Loaded config from {}: window {}x{}, level width {}",
            path.display(),
            config.window.width,
            config.window.height,
            config.level.width
        );
        Ok(config)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|details| ConfigError::Load {
                path: "<inline>".to_string(),
                details,
            })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let r = Reader { ini };

        let window_width = r.float("window", "width")?;
        let window_height = r.float("window", "height")?;

        Ok(Self {
            window: WindowConfig {
                width: window_width,
                height: window_height,
                background: Sprite::new(
                    r.string("window", "background")?,
                    window_width,
                    window_height,
                ),
            },
            level: LevelConfig {
                width: r.float("level", "width")?,
                layouts: [
                    PathBuf::from(r.string("level", "level1")?),
                    PathBuf::from(r.string("level", "level2")?),
                    PathBuf::from(r.string("level", "level3")?),
                ],
            },
            hud: HudConfig {
                title: r.placement("hud", "title")?,
                instruction_size: r.uint("hud", "instruction_size")?,
                instruction_y: r.float("hud", "instruction_y")?,
                message_size: r.uint("hud", "message_size")?,
                message_y: r.float("hud", "message_y")?,
                score: r.placement("hud", "score")?,
                player_health: r.placement("hud", "player_health")?,
                boss_health: r.placement("hud", "boss_health")?,
            },
            messages: Messages {
                title: r.string("messages", "title")?,
                instruction: r.string("messages", "instruction")?,
                game_won: r.string("messages", "game_won")?,
                game_over: r.string("messages", "game_over")?,
                health: r.string("messages", "health")?,
                score: r.string("messages", "score")?,
            },
            player: PlayerConfig {
                sprite_left: r.sprite("player", "image_left")?,
                sprite_right: r.sprite("player", "image_right")?,
                radius: r.radius("player")?,
                speed: r.float("player", "speed")?,
                health: r.float("player", "health")?,
            },
            platform: PlatformConfig {
                sprite: r.sprite("platform", "image")?,
                speed: r.float("platform", "speed")?,
            },
            flying_platform: FlyingPlatformConfig {
                sprite: r.sprite("flying_platform", "image")?,
                random_speed: r.float("flying_platform", "random_speed")?,
                max_displacement_x: r.float("flying_platform", "max_displacement_x")?,
            },
            enemy: EnemyConfig {
                sprite: r.sprite("enemy", "image")?,
                radius: r.radius("enemy")?,
                speed: r.float("enemy", "speed")?,
                damage: r.float("enemy", "damage")?,
                random_speed: r.float("enemy", "random_speed")?,
                max_displacement_x: r.float("enemy", "max_displacement_x")?,
            },
            boss: BossConfig {
                sprite: r.sprite("enemy_boss", "image")?,
                radius: r.radius("enemy_boss")?,
                speed: r.float("enemy_boss", "speed")?,
                health: r.float("enemy_boss", "health")?,
                activation_radius: r.float("enemy_boss", "activation_radius")?,
            },
            fireball: FireballConfig {
                sprite: r.sprite("fireball", "image")?,
                radius: r.radius("fireball")?,
                speed: r.float("fireball", "speed")?,
                damage: r.float("fireball", "damage")?,
            },
            coin: r.prop("coin")?,
            invincible_power: PowerUpConfig {
                prop: r.prop("invincible_power")?,
                max_frames: r.uint("invincible_power", "max_frames")?,
            },
            double_score: PowerUpConfig {
                prop: r.prop("double_score")?,
                max_frames: r.uint("double_score", "max_frames")?,
            },
            end_flag: r.prop("end_flag")?,
        })
    }
}

// ── Typed lookups ─────────────────────────────────────────────────────────────

struct Reader<'a> {
    ini: &'a Ini,
}

impl Reader<'_> {
    fn missing(section: &str, key: &str) -> ConfigError {
        ConfigError::Missing {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    fn invalid(section: &str, key: &str, details: String) -> ConfigError {
        ConfigError::Invalid {
            section: section.to_string(),
            key: key.to_string(),
            details,
        }
    }

    fn string(&self, section: &str, key: &str) -> Result<String, ConfigError> {
        self.ini
            .get(section, key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Self::missing(section, key))
    }

    fn float(&self, section: &str, key: &str) -> Result<f64, ConfigError> {
        self.ini
            .getfloat(section, key)
            .map_err(|details| Self::invalid(section, key, details))?
            .ok_or_else(|| Self::missing(section, key))
    }

    fn uint(&self, section: &str, key: &str) -> Result<u32, ConfigError> {
        let value = self
            .ini
            .getuint(section, key)
            .map_err(|details| Self::invalid(section, key, details))?
            .ok_or_else(|| Self::missing(section, key))?;
        u32::try_from(value).map_err(|e| Self::invalid(section, key, e.to_string()))
    }

    /// Negative radius is the "use rectangle shape" sentinel.
    fn radius(&self, section: &str) -> Result<Option<f64>, ConfigError> {
        let radius = self.float(section, "radius")?;
        Ok((radius >= 0.0).then_some(radius))
    }

    fn sprite(&self, section: &str, image_key: &str) -> Result<Sprite, ConfigError> {
        Ok(Sprite::new(
            self.string(section, image_key)?,
            self.float(section, "width")?,
            self.float(section, "height")?,
        ))
    }

    fn placement(&self, section: &str, prefix: &str) -> Result<TextPlacement, ConfigError> {
        Ok(TextPlacement {
            size: self.uint(section, &format!("{prefix}_size"))?,
            x: self.float(section, &format!("{prefix}_x"))?,
            y: self.float(section, &format!("{prefix}_y"))?,
        })
    }

    fn prop(&self, section: &str) -> Result<PropConfig, ConfigError> {
        Ok(PropConfig {
            sprite: self.sprite(section, "image")?,
            radius: self.radius(section)?,
            speed: self.float(section, "speed")?,
        })
    }
}
