//! Level layout records.
//!
//! A layout is a CSV file of `TYPE,x,y` lines in spawn order. Unknown types
//! are skipped; a known type with unparseable coordinates is an error.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::LevelConfig;
use crate::error::LayoutError;
use crate::level::LevelId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnKind {
    Player,
    Platform,
    Enemy,
    Coin,
    InvinciblePower,
    DoubleScore,
    FlyingPlatform,
    EnemyBoss,
    EndFlag,
}

impl SpawnKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PLAYER" => Some(SpawnKind::Player),
            "PLATFORM" => Some(SpawnKind::Platform),
            "ENEMY" => Some(SpawnKind::Enemy),
            "COIN" => Some(SpawnKind::Coin),
            "INVINCIBLE_POWER" => Some(SpawnKind::InvinciblePower),
            "DOUBLE_SCORE" => Some(SpawnKind::DoubleScore),
            "FLYING_PLATFORM" => Some(SpawnKind::FlyingPlatform),
            "ENEMY_BOSS" => Some(SpawnKind::EnemyBoss),
            "END_FLAG" => Some(SpawnKind::EndFlag),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRecord {
    pub kind: SpawnKind,
    pub x: f64,
    pub y: f64,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

pub fn parse_layout(text: &str) -> Result<Vec<SpawnRecord>, LayoutError> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let Some(kind) = SpawnKind::from_tag(fields[0]) else {
            debug!("Ignoring layout record '{}' on line {}", fields[0], line_no);
            continue;
        };
        if fields.len() < 3 {
            return Err(LayoutError::Malformed {
                line: line_no,
                details: format!("expected TYPE,x,y but got '{line}'"),
            });
        }

        let coordinate = |field: &str| {
            field.parse::<f64>().map_err(|e| LayoutError::Malformed {
                line: line_no,
                details: format!("bad coordinate '{field}': {e}"),
            })
        };
        records.push(SpawnRecord {
            kind,
            x: coordinate(fields[1])?,
            y: coordinate(fields[2])?,
        });
    }

    Ok(records)
}

pub fn load_layout(path: impl AsRef<Path>) -> Result<Vec<SpawnRecord>, LayoutError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LayoutError::Read {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    parse_layout(&text)
}

/// Every level needs a player; the boss level also needs its boss.
pub fn validate(level: LevelId, records: &[SpawnRecord]) -> Result<(), LayoutError> {
    let has = |kind: SpawnKind| records.iter().any(|r| r.kind == kind);
    if !has(SpawnKind::Player) {
        return Err(LayoutError::MissingPlayer { level });
    }
    if level.requires_boss_defeat() && !has(SpawnKind::EnemyBoss) {
        return Err(LayoutError::MissingBoss { level });
    }
    Ok(())
}

// ── All three levels ──────────────────────────────────────────────────────────

/// Validated layouts for every level, kept so a level can be rebuilt each
/// time it is entered.
#[derive(Clone, Debug)]
pub struct LevelLayouts {
    layouts: [Vec<SpawnRecord>; 3],
}

impl LevelLayouts {
    pub fn new(
        level1: Vec<SpawnRecord>,
        level2: Vec<SpawnRecord>,
        level3: Vec<SpawnRecord>,
    ) -> Result<Self, LayoutError> {
        let layouts = [level1, level2, level3];
        for (id, records) in LevelId::ALL.iter().zip(&layouts) {
            validate(*id, records)?;
        }
        Ok(Self { layouts })
    }

    pub fn load(config: &LevelConfig) -> Result<Self, LayoutError> {
        let [l1, l2, l3] = &config.layouts;
        let layouts = Self::new(load_layout(l1)?, load_layout(l2)?, load_layout(l3)?)?;
        info!(
            "Loaded level layouts: {} / {} / {} records",
            layouts.layouts[0].len(),
            layouts.layouts[1].len(),
            layouts.layouts[2].len()
        );
        Ok(layouts)
    }

    pub fn get(&self, level: LevelId) -> &[SpawnRecord] {
        &self.layouts[level.index()]
    }
}
