//! Scene state machine.
//!
//! ```text
//! Start ──1/2/3──▶ Level1 | Level2 | Level3
//! LevelN ──won──▶ Win      LevelN ──lost──▶ Lose
//! Win | Lose ──confirm released──▶ Start
//! ```
//!
//! Exactly one scene is live. Switching drops the old scene entirely, so a
//! level is rebuilt from its layout every time it is entered.

use std::rc::Rc;

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::LayoutError;
use crate::input::{InputSource, Key};
use crate::layout::LevelLayouts;
use crate::level::{Level, LevelId, LevelStatus};
use crate::render::Renderer;
use crate::text::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    Start,
    Level1,
    Level2,
    Level3,
    Win,
    Lose,
}

impl SceneId {
    pub fn level(self) -> Option<LevelId> {
        match self {
            SceneId::Level1 => Some(LevelId::One),
            SceneId::Level2 => Some(LevelId::Two),
            SceneId::Level3 => Some(LevelId::Three),
            SceneId::Start | SceneId::Win | SceneId::Lose => None,
        }
    }
}

// ── Start ─────────────────────────────────────────────────────────────────────

/// Title screen with level selection.
#[derive(Clone, Debug)]
pub struct StartScene {
    title: Text,
    instruction: Text,
}

impl StartScene {
    pub fn new(config: &GameConfig, renderer: &dyn Renderer) -> Self {
        let hud = &config.hud;
        Self {
            title: Text::placed(config.messages.title.clone(), hud.title),
            instruction: Text::new(config.messages.instruction.clone(), hud.instruction_size)
                .centered(renderer, config.window.width, hud.instruction_y),
        }
    }

    pub fn update(&mut self, input: &dyn InputSource, renderer: &mut dyn Renderer) -> Option<SceneId> {
        self.title.draw(renderer);
        self.instruction.draw(renderer);

        if input.was_pressed(Key::Level1) {
            Some(SceneId::Level1)
        } else if input.was_pressed(Key::Level2) {
            Some(SceneId::Level2)
        } else if input.was_pressed(Key::Level3) {
            Some(SceneId::Level3)
        } else {
            None
        }
    }
}

// ── Win / Lose ────────────────────────────────────────────────────────────────

/// Centred end-of-level message; confirm returns to the start screen.
#[derive(Clone, Debug)]
pub struct EndScene {
    message: Text,
}

impl EndScene {
    pub fn new(message: &str, config: &GameConfig, renderer: &dyn Renderer) -> Self {
        Self {
            message: Text::new(message, config.hud.message_size).centered(
                renderer,
                config.window.width,
                config.hud.message_y,
            ),
        }
    }

    pub fn message(&self) -> &str {
        &self.message.message
    }

    pub fn update(&mut self, input: &dyn InputSource, renderer: &mut dyn Renderer) -> Option<SceneId> {
        self.message.draw(renderer);
        input.was_released(Key::Confirm).then_some(SceneId::Start)
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum Scene {
    Start(StartScene),
    Level(Box<Level>),
    End(EndScene),
}

impl Scene {
    /// Run one frame; returns the requested transition, if any.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        rng: &mut impl Rng,
    ) -> Option<SceneId> {
        match self {
            Scene::Start(start) => start.update(input, renderer),
            Scene::End(end) => end.update(input, renderer),
            Scene::Level(level) => match level.update(input, renderer, rng) {
                LevelStatus::Active => None,
                LevelStatus::Won => Some(SceneId::Win),
                LevelStatus::Lost => Some(SceneId::Lose),
            },
        }
    }
}

// ── Manager ───────────────────────────────────────────────────────────────────

pub struct SceneManager {
    config: Rc<GameConfig>,
    layouts: LevelLayouts,
    current: SceneId,
    scene: Scene,
}

impl SceneManager {
    /// Starts on the title screen.
    pub fn new(config: Rc<GameConfig>, layouts: LevelLayouts, renderer: &dyn Renderer) -> Self {
        let scene = Scene::Start(StartScene::new(&config, renderer));
        Self {
            config,
            layouts,
            current: SceneId::Start,
            scene,
        }
    }

    /// Replace the live scene. The previous one is dropped.
    pub fn set_scene(
        &mut self,
        id: SceneId,
        renderer: &dyn Renderer,
        rng: &mut impl Rng,
    ) -> Result<(), LayoutError> {
        let config = &self.config;
        self.scene = match id {
            SceneId::Start => Scene::Start(StartScene::new(config, renderer)),
            SceneId::Win => Scene::End(EndScene::new(&config.messages.game_won, config, renderer)),
            SceneId::Lose => Scene::End(EndScene::new(&config.messages.game_over, config, renderer)),
            SceneId::Level1 | SceneId::Level2 | SceneId::Level3 => {
                let level_id = id.level().unwrap_or(LevelId::One);
                let level = Level::new(level_id, self.layouts.get(level_id), config, rng)?;
                Scene::Level(Box::new(level))
            }
        };
        info!("Scene switched {:?} -> {:?}", self.current, id);
        self.current = id;
        Ok(())
    }

    /// Update the live scene and apply any transition it requests.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        rng: &mut impl Rng,
    ) -> Result<(), LayoutError> {
        if let Some(next) = self.scene.update(input, renderer, rng) {
            self.set_scene(next, renderer, rng)?;
        }
        Ok(())
    }

    pub fn current(&self) -> SceneId {
        self.current
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn level(&self) -> Option<&Level> {
        match &self.scene {
            Scene::Level(level) => Some(level.as_ref()),
            _ => None,
        }
    }

    pub fn level_mut(&mut self) -> Option<&mut Level> {
        match &mut self.scene {
            Scene::Level(level) => Some(level.as_mut()),
            _ => None,
        }
    }
}
