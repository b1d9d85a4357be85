//! Top-level frame driver: background, quit handling and the scene manager.

use std::rc::Rc;

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::LayoutError;
use crate::input::{InputSource, Key};
use crate::layout::LevelLayouts;
use crate::render::Renderer;
use crate::scene::{SceneId, SceneManager};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct Game {
    config: Rc<GameConfig>,
    scenes: SceneManager,
}

impl Game {
    pub fn new(config: Rc<GameConfig>, layouts: LevelLayouts, renderer: &dyn Renderer) -> Self {
        let scenes = SceneManager::new(Rc::clone(&config), layouts, renderer);
        Self { config, scenes }
    }

    /// Run one frame. Quit is checked before anything is drawn.
    pub fn frame(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        rng: &mut impl Rng,
    ) -> Result<FrameOutcome, LayoutError> {
        if input.was_pressed(Key::Quit) {
            info!("Quit requested");
            return Ok(FrameOutcome::Quit);
        }

        let window = &self.config.window;
        renderer.draw_image(&window.background, window.width / 2.0, window.height / 2.0);

        self.scenes.update(input, renderer, rng)?;
        Ok(FrameOutcome::Continue)
    }

    pub fn scene(&self) -> SceneId {
        self.scenes.current()
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }
}
