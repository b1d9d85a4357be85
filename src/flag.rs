//! The goal marker at the end of each level.

use crate::camera::Camera;
use crate::config::PropConfig;
use crate::entities::Player;
use crate::object::{Body, GameObject, Resolve, Sprite};
use crate::render::Renderer;

#[derive(Clone, Debug)]
pub struct Flag {
    body: Body,
    sprite: Sprite,
}

impl Flag {
    pub fn new(x: f64, y: f64, config: &PropConfig) -> Self {
        Self {
            body: Body::new(x, y, &config.sprite, config.radius, config.speed),
            sprite: config.sprite.clone(),
        }
    }
}

impl GameObject for Flag {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn name(&self) -> &'static str {
        "Flag"
    }

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        self.sprite.draw_at(self.body.x, self.body.y, camera, renderer);
    }
}

impl Resolve<Player> for Flag {
    fn resolve_collision(&mut self, player: &mut Player) {
        player.set_reached_flag(true);
    }
}
