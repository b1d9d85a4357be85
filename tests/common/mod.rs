#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use side_scroller::config::GameConfig;
use side_scroller::layout::{SpawnKind, SpawnRecord};
use side_scroller::object::Sprite;
use side_scroller::render::{Renderer, TextStyle};

pub const GAME_INI: &str = include_str!("../../assets/game.ini");

pub fn config() -> GameConfig {
    GameConfig::from_ini_str(GAME_INI).unwrap()
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn record(kind: SpawnKind, x: f64, y: f64) -> SpawnRecord {
    SpawnRecord { kind, x, y }
}

/// What a [`RecordingRenderer`] saw, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Image { image: String, x: f64, y: f64 },
    Text { text: String, x: f64, y: f64 },
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                DrawCall::Image { .. } => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Image { image, .. } => Some(image.as_str()),
                DrawCall::Text { .. } => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64) {
        self.calls.push(DrawCall::Image {
            image: sprite.image.clone(),
            x,
            y,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, _style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn text_width(&self, text: &str, size: u32) -> f64 {
        text.chars().count() as f64 * size as f64 * 0.5
    }
}
