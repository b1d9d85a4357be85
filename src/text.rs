//! HUD text and per-entity status lines.

use crate::config::TextPlacement;
use crate::render::{Renderer, Rgb, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub message: String,
    pub style: TextStyle,
    pub x: f64,
    pub y: f64,
}

impl Text {
    pub fn new(message: impl Into<String>, size: u32) -> Self {
        Self {
            message: message.into(),
            style: TextStyle { size, color: None },
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn placed(message: impl Into<String>, placement: TextPlacement) -> Self {
        Self::new(message, placement.size).at(placement.x, placement.y)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Centre horizontally within `width` on row `y`.
    pub fn centered(mut self, renderer: &dyn Renderer, width: f64, y: f64) -> Self {
        self.x = (width - renderer.text_width(&self.message, self.style.size)) / 2.0;
        self.y = y;
        self
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text(&self.message, self.x, self.y, &self.style);
    }
}

/// What a status line reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusSource {
    Health,
    Score,
}

/// A label whose value is queried from its entity every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub label: Text,
    pub source: StatusSource,
}

impl StatusMessage {
    pub fn new(label: Text, source: StatusSource) -> Self {
        Self { label, source }
    }

    pub fn render(&self, value: &str) -> String {
        format!("{} {}", self.label.message, value)
    }

    pub fn draw(&self, value: &str, renderer: &mut dyn Renderer) {
        renderer.draw_text(&self.render(value), self.label.x, self.label.y, &self.label.style);
    }
}
