//! Drawing contract. All coordinates passed here are already screen space.

use crate::object::Sprite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: u32,
    /// `None` draws in the renderer's default colour.
    pub color: Option<Rgb>,
}

pub trait Renderer {
    /// Draw `sprite` centred on `(x, y)`.
    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64);

    /// Draw `text` with its baseline-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Rendered width of `text`, in the same units as screen coordinates.
    fn text_width(&self, text: &str, size: u32) -> f64;
}

/// Discards everything. Useful for headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_image(&mut self, _sprite: &Sprite, _x: f64, _y: f64) {}

    fn draw_text(&mut self, _text: &str, _x: f64, _y: f64, _style: &TextStyle) {}

    fn text_width(&self, text: &str, size: u32) -> f64 {
        text.chars().count() as f64 * size as f64 * 0.5
    }
}
