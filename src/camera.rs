//! Scrolling camera.
//!
//! Objects keep world coordinates; the camera offset is subtracted at draw
//! time, so scrolling means moving the camera rather than every object.

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    boundary_x: Option<(f64, f64)>,
}

impl Camera {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            boundary_x: None,
        }
    }

    /// Keep the view inside `[left, right]` from now on.
    pub fn set_boundary_x(&mut self, left: f64, right: f64) {
        self.boundary_x = Some((left, right));
        self.set_x(self.x);
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// World x of the right edge of the view.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = match self.boundary_x {
            Some((_, right)) if x + self.width > right => right - self.width,
            Some((left, _)) if x < left => left,
            _ => x,
        };
    }

    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.x, y - self.y)
    }
}
