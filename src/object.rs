//! Physical object model shared by everything that lives in a level.
//!
//! A [`Body`] carries position, bounds and collision shape. The
//! [`GameObject`] trait exposes it, and [`Resolve`] is the per-pairing
//! collision contract: `a.collide_with(&mut b)` runs the geometric test and,
//! on contact, lets `a` (the receiver) react to `b`. The reverse direction is
//! never implied.

use log::trace;
use rand::Rng;

use crate::camera::Camera;
use crate::render::Renderer;

// ── Sprite ────────────────────────────────────────────────────────────────────

/// Image identity plus the pixel dimensions used for bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub image: String,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    pub fn new(image: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            image: image.into(),
            width,
            height,
        }
    }

    /// Draw centred on a world position.
    pub fn draw_at(&self, x: f64, y: f64, camera: &Camera, renderer: &mut dyn Renderer) {
        let (sx, sy) = camera.to_screen(x, y);
        renderer.draw_image(self, sx, sy);
    }
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// Position is the centre of the object.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `Some` only for objects that may use the circle test.
    pub radius: Option<f64>,
    /// Scroll speed; informational, collision never reads it.
    pub speed: f64,
    pub can_remove: bool,
}

impl Body {
    pub fn new(x: f64, y: f64, sprite: &Sprite, radius: Option<f64>, speed: f64) -> Self {
        Self {
            x,
            y,
            width: sprite.width,
            height: sprite.height,
            radius,
            speed,
            can_remove: false,
        }
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Circle test when both sides have a radius, rectangle test otherwise.
    pub fn overlaps(&self, other: &Body) -> bool {
        match (self.radius, other.radius) {
            (Some(r1), Some(r2)) => circles_overlap(self, r1, other, r2),
            _ => rects_overlap(self, other),
        }
    }
}

/// Strict: centres exactly `r1 + r2` apart do not touch.
pub fn circles_overlap(a: &Body, r1: f64, b: &Body, r2: f64) -> bool {
    (a.x - b.x).hypot(a.y - b.y) < r1 + r2
}

/// Inclusive interval overlap on both axes.
pub fn rects_overlap(a: &Body, b: &Body) -> bool {
    a.left() <= b.right() && b.left() <= a.right() && a.top() <= b.bottom() && b.top() <= a.bottom()
}

// ── Object contract ───────────────────────────────────────────────────────────

pub trait GameObject {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Type name used in trace output.
    fn name(&self) -> &'static str;

    fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer);

    fn can_remove(&self) -> bool {
        self.body().can_remove
    }
}

/// Collision reaction of `Self` when it is tested against a `T`.
///
/// Implementing `Resolve<T>` is what allows the pairing at all: a level can
/// only test combinations the type system knows how to resolve.
pub trait Resolve<T: GameObject + ?Sized>: GameObject {
    /// Base hook; does nothing.
    fn resolve_collision(&mut self, _other: &mut T) {}

    /// Returns whether the shapes touched.
    fn collide_with(&mut self, other: &mut T) -> bool {
        if !self.body().overlaps(other.body()) {
            return false;
        }
        trace!("'{}' collided with '{}'", self.name(), other.name());
        self.resolve_collision(other);
        true
    }
}

// ── Patrol ────────────────────────────────────────────────────────────────────

/// Back-and-forth horizontal drift around a spawn point.
#[derive(Clone, Debug)]
pub struct Patrol {
    origin_x: f64,
    direction: f64,
    speed: f64,
    max_displacement: f64,
}

impl Patrol {
    /// The initial direction is a coin flip.
    pub fn new(origin_x: f64, speed: f64, max_displacement: f64, rng: &mut impl Rng) -> Self {
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            origin_x,
            direction,
            speed,
            max_displacement,
        }
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Advance `x` one frame, reversing once past the band edge.
    pub fn step(&mut self, x: f64) -> f64 {
        let x = x + self.direction * self.speed;
        if (x - self.origin_x).abs() > self.max_displacement {
            self.direction = -self.direction;
        }
        x
    }
}
