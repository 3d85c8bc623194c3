//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores the renderable's anchor in screen
//! (pixel) coordinates. The playback system rewrites it on every frame
//! advance; the render side only reads it.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Screen-space anchor (top-left) for a renderable.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vec2,
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Create a ScreenPosition from an existing Vec2.
    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }

    /// X coordinate.
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Set the entire position.
    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Translate by delta.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_creates_correct_position() {
        let pos = ScreenPosition::new(10.0, 20.0);
        assert!(approx_eq(pos.x(), 10.0));
        assert!(approx_eq(pos.y(), 20.0));
    }

    #[test]
    fn test_default_is_zero() {
        let pos = ScreenPosition::default();
        assert!(approx_eq(pos.x(), 0.0));
        assert!(approx_eq(pos.y(), 0.0));
    }

    #[test]
    fn test_set_pos() {
        let mut pos = ScreenPosition::new(0.0, 0.0);
        pos.set_pos(Vec2::new(100.0, 200.0));
        assert!(approx_eq(pos.x(), 100.0));
        assert!(approx_eq(pos.y(), 200.0));
    }

    #[test]
    fn test_translate() {
        let mut pos = ScreenPosition::new(10.0, 20.0);
        pos.translate(5.0, -3.0);
        assert!(approx_eq(pos.x(), 15.0));
        assert!(approx_eq(pos.y(), 17.0));
    }
}
