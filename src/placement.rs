//! Placement math for playback frames.
//!
//! Frame descriptors carry the *center* of a cast's bounding box, while the
//! render side anchors sprites at their top-left corner. This module holds the
//! conversion helpers plus [`Placement`], the per-instance rule that turns a
//! frame descriptor into a screen anchor.

use glam::Vec2;

use crate::components::playback::FrameDescriptor;
use crate::resources::screensize::ScreenSize;

/// Convert a center point plus bounding box into the top-left (outer) anchor.
///
/// Pure helper, usable without any playback instance. Argument order follows
/// the source asset convention: height before width.
pub fn center_to_outer(x: f32, y: f32, h: f32, w: f32) -> Vec2 {
    Vec2::new(x - w * 0.5, y - h * 0.5)
}

/// Express a stage coordinate relative to the center of the screen.
pub fn offset_from_center(x: f32, y: f32, screen: &ScreenSize) -> Vec2 {
    Vec2::new(x - screen.w as f32 * 0.5, y - screen.h as f32 * 0.5)
}

/// How a playback instance maps frame descriptors to screen anchors.
///
/// The mode is chosen once at construction from the supplied offsets and never
/// re-evaluated per frame:
/// - both offsets zero → [`Placement::Centered`], every frame anchors at
///   [`center_to_outer`] of its own bounding box;
/// - any offset non-zero → [`Placement::Offset`], every frame anchors at
///   `(x - dx, y - dy)` regardless of its box size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Centered,
    Offset { dx: f32, dy: f32 },
}

impl Placement {
    /// Select the placement mode for a pair of construction-time offsets.
    pub fn from_offsets(dx: f32, dy: f32) -> Self {
        if dx == 0.0 && dy == 0.0 {
            Placement::Centered
        } else {
            Placement::Offset { dx, dy }
        }
    }

    /// Screen anchor for one frame descriptor under this mode.
    pub fn anchor(&self, frame: &FrameDescriptor) -> Vec2 {
        match *self {
            Placement::Centered => center_to_outer(frame.x, frame.y, frame.h, frame.w),
            Placement::Offset { dx, dy } => Vec2::new(frame.x - dx, frame.y - dy),
        }
    }
}
