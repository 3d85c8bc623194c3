//! Screen size resource.
//!
//! Stores the target framebuffer dimensions in pixels. Placement helpers use
//! it to express stage coordinates relative to the screen center.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
