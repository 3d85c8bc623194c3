use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Renderable sprite, identified by the atlas sheet it comes from and the
/// sub-image (cell) currently shown. The render system resolves the cell to a
/// source rectangle in the sheet; nothing here is pixel data.
///
/// The playback system is the only writer of `cell` while an animation is
/// active.
#[derive(Component, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Texture atlas key, as produced by the offline packing pipeline.
    pub sheet: String,
    /// Sub-image id inside the sheet.
    pub cell: u32,
}

impl Sprite {
    pub fn new(sheet: impl Into<String>, cell: u32) -> Self {
        Self {
            sheet: sheet.into(),
            cell,
        }
    }
}
