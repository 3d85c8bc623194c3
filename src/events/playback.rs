//! Playback completion events.
//!
//! When a [`Playback`](crate::components::playback::Playback) shows its last
//! frame, a [`PlaybackFinished`] event is triggered. Observers subscribe to it
//! to chain follow-up actions (spawn the next scene, unlock input, etc.).
//! The event fires exactly once per instance, after the final frame's
//! placement update, and after any despawn of the renderable was queued.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|finished: On<PlaybackFinished>| {
//!     if finished.event().movie == "intro" {
//!         // start the menu music, enable input, ...
//!     }
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::components::playback::Playback`] – the animation instance
//! - [`crate::systems::playback::playback`] – the system that emits these events

use bevy_ecs::prelude::*;

/// Event emitted when a playback instance reaches its last frame.
///
/// If the instance was constructed with `destroy_on_complete`, `entity` is
/// already queued for despawn when observers run; use the `movie` name to
/// identify what finished.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFinished {
    /// The entity whose playback completed.
    pub entity: Entity,
    /// Movie name of the completed animation.
    pub movie: String,
}
