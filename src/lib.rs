//! Castplay library.
//!
//! Frame-sequenced sprite animation playback: a movie's cast references are
//! resolved to atlas cells once, then a tick-driven system advances the frames
//! at a fixed interval, swapping the visible cell only when it actually
//! changes.
//!
//! This module exposes the components, resources, systems, and events for use
//! in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod placement;
pub mod resources;
pub mod systems;
