//! ECS components for playback entities.
//!
//! This module groups the component types that make up one on-screen animation
//! instance: the playback state machine itself plus the renderable data the
//! render side reads.
//!
//! Submodules overview:
//! - [`playback`] – frame descriptors, resolved cells, and the playback state machine
//! - [`screenposition`] – screen-space position of the renderable
//! - [`sprite`] – sheet/cell pair the renderer draws

pub mod playback;
pub mod screenposition;
pub mod sprite;
