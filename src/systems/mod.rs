//! Engine systems.
//!
//! This module groups the ECS systems that drive playback.
//!
//! Submodules overview
//! - [`playback`] – advance playing animations, update renderables, signal completion
//! - [`time`] – update simulation time and delta

pub mod playback;
pub mod time;
