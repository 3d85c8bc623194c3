//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! read by the playback systems during execution.
//!
//! Overview
//! - `caststore` – movie cast→cell tables produced by the asset pipeline
//! - `screensize` – target framebuffer dimensions in pixels
//! - `worldtime` – simulation time and delta

pub mod caststore;
pub mod screensize;
pub mod worldtime;
