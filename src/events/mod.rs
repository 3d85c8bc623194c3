//! Event types used by the playback engine.
//!
//! Events are the decoupled completion channel: the playback system triggers
//! them through `Commands` and callers react through observers, without any
//! direct callback wiring into the instance.
//!
//! Submodules:
//! - [`playback`] – completion notifications for finished animations

pub mod playback;
