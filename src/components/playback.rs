//! Playback state machine for one animation instance.
//!
//! A [`Playback`] component owns the ordered frame descriptors of a movie and
//! the parallel cell sequence resolved from the
//! [`CastStore`](crate::resources::caststore::CastStore) at construction time.
//! Construction also produces the initial renderable components
//! ([`Sprite`](crate::components::sprite::Sprite),
//! [`ScreenPosition`](crate::components::screenposition::ScreenPosition))
//! already placed at frame 0, so a failed resolution never leaves a
//! half-initialized entity behind.
//!
//! Frame advancement itself is driven by
//! [`systems::playback::playback`](crate::systems::playback::playback), which
//! ticks every playing instance against
//! [`WorldTime`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::placement::Placement;
use crate::resources::caststore::{CastStore, ResolveError};

/// One step of a movie: a cast reference plus its bounding box placement.
///
/// `x,y` are the *center* of the cast's bounding box, `w,h` its dimensions.
/// Immutable once supplied; the sequence lives as long as the [`Playback`]
/// that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameDescriptor {
    pub cast: u32,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Construction-time knobs, with the source defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackOptions {
    /// Frame rate; every frame shares the fixed interval `1/fps`.
    pub fps: f32,
    /// Horizontal placement offset. Any non-zero offset switches the whole
    /// instance to subtractive-offset placement.
    pub offset_x: f32,
    /// Vertical placement offset.
    pub offset_y: f32,
    /// Despawn the renderable when the last frame is reached.
    pub destroy_on_complete: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            fps: 12.0,
            offset_x: 0.0,
            offset_y: 0.0,
            destroy_on_complete: true,
        }
    }
}

/// Lifecycle of a playback instance. Strictly forward: `Ready → Playing →
/// Finished`, with `Cancelled` as the only early exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Constructed, frame 0 placed, tick chain not armed.
    Ready,
    /// Advancing one frame per elapsed interval.
    Playing,
    /// Last frame reached; completion already signalled.
    Finished,
    /// Stopped early; pending ticks are inert.
    Cancelled,
}

/// Construction failure. All-or-nothing: on error no renderable components
/// are produced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaybackError {
    #[error("movie `{movie}`: empty frame sequence")]
    EmptyFrames { movie: String },
    #[error("movie `{movie}`: invalid fps {fps}")]
    InvalidFps { movie: String, fps: f32 },
    #[error("cast resolution failed: {0}")]
    Resolution(#[from] ResolveError),
}

/// Rejected [`Playback::play`] call. Re-playing an active or spent instance
/// is refused rather than restarted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("playback is already playing")]
    AlreadyPlaying,
    #[error("playback already finished")]
    Finished,
    #[error("playback was cancelled")]
    Cancelled,
}

/// One timed animation instance.
///
/// Invariants held for the whole lifetime:
/// - `cells.len() == frames.len()` (resolved once, parallel to the frames);
/// - `current_cell == cells[current_frame]`;
/// - the sprite cell is rewritten only when the resolved cell actually
///   changes between frames, never unconditionally.
#[derive(Component, Debug, Clone)]
pub struct Playback {
    movie: String,
    frames: Vec<FrameDescriptor>,
    cells: Vec<u32>,
    current_frame: usize,
    current_cell: u32,
    frame_interval: f32,
    elapsed: f32,
    placement: Placement,
    destroy_on_complete: bool,
    state: PlaybackState,
}

impl Playback {
    /// Resolve a movie's frames and build the components of its renderable.
    ///
    /// Every cast id is resolved up front through `store`; the returned
    /// [`Sprite`] and [`ScreenPosition`] are already set to frame 0, so the
    /// tuple can be spawned as-is. Fails without side effects if the movie is
    /// unknown, any cast is unmapped, the sequence is empty, or `fps` is not
    /// positive.
    pub fn from_movie(
        store: &CastStore,
        movie: impl Into<String>,
        frames: Vec<FrameDescriptor>,
        opts: PlaybackOptions,
    ) -> Result<(Playback, Sprite, ScreenPosition), PlaybackError> {
        let movie = movie.into();
        if frames.is_empty() {
            return Err(PlaybackError::EmptyFrames { movie });
        }
        if !(opts.fps > 0.0) {
            return Err(PlaybackError::InvalidFps {
                movie,
                fps: opts.fps,
            });
        }

        let casts: Vec<u32> = frames.iter().map(|f| f.cast).collect();
        let resolved = store.resolve(&movie, &casts)?;
        debug_assert_eq!(resolved.cells.len(), frames.len());

        let placement = Placement::from_offsets(opts.offset_x, opts.offset_y);
        let sprite = Sprite::new(resolved.sheet, resolved.cells[0]);
        let position = ScreenPosition::from_vec(placement.anchor(&frames[0]));
        let playback = Playback {
            movie,
            current_cell: resolved.cells[0],
            cells: resolved.cells,
            frames,
            current_frame: 0,
            frame_interval: 1.0 / opts.fps,
            elapsed: 0.0,
            placement,
            destroy_on_complete: opts.destroy_on_complete,
            state: PlaybackState::Ready,
        };
        Ok((playback, sprite, position))
    }

    /// Arm the tick chain. Frame 0 is already on screen; the first advance
    /// lands one interval after this call.
    pub fn play(&mut self) -> Result<(), PlayError> {
        match self.state {
            PlaybackState::Ready => {
                self.state = PlaybackState::Playing;
                self.elapsed = 0.0;
                Ok(())
            }
            PlaybackState::Playing => Err(PlayError::AlreadyPlaying),
            PlaybackState::Finished => Err(PlayError::Finished),
            PlaybackState::Cancelled => Err(PlayError::Cancelled),
        }
    }

    /// Stop the instance early. Any pending tick sees the state change and
    /// does nothing, so the renderable can be torn down safely afterwards.
    pub fn cancel(&mut self) {
        if matches!(self.state, PlaybackState::Ready | PlaybackState::Playing) {
            self.state = PlaybackState::Cancelled;
        }
    }

    /// Show a specific frame: rewrite the anchor position unconditionally and
    /// swap the sprite cell only if it differs from the one on screen.
    ///
    /// Returns whether a cell swap happened. An out-of-range index is a
    /// programming error (normal playback never produces one) and panics.
    pub fn set_frame(
        &mut self,
        frame: usize,
        sprite: &mut Sprite,
        position: &mut ScreenPosition,
    ) -> bool {
        assert!(
            frame < self.frames.len(),
            "movie `{}`: frame {} out of range ({} frames)",
            self.movie,
            frame,
            self.frames.len(),
        );
        self.current_frame = frame;
        position.set_pos(self.placement.anchor(&self.frames[frame]));
        let cell = self.cells[frame];
        if cell != self.current_cell {
            log::debug!(
                "movie `{}`: swap to cell {} at frame {}",
                self.movie,
                cell,
                frame
            );
            sprite.cell = cell;
            self.current_cell = cell;
            true
        } else {
            false
        }
    }

    /// Accumulate tick time; true when a full interval elapsed and the next
    /// frame is due. Inert unless the instance is playing, which is also the
    /// cancellation check at the top of every tick.
    pub(crate) fn due(&mut self, dt: f32) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.frame_interval {
            return false;
        }
        self.elapsed -= self.frame_interval;
        true
    }

    /// Terminal transition; the playback system calls this exactly once, on
    /// the tick that shows (or would pass) the last frame.
    pub(crate) fn finish(&mut self) {
        self.state = PlaybackState::Finished;
    }

    pub fn movie(&self) -> &str {
        &self.movie
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Cell currently shown by the sprite.
    pub fn current_cell(&self) -> u32 {
        self.current_cell
    }

    /// Fixed per-frame interval in seconds (`1/fps`).
    pub fn frame_interval(&self) -> f32 {
        self.frame_interval
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn destroy_on_complete(&self) -> bool {
        self.destroy_on_complete
    }
}
