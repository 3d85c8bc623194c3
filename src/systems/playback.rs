//! Playback advancement system.
//!
//! [`playback`] is the tick half of the playback state machine: it advances
//! every playing [`Playback`](crate::components::playback::Playback) by at
//! most one frame per tick, updates the renderable, and finishes instances
//! that reach their last frame.
//!
//! # Tick Flow
//!
//! Each tick, per playing instance:
//!
//! 1. Accumulate [`WorldTime::delta`](crate::resources::worldtime::WorldTime);
//!    do nothing until one frame interval has elapsed (cancelled or
//!    not-yet-played instances bail out here)
//! 2. Show the next frame: position is rewritten unconditionally, the sprite
//!    cell only when the resolved cell differs from the one on screen
//! 3. On the last frame: queue the renderable despawn (if requested), then
//!    trigger [`PlaybackFinished`](crate::events::playback::PlaybackFinished)
//!
//! Teardown and completion signalling are two separately queued steps, in
//! that order, so observers always run with the despawn already decided.
//!
//! # Related
//!
//! - [`crate::components::playback::Playback`] – per-entity playback state
//! - [`crate::resources::caststore::CastStore`] – where cells come from
//! - [`crate::events::playback::PlaybackFinished`] – completion notification

use bevy_ecs::prelude::*;

use crate::components::playback::Playback;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::events::playback::PlaybackFinished;
use crate::resources::worldtime::WorldTime;

/// Advance playing animations and update their renderables.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates [`Playback`] state, [`ScreenPosition`] every advance, and
///   [`Sprite`] only on an actual cell swap (suppressed swaps leave the
///   sprite's change tick untouched).
/// - Queues despawn and triggers [`PlaybackFinished`] exactly once per
///   instance, on the tick that reaches the final frame.
pub fn playback(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Playback, &mut Sprite, &mut ScreenPosition)>,
    mut commands: Commands,
) {
    for (entity, mut pb, mut sprite, mut position) in query.iter_mut() {
        if !pb.due(time.delta) {
            continue;
        }

        let next = pb.current_frame() + 1;
        if next < pb.frame_count() {
            // Swap suppression must survive change detection: only mark the
            // sprite changed when a cell was actually written.
            let swapped = pb.set_frame(next, sprite.bypass_change_detection(), &mut *position);
            if swapped {
                sprite.set_changed();
            }
        }

        // A single-frame movie completes on its first due tick; everything
        // else completes on the tick that showed the last frame.
        if next + 1 >= pb.frame_count() {
            pb.finish();
            if pb.destroy_on_complete() {
                commands.entity(entity).try_despawn();
            }
            commands.trigger(PlaybackFinished {
                entity,
                movie: pb.movie().to_string(),
            });
        }
    }
}
