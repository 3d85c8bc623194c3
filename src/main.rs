//! Castplay demo entry point.
//!
//! Headless playback run: builds (or loads) a cast manifest, spawns one
//! animation instance, and ticks the update schedule at a fixed rate until
//! the movie finishes, logging frame placements and cell swaps along the way.
//! The rendering engine is absent on purpose; what a renderer would consume
//! is exactly the `Sprite` and `ScreenPosition` components this binary logs.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --fps 10
//! cargo run -- --manifest assets/casts.json --movie intro
//! ```

use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use rustc_hash::FxHashMap;

use castplay::components::playback::{FrameDescriptor, Playback, PlaybackOptions};
use castplay::components::screenposition::ScreenPosition;
use castplay::components::sprite::Sprite;
use castplay::events::playback::PlaybackFinished;
use castplay::placement::offset_from_center;
use castplay::resources::caststore::{CastStore, MovieSheet};
use castplay::resources::screensize::ScreenSize;
use castplay::resources::worldtime::WorldTime;
use castplay::systems::playback::playback;
use castplay::systems::time::update_world_time;

/// Castplay demo
#[derive(Parser)]
#[command(version, about = "Frame-sequenced sprite playback, headless demo")]
struct Cli {
    /// Cast manifest (JSON) produced by the asset pipeline. Falls back to a
    /// built-in demo movie when omitted.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Movie to play.
    #[arg(long, default_value = "intro")]
    movie: String,

    /// Playback frame rate.
    #[arg(long, default_value_t = 12.0)]
    fps: f32,

    /// Keep the renderable around after the last frame.
    #[arg(long)]
    keep: bool,
}

/// Built-in stand-in for a packed manifest: four casts on one sheet.
fn demo_store() -> CastStore {
    let mut cells = FxHashMap::default();
    cells.insert(1, 0);
    cells.insert(2, 1);
    cells.insert(3, 1); // casts 2 and 3 share a cell, so one swap is suppressed
    cells.insert(4, 2);
    let mut store = CastStore::new();
    store.insert_movie(
        "intro",
        MovieSheet {
            sheet: "intro_atlas".to_string(),
            cells,
        },
    );
    store
}

/// Lay the movie's casts out left to right, one frame per cast.
fn march_frames(store: &CastStore, movie: &str) -> Vec<FrameDescriptor> {
    let Some(sheet) = store.movies.get(movie) else {
        return Vec::new();
    };
    let mut casts: Vec<u32> = sheet.cells.keys().copied().collect();
    casts.sort_unstable();
    casts
        .into_iter()
        .enumerate()
        .map(|(i, cast)| FrameDescriptor {
            cast,
            x: 100.0 + i as f32 * 24.0,
            y: 240.0,
            w: 32.0,
            h: 32.0,
        })
        .collect()
}

#[derive(Resource, Default)]
struct Done(bool);

fn finished_observer(finished: On<PlaybackFinished>, mut done: ResMut<Done>) {
    let event = finished.event();
    log::info!("movie `{}` finished ({:?})", event.movie, event.entity);
    done.0 = true;
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let store = match &cli.manifest {
        Some(path) => match CastStore::load_from_file(&path.to_string_lossy()) {
            Ok(store) => store,
            Err(e) => {
                log::error!("Failed to load manifest {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => demo_store(),
    };
    let frames = march_frames(&store, &cli.movie);

    let opts = PlaybackOptions {
        fps: cli.fps,
        destroy_on_complete: !cli.keep,
        ..Default::default()
    };
    let parts = match Playback::from_movie(&store, cli.movie.clone(), frames, opts) {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("Cannot play `{}`: {e}", cli.movie);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize { w: 640, h: 480 });
    world.insert_resource(Done(false));
    world.insert_resource(store);
    world.spawn(Observer::new(finished_observer));

    let entity = world.spawn(parts).id();
    world
        .get_mut::<Playback>(entity)
        .expect("playback just spawned")
        .play()
        .expect("fresh playback accepts play");
    log::info!("playing `{}` at {} fps", cli.movie, cli.fps);

    let mut update = Schedule::default();
    update.add_systems(playback);

    // --------------- Main loop ---------------
    let dt = 1.0 / 60.0;
    let screen = ScreenSize { w: 640, h: 480 };
    loop {
        update_world_time(&mut world, dt);
        update.run(&mut world);

        if let (Some(sprite), Some(pos)) =
            (world.get::<Sprite>(entity), world.get::<ScreenPosition>(entity))
        {
            let centered = offset_from_center(pos.x(), pos.y(), &screen);
            log::debug!(
                "sheet `{}` cell {} at ({:.1}, {:.1}) [{:+.1}, {:+.1} from center]",
                sprite.sheet,
                sprite.cell,
                pos.x(),
                pos.y(),
                centered.x,
                centered.y,
            );
        }

        if world.resource::<Done>().0 {
            break;
        }
        std::thread::sleep(Duration::from_secs_f32(dt));
    }

    if cli.keep {
        let state = world
            .get::<Playback>(entity)
            .map(|pb| pb.state())
            .expect("renderable kept after completion");
        log::info!("renderable kept, final state {state:?}");
    }
}
