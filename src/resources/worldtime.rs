use bevy_ecs::prelude::Resource;

/// Simulation clock shared by all tick-driven systems.
///
/// `delta` is the scaled time step of the current tick in seconds; `elapsed`
/// accumulates it. Tests drive this directly as a fake clock.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
