use std::time::{Duration, Instant};

use crate::ResMut;

/// Monotonic clock resource, advanced once per [`crate::App`] update tick by
/// [`time_system`].
///
/// `delta()` is zero on the tick following construction, since there is no
/// previous tick to measure against; every later `update()` measures the gap
/// since the previous one.
#[derive(Debug)]
pub struct Time {
    startup: Instant,
    last_update: Option<Instant>,
    delta: Duration,
}

impl Time {
    pub fn new() -> Self {
        Self {
            startup: Instant::now(),
            last_update: None,
            delta: Duration::ZERO,
        }
    }

    /// Advances the clock to now, recomputing `delta` against the previous
    /// `update()` call.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = match self.last_update {
            Some(previous) => now.duration_since(previous),
            None => Duration::ZERO,
        };
        self.last_update = Some(now);
    }

    pub fn delta(&self) -> Duration {
        self.delta
    }

    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    pub fn time_since_startup(&self) -> Duration {
        Instant::now().duration_since(self.startup)
    }

    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Advances the [`Time`] resource; registered by [`crate::DefaultPlugins`]
/// on the `First` stage so every other system sees an up-to-date clock.
pub fn time_system(mut time: ResMut<Time>) {
    time.update();
}
