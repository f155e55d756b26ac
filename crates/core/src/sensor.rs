//! Accelerometer handoff.
//!
//! The platform sensor service publishes samples from its own thread; the simulation
//! takes the most recent one at the next step. The slot holds at most one sample: a new
//! sample overwrites a stale one and nothing is queued.

use bevy::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard};

/// One 3-axis acceleration sample (in g). Only `x` and `y` drive gravity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn tilt(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Process-wide sensor handle. Created by the application, cloned into the sensor source
/// and inserted into the app as a resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct SensorHandle {
    slot: Arc<Mutex<Option<AccelSample>>>,
}

impl SensorHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites whatever sample is waiting.
    pub fn publish(&self, sample: AccelSample) {
        *self.lock() = Some(sample);
    }

    /// Takes the waiting sample, leaving the slot empty.
    pub fn take_latest(&self) -> Option<AccelSample> {
        self.lock().take()
    }

    pub fn peek(&self) -> Option<AccelSample> {
        *self.lock()
    }

    // A panicking publisher cannot leave a half-written `Option<Copy>`, so the value is still usable.
    fn lock(&self) -> MutexGuard<'_, Option<AccelSample>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
