//! Velocity tracking for fling-aware settling.
//!
//! One-dimensional impulse strategy: velocity is derived from the kinetic
//! energy the pointer imparts across recent samples, which is robust to the
//! uneven spacing of touch events.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one contribute.
const HORIZON_MS: u64 = 100;

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    position: f32,
}

/// Tracks absolute positions along one axis and estimates their velocity.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot of the newest sample.
    head: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            head: 0,
        }
    }

    /// Records `position` observed at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: u64, position: f32) {
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.samples[self.head] = Some(Sample { time_ms, position });
    }

    /// Velocity in units per second, 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        // Newest first; times are negative ages relative to the newest sample.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut ages = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let Some(newest) = self.samples[self.head] else {
            return 0.0;
        };
        let mut previous_time = newest.time_ms;
        let mut slot = self.head;

        while count < HISTORY_SIZE {
            let Some(sample) = self.samples[slot] else {
                break;
            };
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous_time.abs_diff(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            ages[count] = -(age as f32);
            previous_time = sample.time_ms;
            count += 1;
            slot = (slot + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &ages[..count]) * 1000.0
    }

    /// Velocity in units per second, capped to `[-max_velocity, max_velocity]`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// `positions` and `times` are newest first. Returns units per millisecond.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    // Walk from the oldest sample toward the newest.
    for i in (1..=oldest).rev() {
        let dt = times[i] - times[i - 1];
        if dt == 0.0 {
            continue;
        }
        let v_curr = (positions[i] - positions[i - 1]) / dt;
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * v^2 with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
