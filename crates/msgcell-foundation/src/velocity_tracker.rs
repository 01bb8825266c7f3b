//! Horizontal velocity estimation for drags whose driver does not report
//! velocity itself.
//!
//! Impulse strategy: velocity is derived from the kinetic energy the drag
//! imparted over a short horizon of recent samples.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    uptime_millis: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
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
            index: 0,
        }
    }

    /// Records `position` observed at `uptime_millis`.
    pub fn add_sample(&mut self, uptime_millis: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample {
            uptime_millis,
            position,
        });
    }

    /// Velocity in units/second; 0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut sample_count = 0;

        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        let mut cursor = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[cursor] {
            let age = (newest.uptime_millis - sample.uptime_millis) as f32;
            let gap = (sample.uptime_millis - previous.uptime_millis).abs() as f32;
            previous = sample;
            if age > HORIZON_MS as f32 || gap > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[sample_count] = sample.position;
            times[sample_count] = -age;
            sample_count += 1;
            if sample_count >= HISTORY_SIZE {
                break;
            }
            cursor = if cursor == 0 { HISTORY_SIZE - 1 } else { cursor - 1 };
        }

        if sample_count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..sample_count], &times[..sample_count]) * 1000.0
    }

    /// Velocity in units/second, clamped to `±max_velocity`.
    pub fn velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Samples are ordered newest first; returns units per millisecond.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_sample_report_zero() {
        let mut tracker = VelocityTracker1D::new();
        assert_eq!(tracker.velocity(), 0.0);
        tracker.add_sample(0, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn steady_drag_reports_its_speed() {
        let mut tracker = VelocityTracker1D::new();
        for step in 0..4 {
            tracker.add_sample(step * 10, step as f32 * 10.0);
        }
        let velocity = tracker.velocity();
        assert!((velocity - 1000.0).abs() < 100.0, "got {velocity}");
    }

    #[test]
    fn leftward_drag_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, -20.0);
        tracker.add_sample(20, -40.0);
        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn pause_longer_than_stop_threshold_zeroes_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn velocity_is_capped_and_reset_clears() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(1, 10_000.0);
        assert_eq!(tracker.velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        assert_eq!(tracker.velocity_with_max(8_000.0), 0.0);
    }
}
