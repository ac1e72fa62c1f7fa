use std::collections::VecDeque;

const MAX_FRAME_TIME: f32 = 0.25; // Seconds. Longer stalls are treated as this long.

/// Smoothed frame rate over the last `sample_size` frames. Macroquad's
/// `get_fps` jumps around too much to read on the HUD.
#[derive(Debug)]
pub struct FrameRate {
    times: VecDeque<f32>,
    current_sum: f32,
    sample_size: usize,
    pub rate: f32,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameRate {
    pub fn new(sample_size: usize) -> Self {
        Self {
            times: VecDeque::with_capacity(sample_size),
            current_sum: 0.0,
            sample_size: sample_size.max(1),
            rate: 60.0,
        }
    }

    /// Records one frame and returns the time to simulate for it.
    pub fn tick(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_TIME)
        } else {
            0.0
        };

        self.times.push_back(dt);
        self.current_sum += dt;
        if self.times.len() > self.sample_size {
            if let Some(oldest) = self.times.pop_front() {
                self.current_sum -= oldest;
            }
        }

        let average_dt = self.current_sum / self.times.len() as f32;
        if average_dt > 0.0 {
            self.rate = 1.0 / average_dt;
        }

        dt
    }
}
