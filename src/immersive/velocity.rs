use std::collections::VecDeque;

const HISTORY_SIZE: usize = 20;
const HORIZON_MS: u64 = 100;
const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    x: f32,
    y: f32,
}

/// Estimates pointer velocity from recent position samples.
///
/// Velocity is the slope of a least-squares line through the samples of the
/// last 100 ms. A pause longer than 40 ms between samples cuts the history,
/// so a pointer that stopped before lifting reports no velocity.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: u64, x: f32, y: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, x, y });
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Velocity in px/s along x and y.
    pub fn calculate_velocity(&self) -> (f32, f32) {
        let newest = match self.samples.back() {
            Some(s) => *s,
            None => return (0.0, 0.0),
        };

        let mut window: Vec<Sample> = Vec::with_capacity(self.samples.len());
        let mut newer = newest;
        for s in self.samples.iter().rev() {
            if newest.time_ms.saturating_sub(s.time_ms) > HORIZON_MS
                || newer.time_ms.saturating_sub(s.time_ms) > ASSUME_STOPPED_MS
            {
                break;
            }
            window.push(*s);
            newer = *s;
        }
        if window.len() < 2 {
            return (0.0, 0.0);
        }

        let times: Vec<f64> = window
            .iter()
            .map(|s| s.time_ms as f64 - newest.time_ms as f64)
            .collect();
        let xs: Vec<f64> = window.iter().map(|s| s.x as f64).collect();
        let ys: Vec<f64> = window.iter().map(|s| s.y as f64).collect();
        (
            (least_squares_slope(&times, &xs) * 1000.0) as f32,
            (least_squares_slope(&times, &ys) * 1000.0) as f32,
        )
    }
}

fn least_squares_slope(t: &[f64], v: &[f64]) -> f64 {
    let n = t.len() as f64;
    let mean_t = t.iter().sum::<f64>() / n;
    let mean_v = v.iter().sum::<f64>() / n;
    let mut num = 0.0;
    let mut den = 0.0;
    for (ti, vi) in t.iter().zip(v) {
        num += (ti - mean_t) * (vi - mean_v);
        den += (ti - mean_t) * (ti - mean_t);
    }
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
