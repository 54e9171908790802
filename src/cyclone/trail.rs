//! Storm track history: a capped, throttled ring of recent centers.

use std::collections::VecDeque;

use glam::Vec2;

use crate::params::TrailParams;

pub struct TrailBuffer {
    params: TrailParams,
    points: VecDeque<Vec2>,
    last_record_t: f32,
}

impl TrailBuffer {
    pub fn new(params: TrailParams) -> Self {
        Self {
            params,
            points: VecDeque::new(),
            last_record_t: f32::NEG_INFINITY,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn params(&self) -> &TrailParams {
        &self.params
    }

    /// Consider recording `center` at sim time `t`.
    ///
    /// A point is only kept if the center moved at least the minimum
    /// distance since the last kept point and the minimum interval elapsed,
    /// so a slow or paused storm does not flood the buffer. At the cap the
    /// oldest point is evicted.
    pub fn record(&mut self, center: Vec2, t: f32) {
        if let Some(last) = self.points.back() {
            if center.distance(*last) < self.params.min_distance_px {
                return;
            }
            if t - self.last_record_t < self.params.min_interval_s {
                return;
            }
        }
        if self.points.len() >= self.params.cap {
            self.points.pop_front();
        }
        self.points.push_back(center);
        self.last_record_t = t;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.last_record_t = f32::NEG_INFINITY;
    }

    /// Split the trail into runs of connected points, breaking wherever two
    /// consecutive points are further apart than the stretch limit (the
    /// wrap seam). Each run can be stroked as one polyline.
    pub fn runs(&self) -> Vec<Vec<Vec2>> {
        let mut runs = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();
        for &p in &self.points {
            if let Some(&prev) = current.last() {
                if prev.distance(p) > self.params.stretch_limit_px {
                    runs.push(std::mem::take(&mut current));
                }
            }
            current.push(p);
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unthrottled_params() -> TrailParams {
        TrailParams {
            min_distance_px: 0.0,
            min_interval_s: 0.0,
            ..TrailParams::default()
        }
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut trail = TrailBuffer::new(unthrottled_params());
        let cap = TrailParams::default().cap;
        for i in 0..(cap + 50) {
            trail.record(Vec2::new(i as f32 * 10.0, 0.0), i as f32);
        }
        assert_eq!(trail.len(), cap);
        // The 50 oldest points are gone; the front is point index 50
        let front = trail.iter().next().copied();
        assert_eq!(front, Some(Vec2::new(500.0, 0.0)));
        let back = trail.iter().last().copied();
        assert_eq!(back, Some(Vec2::new((cap + 49) as f32 * 10.0, 0.0)));
    }

    #[test]
    fn test_small_moves_are_not_recorded() {
        let mut trail = TrailBuffer::new(TrailParams::default());
        trail.record(Vec2::new(0.0, 0.0), 0.0);
        for i in 1..100 {
            // Jitter of a px or two, well under the 6px threshold
            trail.record(Vec2::new((i % 3) as f32, 0.0), i as f32);
        }
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_rapid_samples_are_throttled_by_time() {
        let mut trail = TrailBuffer::new(TrailParams::default());
        // Large moves but all within one 40ms window after the first
        trail.record(Vec2::new(0.0, 0.0), 0.0);
        trail.record(Vec2::new(100.0, 0.0), 0.01);
        trail.record(Vec2::new(200.0, 0.0), 0.02);
        assert_eq!(trail.len(), 1);
        // Once the interval elapses the next distant point is kept
        trail.record(Vec2::new(300.0, 0.0), 0.05);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_runs_split_at_wrap_seam() {
        let mut trail = TrailBuffer::new(unthrottled_params());
        let limit = TrailParams::default().stretch_limit_px;
        for i in 0..10 {
            trail.record(Vec2::new(900.0 + i as f32 * 10.0, 0.0), i as f32);
        }
        // Wrap: jump back across the canvas
        for i in 0..10 {
            trail.record(Vec2::new(-100.0 + i as f32 * 10.0, 0.0), (10 + i) as f32);
        }
        let runs = trail.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 10);
        assert_eq!(runs[1].len(), 10);
        for run in &runs {
            for pair in run.windows(2) {
                assert!(pair[0].distance(pair[1]) <= limit);
            }
        }
    }

    #[test]
    fn test_clear_resets_throttle() {
        let mut trail = TrailBuffer::new(TrailParams::default());
        trail.record(Vec2::new(0.0, 0.0), 100.0);
        trail.clear();
        assert!(trail.is_empty());
        // A fresh first point is always accepted
        trail.record(Vec2::new(0.0, 0.0), 100.001);
        assert_eq!(trail.len(), 1);
    }
}
