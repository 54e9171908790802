//! Pointer-injected ripples: short-lived surface disturbances.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use crate::params::RippleParams;

/// One live disturbance. Strength decays multiplicatively every tick;
/// geometry (origin, radius) is fixed at injection.
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub origin_x: f32,
    pub strength: f32,
    pub radius: f32,
}

pub struct RippleSystem {
    params: RippleParams,
    ripples: VecDeque<Ripple>,
}

impl RippleSystem {
    pub fn new(params: RippleParams) -> Self {
        Self {
            params,
            ripples: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    /// Spawn a fresh ripple at `origin_x`. At the live cap the oldest ripple
    /// is evicted first. Origins keep their value across canvas resizes; an
    /// off-canvas origin just decays out of sight.
    pub fn inject(&mut self, origin_x: f32) {
        if self.ripples.len() >= self.params.max_live {
            self.ripples.pop_front();
        }
        self.ripples.push_back(Ripple {
            origin_x,
            strength: self.params.initial_strength,
            radius: self.params.radius_px,
        });
    }

    /// Summed surface lift at `x` (logical px, positive raises the surface).
    ///
    /// Each ripple contributes a cosine carrier under a Gaussian envelope:
    /// full strength at the origin, rings alternating outward, negligible
    /// beyond the ripple radius.
    pub fn sample(&self, x: f32) -> f32 {
        self.ripples
            .iter()
            .map(|ripple| {
                let dx = x - ripple.origin_x;
                let sigma = ripple.radius * 0.45;
                let envelope = (-dx * dx / (2.0 * sigma * sigma)).exp();
                let carrier = (dx * TAU / (ripple.radius * 0.5)).cos();
                ripple.strength * envelope * carrier
            })
            .sum()
    }

    /// Apply one tick of decay and drop spent ripples.
    pub fn step(&mut self) {
        let decay = self.params.decay_rate;
        let threshold = self.params.prune_threshold;
        for ripple in &mut self.ripples {
            ripple.strength *= decay;
        }
        self.ripples.retain(|r| r.strength >= threshold);
    }
}
