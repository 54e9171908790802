//! Foam particles riding the wave surface.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::FoamParams;
use crate::pointer::PointerState;

/// One foam fleck. Ages in whole ticks; `alpha` is recomputed from age each
/// tick and hits zero exactly when age reaches `max_age`.
#[derive(Debug, Clone, Copy)]
pub struct FoamParticle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub age: u32,
    pub max_age: u32,
    pub size: f32,
    pub alpha: f32,
}

/// Linear fade from `base` at age 0 to zero at `max_age`.
fn fade(base: f32, age: u32, max_age: u32) -> f32 {
    if max_age == 0 {
        return 0.0;
    }
    base * (1.0 - age as f32 / max_age as f32).max(0.0)
}

/// Velocity impulse pushing a particle at offset (dx, dy) away from the
/// pointer. Linear falloff, zero at and beyond `radius`.
fn repulsion(dx: f32, dy: f32, radius: f32, impulse: f32) -> (f32, f32) {
    let dist = (dx * dx + dy * dy).sqrt();
    if dist >= radius || dist < 1e-3 {
        return (0.0, 0.0);
    }
    let strength = impulse * (1.0 - dist / radius);
    (dx / dist * strength, dy / dist * strength)
}

pub struct FoamSystem {
    params: FoamParams,
    particles: Vec<FoamParticle>,
    rng: StdRng,
}

impl FoamSystem {
    pub fn new(params: FoamParams) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        Self {
            params,
            particles: Vec::new(),
            rng,
        }
    }

    /// Particle budget for a canvas of the given width.
    pub fn capacity(&self, width: f32) -> usize {
        let raw = (width.max(0.0) * self.params.capacity_per_px) as usize;
        raw.clamp(self.params.min_capacity, self.params.max_capacity)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[FoamParticle] {
        &self.particles
    }

    /// One simulation tick: spawn while under budget, advect under gravity
    /// and pointer repulsion, age, fade, cull.
    ///
    /// `surface_y` maps an x to the current water surface so spawns land on
    /// the waves. Zero-sized canvases are a no-op.
    pub fn step<F>(&mut self, width: f32, height: f32, pointer: &PointerState, surface_y: F)
    where
        F: Fn(f32) -> f32,
    {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let cap = self.capacity(width);
        let burst = self
            .rng
            .gen_range(self.params.min_spawn_per_tick..=self.params.max_spawn_per_tick);
        for _ in 0..burst {
            if self.particles.len() >= cap {
                break;
            }
            let x = self.rng.gen_range(0.0..width);
            let y = surface_y(x) - self.rng.gen_range(0.0..3.0);
            let max_age = self
                .rng
                .gen_range(self.params.min_age_ticks..=self.params.max_age_ticks);
            self.particles.push(FoamParticle {
                x,
                y,
                vx: self.params.flow_px_per_tick + self.rng.gen_range(-0.45..0.45),
                vy: self.rng.gen_range(-0.7..0.2),
                age: 0,
                max_age,
                size: self
                    .rng
                    .gen_range(self.params.min_size_px..self.params.max_size_px),
                alpha: self.params.base_alpha,
            });
        }

        let pointer_pos = pointer.position();
        for p in &mut self.particles {
            p.vy += self.params.gravity_px_per_tick;
            if let Some(pos) = pointer_pos {
                let (ix, iy) = repulsion(
                    p.x - pos.x,
                    p.y - pos.y,
                    self.params.repulsion_radius_px,
                    self.params.repulsion_impulse,
                );
                p.vx += ix;
                p.vy += iy;
            }
            p.x += p.vx;
            p.y += p.vy;
            p.age += 1;
            p.alpha = fade(self.params.base_alpha, p.age, p.max_age);
        }

        let margin = self.params.bounds_margin_px;
        self.particles.retain(|p| {
            p.age < p.max_age
                && p.x >= -margin
                && p.x <= width + margin
                && p.y >= -margin
                && p.y <= height + margin
        });
    }
}
