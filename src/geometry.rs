//! CPU-side 2D geometry batching.
//!
//! Every scene paints by appending colored triangles to a [`ShapeBatch`];
//! the renderer uploads the batch once per frame. Positions are in logical
//! pixels, y-down, origin at the top-left of the canvas.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::TAU;

use crate::params::Rgba;

/// Vertex format for the 2D pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex2D {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Growable triangle-list batch rebuilt every frame.
#[derive(Debug, Default)]
pub struct ShapeBatch {
    pub vertices: Vec<Vertex2D>,
    pub indices: Vec<u32>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all geometry but keep the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: Vec2, color: Rgba) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex2D {
            position: position.to_array(),
            color: color.to_array(),
        });
        index
    }

    /// Quad from four corners in order top-left, top-right, bottom-right,
    /// bottom-left, each with its own color.
    pub fn quad(&mut self, corners: [Vec2; 4], colors: [Rgba; 4]) {
        let base = self.vertices.len() as u32;
        for (corner, color) in corners.iter().zip(colors.iter()) {
            self.push(*corner, *color);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Axis-aligned rectangle with a vertical color gradient.
    pub fn rect_vgradient(&mut self, x: f32, y: f32, w: f32, h: f32, top: Rgba, bottom: Rgba) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.quad(
            [
                Vec2::new(x, y),
                Vec2::new(x + w, y),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h),
            ],
            [top, top, bottom, bottom],
        );
    }

    /// Filled disc as a triangle fan. `inner` colors the center, `outer` the
    /// rim, giving a cheap radial gradient.
    pub fn disc(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba, segments: u32) {
        if radius <= 0.0 || segments < 3 {
            return;
        }
        let center_idx = self.push(center, inner);
        let base = self.vertices.len() as u32;
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let rim = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            self.push(rim, outer);
        }
        for i in 0..segments {
            self.indices
                .extend_from_slice(&[center_idx, base + i, base + i + 1]);
        }
    }

    /// Annulus between two radii, uniform color.
    pub fn ring(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        color: Rgba,
        segments: u32,
    ) {
        if outer_radius <= inner_radius || inner_radius < 0.0 || segments < 3 {
            return;
        }
        let base = self.vertices.len() as u32;
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let dir = Vec2::new(angle.cos(), angle.sin());
            self.push(center + dir * inner_radius, color);
            self.push(center + dir * outer_radius, color);
        }
        for i in 0..segments {
            let a = base + i * 2;
            self.indices
                .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
        }
    }

    /// Stroked polyline as a constant-width ribbon with per-point colors.
    ///
    /// `colors` is indexed in step with `points`; if it is shorter, the last
    /// color is repeated. Segments shorter than ~0.1px reuse the previous
    /// direction so the ribbon never collapses to zero width.
    pub fn polyline(&mut self, points: &[Vec2], width: f32, colors: &[Rgba]) {
        if points.len() < 2 || width <= 0.0 || colors.is_empty() {
            return;
        }
        let half = width * 0.5;
        let base = self.vertices.len() as u32;
        let mut last_dir = Vec2::X;
        for i in 0..points.len() {
            let dir = if i == 0 {
                points[1] - points[0]
            } else if i == points.len() - 1 {
                points[i] - points[i - 1]
            } else {
                points[i + 1] - points[i - 1]
            };
            let dir = if dir.length_squared() > 1e-2 {
                dir.normalize()
            } else {
                last_dir
            };
            last_dir = dir;
            let normal = Vec2::new(-dir.y, dir.x);
            let color = colors[i.min(colors.len() - 1)];
            self.push(points[i] + normal * half, color);
            self.push(points[i] - normal * half, color);
        }
        for i in 0..(points.len() as u32 - 1) {
            let a = base + i * 2;
            self.indices
                .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    fn assert_indices_in_bounds(batch: &ShapeBatch) {
        for &i in &batch.indices {
            assert!((i as usize) < batch.vertices.len());
        }
        assert_eq!(batch.indices.len() % 3, 0);
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_quad_emits_two_triangles() {
        let mut batch = ShapeBatch::new();
        batch.rect_vgradient(0.0, 0.0, 10.0, 10.0, WHITE, BLACK);
        assert_eq!(batch.vertices.len(), 4);
        assert_eq!(batch.triangle_count(), 2);
        assert_indices_in_bounds(&batch);
        // Gradient: top row white, bottom row black
        assert_eq!(batch.vertices[0].color, WHITE.to_array());
        assert_eq!(batch.vertices[3].color, BLACK.to_array());
    }

    #[test]
    fn test_degenerate_rect_is_skipped() {
        let mut batch = ShapeBatch::new();
        batch.rect_vgradient(0.0, 0.0, 0.0, 10.0, WHITE, WHITE);
        batch.rect_vgradient(0.0, 0.0, 10.0, -5.0, WHITE, WHITE);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_disc_fan_topology() {
        let mut batch = ShapeBatch::new();
        batch.disc(Vec2::new(5.0, 5.0), 2.0, WHITE, BLACK, 8);
        // 1 center + 9 rim vertices (first repeated to close the fan)
        assert_eq!(batch.vertices.len(), 10);
        assert_eq!(batch.triangle_count(), 8);
        assert_indices_in_bounds(&batch);
    }

    #[test]
    fn test_ring_topology() {
        let mut batch = ShapeBatch::new();
        batch.ring(Vec2::ZERO, 3.0, 5.0, WHITE, 6);
        assert_eq!(batch.vertices.len(), 14);
        assert_eq!(batch.triangle_count(), 12);
        assert_indices_in_bounds(&batch);
    }

    #[test]
    fn test_ring_rejects_inverted_radii() {
        let mut batch = ShapeBatch::new();
        batch.ring(Vec2::ZERO, 5.0, 3.0, WHITE, 6);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_polyline_ribbon_width() {
        let mut batch = ShapeBatch::new();
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        batch.polyline(&points, 4.0, &[WHITE, WHITE]);
        assert_eq!(batch.vertices.len(), 4);
        assert_eq!(batch.triangle_count(), 2);
        // Horizontal line: offsets are purely vertical, half-width each side
        let ys: Vec<f32> = batch.vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.contains(&2.0) && ys.contains(&-2.0));
        assert_indices_in_bounds(&batch);
    }

    #[test]
    fn test_polyline_needs_two_points() {
        let mut batch = ShapeBatch::new();
        batch.polyline(&[Vec2::ZERO], 2.0, &[WHITE]);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_clear_keeps_allocations() {
        let mut batch = ShapeBatch::new();
        batch.rect_vgradient(0.0, 0.0, 4.0, 4.0, WHITE, WHITE);
        let cap = batch.vertices.capacity();
        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.vertices.capacity(), cap);
    }
}
