//! UV-sphere tessellation. One unit sphere is generated at startup and
//! shared by every body; per-body size comes from the model transform.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Interleaved vertex layout: position, normal, texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh for a UV sphere.
pub struct SphereMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Tessellate a sphere with `sectors` longitudinal slices and
    /// `stacks` latitudinal rings. Vertices are laid out stack-major,
    /// poles duplicated per sector so texture coordinates stay seamless.
    pub fn generate(radius: f32, sectors: u32, stacks: u32) -> Self {
        assert!(sectors >= 3 && stacks >= 2, "sphere too coarse to tessellate");

        let sector_step = 2.0 * PI / sectors as f32;
        let stack_step = PI / stacks as f32;
        let inv_radius = 1.0 / radius;

        let mut vertices = Vec::with_capacity(((sectors + 1) * (stacks + 1)) as usize);
        for i in 0..=stacks {
            // From the north pole (+PI/2) down to the south pole.
            let stack_angle = PI / 2.0 - i as f32 * stack_step;
            let xy = radius * stack_angle.cos();
            let z = radius * stack_angle.sin();
            for j in 0..=sectors {
                let sector_angle = j as f32 * sector_step;
                let position = Vec3::new(xy * sector_angle.cos(), xy * sector_angle.sin(), z);
                let uv = Vec2::new(j as f32 / sectors as f32, i as f32 / stacks as f32);
                vertices.push(MeshVertex {
                    position: position.to_array(),
                    normal: (position * inv_radius).to_array(),
                    uv: uv.to_array(),
                });
            }
        }

        let mut indices = Vec::with_capacity((6 * sectors * (stacks - 1)) as usize);
        for i in 0..stacks {
            let mut k1 = i * (sectors + 1);
            let mut k2 = k1 + sectors + 1;
            for _ in 0..sectors {
                // The first stack has only lower triangles, the last only
                // upper ones; the pole rows are degenerate otherwise.
                if i != 0 {
                    indices.extend_from_slice(&[k1, k2, k1 + 1]);
                }
                if i != stacks - 1 {
                    indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
                }
                k1 += 1;
                k2 += 1;
            }
        }

        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}
