use glam::Vec3;

use crate::api::types::{BodyId, TextureHandle};
use crate::core::trail::TrailBuffer;

/// One orbiting or rotating body: the root star, a planet, or a moon.
///
/// Effective angular speeds are never stored; they are derived as
/// base x global multiplier at every integration step, so multiplier
/// changes can never drift out of sync with the stored value.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: String,
    /// Sphere radius in world units (uniform scale of the shared unit mesh).
    pub radius: f32,
    /// Orbital distance from the parent frame origin.
    pub distance: f32,
    /// Axial tilt in degrees, applied after the orbital translation.
    pub tilt: f32,
    pub base_orbit_speed: f32,
    pub base_rotation_speed: f32,
    /// Accumulated angles in radians. Unbounded; only sin/cos are consumed.
    pub orbit_angle: f32,
    pub rotation_angle: f32,
    pub texture: TextureHandle,
    /// Frame this body orbits in: `None` for the root, otherwise the
    /// referenced body's orbit frame. Moons simply name their planet here.
    pub parent: Option<BodyId>,
    pub trail: TrailBuffer,
    /// World-space anchor recorded by the transform pass (pre-tilt/spin),
    /// consumed by trail appends and label projection.
    pub anchor: Vec3,
}

impl CelestialBody {
    pub fn new(id: BodyId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            radius: 1.0,
            distance: 0.0,
            tilt: 0.0,
            base_orbit_speed: 0.0,
            base_rotation_speed: 0.0,
            orbit_angle: 0.0,
            rotation_angle: 0.0,
            texture: TextureHandle::PLACEHOLDER,
            parent: None,
            trail: TrailBuffer::new(),
            anchor: Vec3::ZERO,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Axial tilt in degrees.
    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_orbit_speed(mut self, base: f32) -> Self {
        self.base_orbit_speed = base;
        self
    }

    pub fn with_rotation_speed(mut self, base: f32) -> Self {
        self.base_rotation_speed = base;
        self
    }

    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The root body neither orbits nor leaves a trail.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let body = CelestialBody::new(BodyId(1), "Sun");
        assert_eq!(body.name, "Sun");
        assert!(body.is_root());
        assert_eq!(body.texture, TextureHandle::PLACEHOLDER);
        assert!(body.trail.is_empty());
    }

    #[test]
    fn builder_chain() {
        let body = CelestialBody::new(BodyId(2), "Earth")
            .with_radius(1.3)
            .with_distance(9.0)
            .with_tilt(23.4)
            .with_orbit_speed(3.0)
            .with_rotation_speed(1.0)
            .with_parent(BodyId(1));
        assert!(!body.is_root());
        assert_eq!(body.parent, Some(BodyId(1)));
        assert!((body.tilt - 23.4).abs() < 1e-6);
    }
}
