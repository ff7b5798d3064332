//! Per-body model transform composition.
//!
//! The order is load-bearing: orbit rotation, then translation out to the
//! orbital distance, then axial tilt, then spin, then uniform scale.
//! Tilt must follow the translation so it tips the body and not the whole
//! orbit; scale comes last so it cannot stretch the translation.

use glam::{Mat4, Vec3};

use crate::core::body::CelestialBody;
use crate::core::scene::Scene;

/// Orbit frame for a body: every ancestor's orbit rotation + translation,
/// then this body's own. Contains no tilt, spin, or scale, so it chains
/// cleanly into children and its translation column is the body's world
/// anchor point.
pub fn orbit_frame(scene: &Scene, body: &CelestialBody) -> Mat4 {
    let parent = match body.parent.and_then(|id| scene.get(id)) {
        Some(p) => orbit_frame(scene, p),
        None => Mat4::IDENTITY,
    };
    parent
        * Mat4::from_rotation_y(body.orbit_angle)
        * Mat4::from_translation(Vec3::new(body.distance, 0.0, 0.0))
}

/// World anchor position: the orbit frame's origin, recorded before
/// tilt and spin are applied. Trails and labels hang off this point.
pub fn anchor_position(scene: &Scene, body: &CelestialBody) -> Vec3 {
    orbit_frame(scene, body).w_axis.truncate()
}

/// Full model transform for drawing the body's sphere.
pub fn model_transform(scene: &Scene, body: &CelestialBody) -> Mat4 {
    orbit_frame(scene, body)
        * Mat4::from_rotation_z(body.tilt.to_radians())
        * Mat4::from_rotation_y(body.rotation_angle)
        * Mat4::from_scale(Vec3::splat(body.radius))
}
