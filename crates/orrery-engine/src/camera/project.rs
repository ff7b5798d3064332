use glam::{Mat4, Vec2, Vec3};

use crate::api::types::Viewport;

/// Threshold below which the clip-space w component counts as degenerate.
const MIN_W: f32 = 1e-6;

/// Map a world-space point to 2D screen coordinates through the given
/// view/projection matrices and viewport rectangle.
///
/// Returns `None` when the point sits on the camera's eye plane (w close
/// to zero), where the perspective division is undefined; callers skip
/// that label for the frame rather than divide by zero.
pub fn world_to_screen(
    point: Vec3,
    view: Mat4,
    projection: Mat4,
    viewport: Viewport,
) -> Option<Vec2> {
    let clip = projection * view * point.extend(1.0);
    if clip.w.abs() < MIN_W {
        return None;
    }
    let ndc = clip / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width + viewport.x,
        (ndc.y + 1.0) * 0.5 * viewport.height + viewport.y,
    ))
}
