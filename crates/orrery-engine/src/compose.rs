//! Per-tick frame composition: kinematics, trail recording, then draw
//! calls in a fixed sequence: spheres, trails, labels, HUD. The HUD is
//! drawn last so it is never occluded; trails draw after spheres so
//! their blending sees the finished geometry.

use glam::Vec3;

use crate::api::types::{MeshHandle, Rgb};
use crate::camera::project::world_to_screen;
use crate::context::SceneContext;
use crate::core::body::CelestialBody;
use crate::core::scene::Scene;
use crate::core::transform::{anchor_position, model_transform};
use crate::render::traits::{Renderer, TextLayer};

const HUD_X: f32 = 10.0;
const HUD_LINE_HEIGHT: f32 = 30.0;
const HUD_SCALE: f32 = 0.5;
const LABEL_SCALE: f32 = 0.5;
/// Approximate glyph advance in pixels at the label scale, used to
/// center labels without measuring the rasterized text.
const LABEL_CHAR_WIDTH: f32 = 12.0;

/// Advance and draw one frame.
pub fn compose_frame<R, T>(ctx: &mut SceneContext, mesh: MeshHandle, renderer: &mut R, text: &mut T)
where
    R: Renderer + ?Sized,
    T: TextLayer + ?Sized,
{
    advance_bodies(ctx);
    record_trails(ctx);

    let uniform = ctx.camera.uniform(ctx.viewport.aspect());
    renderer.begin_frame(&uniform);
    if let Some(root) = ctx.scene.root() {
        draw_subtree(&ctx.scene, root, mesh, renderer);
    }
    draw_trails(&ctx.scene, renderer);
    if ctx.show_labels {
        draw_labels(ctx, text);
    }
    draw_hud(ctx, text);
}

/// Integrate all angles by one fixed step, then refresh every body's
/// world anchor. Anchors are computed against the post-step scene in a
/// separate pass because each one reads the whole ancestor chain.
fn advance_bodies(ctx: &mut SceneContext) {
    for body in ctx.scene.iter_mut() {
        ctx.clock.advance(body);
    }
    let anchors: Vec<Vec3> = ctx
        .scene
        .iter()
        .map(|body| anchor_position(&ctx.scene, body))
        .collect();
    for (body, anchor) in ctx.scene.iter_mut().zip(anchors) {
        body.anchor = anchor;
    }
}

/// Orbiting bodies record their anchor each tick; the root holds still
/// and leaves no trail.
fn record_trails(ctx: &mut SceneContext) {
    for body in ctx.scene.iter_mut() {
        if body.parent.is_some() {
            let anchor = body.anchor;
            body.trail.push(anchor);
        }
    }
}

/// Depth-first over the hierarchy, each body before its satellites.
fn draw_subtree<R>(scene: &Scene, body: &CelestialBody, mesh: MeshHandle, renderer: &mut R)
where
    R: Renderer + ?Sized,
{
    renderer.draw_mesh(mesh, model_transform(scene, body), body.texture);
    for child in scene.children_of(body.id) {
        draw_subtree(scene, child, mesh, renderer);
    }
}

fn draw_trails<R>(scene: &Scene, renderer: &mut R)
where
    R: Renderer + ?Sized,
{
    for body in scene.iter() {
        let vertices = body.trail.line_vertices();
        if !vertices.is_empty() {
            renderer.draw_line_strip(&vertices);
        }
    }
}

/// Project each body's label point (just in front of its surface along
/// -Z) to the screen and draw the name centered there. Bodies whose
/// anchor lands on the eye plane skip their label for this frame.
fn draw_labels<T>(ctx: &SceneContext, text: &mut T)
where
    T: TextLayer + ?Sized,
{
    let view = ctx.camera.view_matrix();
    let projection = ctx.camera.projection_matrix(ctx.viewport.aspect());
    for body in ctx.scene.iter() {
        let world = body.anchor - Vec3::new(0.0, 0.0, body.radius);
        let Some(screen) = world_to_screen(world, view, projection, ctx.viewport) else {
            continue;
        };
        let half_width = body.name.len() as f32 * LABEL_CHAR_WIDTH * 0.5;
        text.draw_text(
            &body.name,
            screen.x - half_width,
            screen.y,
            LABEL_SCALE,
            Rgb::WHITE,
        );
    }
}

fn draw_hud<T>(ctx: &SceneContext, text: &mut T)
where
    T: TextLayer + ?Sized,
{
    let lines = [
        format!(
            "Rotation Speed: {:.2} (Up/Down/Left/Right Keys)",
            ctx.clock.rotation_multiplier
        ),
        format!("Orbit Speed: {:.2}", ctx.clock.orbit_multiplier),
        format!("Current Font: {} (Press F to change)", ctx.active_font_name()),
        format!(
            "Planet Names: {} (Press Ctrl to toggle)",
            if ctx.show_labels { "Shown" } else { "Hidden" }
        ),
        "Camera Control: Left-click (Rotate), Right-click (Pan), Scroll (Zoom), R (Reset)"
            .to_string(),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = HUD_LINE_HEIGHT * (i + 1) as f32;
        text.draw_text(line, HUD_X, y, HUD_SCALE, Rgb::YELLOW);
    }
}
