//! Bindings from raw input events to simulation actions.

use crate::context::SceneContext;
use crate::core::clock::SpeedAdjust;
use crate::input::queue::{InputEvent, InputQueue, KeyCode};

/// Drain the queue and apply every event, in arrival order.
pub fn apply_input(ctx: &mut SceneContext, queue: &mut InputQueue) {
    for event in queue.drain() {
        match event {
            InputEvent::PointerMove { x, y } => ctx.camera.pointer_moved(x, y),
            InputEvent::Button { button, pressed } => ctx.camera.set_button(button, pressed),
            InputEvent::Scroll { dy } => ctx.camera.scroll(dy),
            InputEvent::Key { key, pressed: true } => apply_key(ctx, key),
            InputEvent::Key { pressed: false, .. } => {}
        }
    }
}

fn apply_key(ctx: &mut SceneContext, key: KeyCode) {
    match key {
        KeyCode::Escape => ctx.quit = true,
        KeyCode::Up => ctx.clock.adjust(SpeedAdjust::Increase),
        KeyCode::Down => ctx.clock.adjust(SpeedAdjust::Decrease),
        KeyCode::Right => ctx.clock.adjust(SpeedAdjust::SpeedUp),
        KeyCode::Left => ctx.clock.adjust(SpeedAdjust::SlowDown),
        KeyCode::Control => ctx.show_labels = !ctx.show_labels,
        KeyCode::F => ctx.cycle_font(),
        KeyCode::R => ctx.camera.reset(),
    }
}
