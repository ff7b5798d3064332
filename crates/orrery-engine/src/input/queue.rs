/// Pointer buttons the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// Keys with a binding. Anything else is dropped at the platform edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Up,
    Down,
    Left,
    Right,
    Control,
    F,
    R,
}

/// A single input event, already translated from whatever the platform
/// layer produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Absolute pointer position in window pixels.
    PointerMove { x: f32, y: f32 },
    Button { button: MouseButton, pressed: bool },
    /// Positive `dy` scrolls toward the scene.
    Scroll { dy: f32 },
    Key { key: KeyCode, pressed: bool },
}

/// Events collected by the platform layer between frames, consumed in
/// arrival order at the top of each tick.
#[derive(Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
