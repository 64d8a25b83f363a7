//! Keyboard/mouse collaborator contract consumed by `Camera::update`.
//!
//! Event delivery, polling, and the windowing backend that produces these
//! values are external collaborators (see §6); this crate only specifies the
//! shape of the queryable state it needs once per frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
}

pub trait InputState {
    fn is_key_down(&self, key: Key) -> bool;
    /// Mouse movement since the previous query, in pixels: (dx, dy).
    fn mouse_delta(&self) -> (f32, f32);
    fn mouse_buttons(&self) -> MouseButtons;
}

/// A headless stand-in for when no windowing backend is attached (e.g. the
/// CLI driver, which renders one static frame per scene and never calls
/// `Camera::update` with live input).
pub struct NoInput;

impl InputState for NoInput {
    fn is_key_down(&self, _key: Key) -> bool {
        false
    }

    fn mouse_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    fn mouse_buttons(&self) -> MouseButtons {
        MouseButtons::default()
    }
}
