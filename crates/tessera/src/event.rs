//! Input snapshot handed to the core once per surface pass.

use crate::{
    geom::{Expanse, Point, Rect},
    id::ControlId,
};

/// Pointer action kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Button press.
    Down,
    /// Button release.
    Up,
    /// Pointer moved with the button held.
    Drag,
    /// Pointer moved without a button.
    Moved,
}

/// Keys the core distinguishes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCode {
    /// Return/Enter.
    Enter,
    /// Escape.
    Esc,
    /// Tab.
    Tab,
    /// Any printable character.
    Char(char),
}

/// Classification of the event being processed this pass.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Event {
    /// A pointer event.
    Pointer(Action),
    /// A key press.
    Key(KeyCode),
    /// Layout, repaint, or anything else the core ignores.
    #[default]
    Other,
}

/// Everything the core needs from the host for one surface pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer position in screen coordinates.
    pub pointer: Point,
    /// Current event.
    pub event: Event,
    /// Control holding keyboard focus, as reported by the host.
    pub focused: Option<ControlId>,
    /// Size of the screen the windows live on.
    pub viewport: Expanse,
}

impl FrameInput {
    /// An input with no event, the pointer at the origin and nothing focused.
    pub fn new(viewport: Expanse) -> Self {
        Self {
            pointer: Point::zero(),
            event: Event::Other,
            focused: None,
            viewport,
        }
    }

    /// Set the pointer position, builder fashion.
    pub fn at(mut self, pointer: Point) -> Self {
        self.pointer = pointer;
        self
    }

    /// Set the event, builder fashion.
    pub fn with_event(mut self, event: Event) -> Self {
        self.event = event;
        self
    }

    /// Set the focused control, builder fashion.
    pub fn with_focus(mut self, focused: Option<ControlId>) -> Self {
        self.focused = focused;
        self
    }

    /// Is this a pointer press?
    pub fn is_pointer_down(&self) -> bool {
        self.event == Event::Pointer(Action::Down)
    }

    /// Is this a pointer release?
    pub fn is_pointer_up(&self) -> bool {
        self.event == Event::Pointer(Action::Up)
    }

    /// Was Enter pressed?
    pub fn is_enter(&self) -> bool {
        self.event == Event::Key(KeyCode::Enter)
    }

    /// The viewport as a rectangle at the origin.
    pub fn screen(&self) -> Rect {
        self.viewport.rect()
    }
}
