//! Scripted pointer input.

use tessera::{
    Action, Event, FrameInput,
    geom::{Expanse, Point},
};

/// A pointer drag played back over consecutive frames: hover, press, drag
/// in even steps, release, then idle at the destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragScript {
    /// Press position.
    from: Point,
    /// Release position.
    to: Point,
    /// Frames spent dragging.
    steps: u32,
    /// Hover frames before the press.
    settle: u32,
}

impl DragScript {
    /// Drag from `from` to `to` over `steps` frames.
    pub fn new(from: Point, to: Point, steps: u32) -> Self {
        Self {
            from,
            to,
            steps: steps.max(1),
            settle: 2,
        }
    }

    /// Number of frames before the script goes idle.
    pub fn frames(&self) -> u32 {
        self.settle + self.steps + 2
    }

    /// Pointer position at drag step `step`.
    fn at(&self, step: u32) -> Point {
        let t = step as f32 / self.steps as f32;
        Point::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }

    /// Input for frame `frame`.
    pub fn input(&self, frame: u32, viewport: Expanse) -> FrameInput {
        let base = FrameInput::new(viewport);
        let press = self.settle;
        let release = press + self.steps + 1;
        match frame {
            f if f < press => base
                .at(self.from)
                .with_event(Event::Pointer(Action::Moved)),
            f if f == press => base.at(self.from).with_event(Event::Pointer(Action::Down)),
            f if f < release => base
                .at(self.at(f - press))
                .with_event(Event::Pointer(Action::Drag)),
            f if f == release => base.at(self.to).with_event(Event::Pointer(Action::Up)),
            _ => base.at(self.to),
        }
    }
}
