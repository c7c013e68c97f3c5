//! A render backend that lays controls out and logs what it draws.

use std::mem;

use tessera::{
    ControlId, CursorIcon, RenderBackend, Result, Style,
    geom::{Point, Rect},
};
use tracing::trace;

/// Flow position inside an open area.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    /// Left edge of the area.
    left: f32,
    /// Width of the area.
    width: f32,
    /// Next free position.
    at: Point,
    /// Height of the open row, if any.
    row: Option<f32>,
}

/// Lays elements out top to bottom, rows left to right, and reports every
/// call through `tracing`. Nothing is ever clicked.
#[derive(Debug)]
pub struct TraceBackend {
    /// Open areas.
    stack: Vec<Cursor>,
    /// Last flowed rectangle.
    last: Rect,
    /// Height of a flowed element.
    line: f32,
    /// Current cursor icon.
    cursor: CursorIcon,
    /// Elements drawn since the last `take_count`.
    drawn: usize,
}

impl Default for TraceBackend {
    fn default() -> Self {
        Self::new(25.0)
    }
}

impl TraceBackend {
    /// A backend with flowed elements `line` tall.
    pub fn new(line: f32) -> Self {
        Self {
            stack: vec![],
            last: Rect::default(),
            line,
            cursor: CursorIcon::Default,
            drawn: 0,
        }
    }

    /// The cursor icon last requested.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Number of elements drawn since the last call.
    pub fn take_count(&mut self) -> usize {
        mem::take(&mut self.drawn)
    }

    /// Place the next flowed element.
    fn flow(&mut self, width: Option<f32>) -> Rect {
        self.drawn += 1;
        let line = self.line;
        let r = match self.stack.last_mut() {
            Some(c) => match c.row {
                Some(h) => {
                    let w = width.unwrap_or(c.width - (c.at.x - c.left));
                    let r = Rect::new(c.at.x, c.at.y, w.max(0.0), h);
                    c.at.x += w;
                    r
                }
                None => {
                    let r = Rect::new(c.left, c.at.y, width.unwrap_or(c.width), line);
                    c.at.y += line;
                    r
                }
            },
            None => Rect::new(0.0, 0.0, width.unwrap_or(0.0), line),
        };
        self.last = r;
        r
    }
}

impl RenderBackend for TraceBackend {
    fn set_depth(&mut self, depth: u32) {
        trace!(depth, "depth");
    }

    fn set_enabled(&mut self, _enabled: bool) {}

    fn set_cursor(&mut self, icon: CursorIcon) {
        self.cursor = icon;
    }

    fn begin_area(&mut self, rect: Rect, _style: &Style) -> Result<()> {
        trace!(x = rect.x(), y = rect.y(), w = rect.w, h = rect.h, "area");
        self.stack.push(Cursor {
            left: rect.x(),
            width: rect.w,
            at: rect.tl,
            row: None,
        });
        Ok(())
    }

    fn end_area(&mut self) -> Result<()> {
        self.stack.pop();
        Ok(())
    }

    fn begin_row(&mut self, _width: f32, height: f32) -> Result<()> {
        if let Some(c) = self.stack.last_mut() {
            c.row = Some(height);
        }
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        if let Some(c) = self.stack.last_mut() {
            c.at = Point::new(c.left, c.at.y + c.row.take().unwrap_or(0.0));
        }
        Ok(())
    }

    fn draw_box(&mut self, rect: Rect, _style: &Style) -> Result<()> {
        trace!(x = rect.x(), y = rect.y(), "box");
        Ok(())
    }

    fn label(&mut self, text: &str, _style: &Style, width: Option<f32>) -> Result<()> {
        let r = self.flow(width);
        trace!(x = r.x(), y = r.y(), "label {text:?}");
        Ok(())
    }

    fn label_at(&mut self, rect: Rect, text: &str, _style: &Style) -> Result<()> {
        trace!(x = rect.x(), y = rect.y(), "overlay {text:?}");
        Ok(())
    }

    fn button(&mut self, id: ControlId, text: &str, _style: &Style) -> Result<bool> {
        self.flow(None);
        trace!(%id, "button {text:?}");
        Ok(false)
    }

    fn toggle(&mut self, id: ControlId, value: bool) -> Result<bool> {
        self.flow(Some(self.line));
        trace!(%id, value, "toggle");
        Ok(value)
    }

    fn text_field(
        &mut self,
        id: ControlId,
        text: &str,
        _style: &Style,
        width: Option<f32>,
    ) -> Result<String> {
        self.flow(width);
        trace!(%id, "field {text:?}");
        Ok(text.to_string())
    }

    fn slider(
        &mut self,
        id: ControlId,
        value: f32,
        _min: f32,
        _max: f32,
        width: f32,
    ) -> Result<f32> {
        self.flow(Some(width));
        trace!(%id, value, "slider");
        Ok(value)
    }

    fn last_rect(&self) -> Rect {
        self.last
    }
}
