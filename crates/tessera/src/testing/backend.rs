//! A render backend that records every call and plays back scripted
//! clicks, edits, toggles and slider moves.

use std::collections::{HashMap, HashSet};

use crate::{
    error::Result,
    geom::Rect,
    id::ControlId,
    render::{CursorIcon, RenderBackend},
    style::Style,
};

/// A recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// `set_depth`.
    Depth(u32),
    /// `set_enabled`.
    Enabled(bool),
    /// `set_cursor`.
    Cursor(CursorIcon),
    /// `begin_area`.
    Area(Rect),
    /// `end_area`.
    EndArea,
    /// `begin_row`.
    Row,
    /// `end_row`.
    EndRow,
    /// `draw_box`.
    Box(Rect),
    /// `label`.
    Label(String),
    /// `label_at`.
    LabelAt(Rect, String),
    /// `button`.
    Button(ControlId, String),
    /// `toggle`.
    Toggle(ControlId, bool),
    /// `text_field`.
    Field(ControlId, String),
    /// `slider`.
    Slider(ControlId, f32),
}

/// Layout state of an open area.
#[derive(Debug, Clone, Copy)]
struct Flow {
    /// Area rectangle.
    area: Rect,
    /// Next free y coordinate.
    y: f32,
    /// Open row: next free x, top, height.
    row: Option<(f32, f32, f32)>,
}

impl Flow {
    /// A flow starting at the top of `area`.
    fn new(area: Rect) -> Self {
        Self {
            area,
            y: area.y(),
            row: None,
        }
    }
}

/// A render backend that records every call and plays back scripted user
/// actions.
///
/// Layout is deliberately simple: elements stack vertically inside areas
/// and horizontally inside rows, each `line_height` tall.
#[derive(Debug)]
pub struct ScriptBackend {
    /// Calls recorded since the last `clear`.
    pub ops: Vec<Op>,
    /// Open areas. The bottom entry is the screen.
    flows: Vec<Flow>,
    /// Rectangle of the last flowed element.
    last: Rect,
    /// Button texts to click, consumed on use.
    clicks: Vec<String>,
    /// Text to enter into fields, consumed on use.
    typed: HashMap<ControlId, String>,
    /// Toggles to flip, consumed on use.
    flips: HashSet<ControlId>,
    /// Slider values to set, consumed on use.
    drags: HashMap<ControlId, f32>,
    /// Width of elements with no explicit width.
    pub default_width: f32,
    /// Height of every flowed element.
    pub line_height: f32,
}

impl Default for ScriptBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptBackend {
    /// An empty backend.
    pub fn new() -> Self {
        Self {
            ops: vec![],
            flows: vec![Flow::new(Rect::new(0.0, 0.0, f32::MAX, f32::MAX))],
            last: Rect::default(),
            clicks: vec![],
            typed: HashMap::new(),
            flips: HashSet::new(),
            drags: HashMap::new(),
            default_width: 140.0,
            line_height: 25.0,
        }
    }

    /// Forget recorded calls and layout state. Scripted actions are kept.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.flows.truncate(1);
        if let Some(root) = self.flows.first_mut() {
            *root = Flow::new(root.area);
        }
        self.last = Rect::default();
    }

    /// Click the next button whose text starts with `text`.
    pub fn click(&mut self, text: &str) {
        self.clicks.push(text.to_string());
    }

    /// Replace a field's text the next time it is drawn.
    pub fn type_text(&mut self, id: ControlId, text: &str) {
        self.typed.insert(id, text.to_string());
    }

    /// Flip a toggle the next time it is drawn.
    pub fn flip(&mut self, id: ControlId) {
        self.flips.insert(id);
    }

    /// Move a slider the next time it is drawn.
    pub fn slide(&mut self, id: ControlId, value: f32) {
        self.drags.insert(id, value);
    }

    /// Ids of text fields drawn, in order.
    pub fn fields(&self) -> Vec<ControlId> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Field(id, _) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Text shown by a field.
    pub fn field_text(&self, id: ControlId) -> Option<&str> {
        self.ops.iter().find_map(|op| match op {
            Op::Field(i, text) if *i == id => Some(text.as_str()),
            _ => None,
        })
    }

    /// Ids of controls of any kind drawn, in order.
    pub fn controls(&self) -> Vec<ControlId> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Button(id, _) | Op::Toggle(id, _) | Op::Field(id, _) | Op::Slider(id, _) => {
                    Some(*id)
                }
                _ => None,
            })
            .collect()
    }

    /// Every label text drawn, flowed or absolute.
    pub fn labels(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Label(t) | Op::LabelAt(_, t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The last cursor requested.
    pub fn cursor(&self) -> Option<CursorIcon> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Cursor(c) => Some(*c),
            _ => None,
        })
    }

    /// Allocate the next flowed rectangle.
    fn place(&mut self, width: Option<f32>) -> Rect {
        let line = self.line_height;
        let default = self.default_width;
        let r = match self.flows.last_mut() {
            Some(flow) => match flow.row.as_mut() {
                Some((x, y, h)) => {
                    let w = width.unwrap_or(default);
                    let r = Rect::new(*x, *y, w, *h);
                    *x += w;
                    r
                }
                None => {
                    let r = Rect::new(flow.area.x(), flow.y, width.unwrap_or(flow.area.w), line);
                    flow.y += line;
                    r
                }
            },
            None => Rect::new(0.0, 0.0, width.unwrap_or(default), line),
        };
        self.last = r;
        r
    }
}

impl RenderBackend for ScriptBackend {
    fn set_depth(&mut self, depth: u32) {
        self.ops.push(Op::Depth(depth));
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.ops.push(Op::Enabled(enabled));
    }

    fn set_cursor(&mut self, icon: CursorIcon) {
        self.ops.push(Op::Cursor(icon));
    }

    fn begin_area(&mut self, rect: Rect, _style: &Style) -> Result<()> {
        self.ops.push(Op::Area(rect));
        self.flows.push(Flow::new(rect));
        Ok(())
    }

    fn end_area(&mut self) -> Result<()> {
        self.ops.push(Op::EndArea);
        if self.flows.len() > 1 {
            self.flows.pop();
        }
        Ok(())
    }

    fn begin_row(&mut self, _width: f32, height: f32) -> Result<()> {
        self.ops.push(Op::Row);
        if let Some(flow) = self.flows.last_mut() {
            flow.row = Some((flow.area.x(), flow.y, height));
        }
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        self.ops.push(Op::EndRow);
        if let Some(flow) = self.flows.last_mut() {
            flow.y += flow.row.take().map_or(0.0, |(_, _, h)| h);
        }
        Ok(())
    }

    fn draw_box(&mut self, rect: Rect, _style: &Style) -> Result<()> {
        self.ops.push(Op::Box(rect));
        Ok(())
    }

    fn label(&mut self, text: &str, _style: &Style, width: Option<f32>) -> Result<()> {
        self.place(width);
        self.ops.push(Op::Label(text.to_string()));
        Ok(())
    }

    fn label_at(&mut self, rect: Rect, text: &str, _style: &Style) -> Result<()> {
        self.ops.push(Op::LabelAt(rect, text.to_string()));
        Ok(())
    }

    fn button(&mut self, id: ControlId, text: &str, _style: &Style) -> Result<bool> {
        self.place(None);
        self.ops.push(Op::Button(id, text.to_string()));
        match self.clicks.iter().position(|c| text.starts_with(c.as_str())) {
            Some(i) => {
                self.clicks.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn toggle(&mut self, id: ControlId, value: bool) -> Result<bool> {
        self.place(None);
        let value = value ^ self.flips.remove(&id);
        self.ops.push(Op::Toggle(id, value));
        Ok(value)
    }

    fn text_field(
        &mut self,
        id: ControlId,
        text: &str,
        _style: &Style,
        width: Option<f32>,
    ) -> Result<String> {
        self.place(width);
        let text = self.typed.remove(&id).unwrap_or_else(|| text.to_string());
        self.ops.push(Op::Field(id, text.clone()));
        Ok(text)
    }

    fn slider(
        &mut self,
        id: ControlId,
        value: f32,
        min: f32,
        max: f32,
        width: f32,
    ) -> Result<f32> {
        self.place(Some(width));
        let value = self
            .drags
            .remove(&id)
            .map_or(value, |v| v.clamp(min, max));
        self.ops.push(Op::Slider(id, value));
        Ok(value)
    }

    fn last_rect(&self) -> Rect {
        self.last
    }
}
