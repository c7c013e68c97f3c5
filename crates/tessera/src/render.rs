//! The contract between the core and the host's drawing and layout layer.

use crate::{error::Result, geom::Rect, id::ControlId, style::Style};

/// Cursor icons the core may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorIcon {
    /// The platform's default pointer.
    #[default]
    Default,
    /// Pointer over a draggable header or resize handle.
    Grab,
}

/// Drawing, flow layout and native control primitives supplied by the host.
///
/// Areas nest: controls declared between `begin_area` and `end_area` flow
/// top to bottom inside the area, and between `begin_row` and `end_row`
/// they flow left to right. The core honours the depth it sets with
/// `set_depth` only by passing it on; stacking windows visually with depth 0
/// frontmost is the backend's job.
pub trait RenderBackend {
    /// Set the stacking depth for subsequent drawing. Depth 0 is frontmost.
    fn set_depth(&mut self, depth: u32);

    /// Enable or disable interaction with subsequent controls.
    fn set_enabled(&mut self, enabled: bool);

    /// Request a cursor icon.
    fn set_cursor(&mut self, icon: CursorIcon);

    /// Start a layout area covering `rect`, filled with `style`.
    fn begin_area(&mut self, rect: Rect, style: &Style) -> Result<()>;

    /// Close the innermost layout area.
    fn end_area(&mut self) -> Result<()>;

    /// Start a horizontal run of controls with a fixed extent.
    fn begin_row(&mut self, width: f32, height: f32) -> Result<()>;

    /// Close the innermost horizontal run.
    fn end_row(&mut self) -> Result<()>;

    /// Draw a box at an absolute position.
    fn draw_box(&mut self, rect: Rect, style: &Style) -> Result<()>;

    /// Draw a flowed label, optionally with a fixed width.
    fn label(&mut self, text: &str, style: &Style, width: Option<f32>) -> Result<()>;

    /// Draw a label over an absolute rectangle without advancing the layout.
    fn label_at(&mut self, rect: Rect, text: &str, style: &Style) -> Result<()>;

    /// Draw a button. Returns true if it was clicked during this event.
    fn button(&mut self, id: ControlId, text: &str, style: &Style) -> Result<bool>;

    /// Draw a checkbox. Returns the possibly toggled value.
    fn toggle(&mut self, id: ControlId, value: bool) -> Result<bool>;

    /// Draw a single-line text field. Returns the possibly edited text. A
    /// `None` width expands to fill the row.
    fn text_field(
        &mut self,
        id: ControlId,
        text: &str,
        style: &Style,
        width: Option<f32>,
    ) -> Result<String>;

    /// Draw a horizontal slider. Returns the possibly changed value.
    fn slider(&mut self, id: ControlId, value: f32, min: f32, max: f32, width: f32)
    -> Result<f32>;

    /// The screen rectangle of the most recently drawn flowed element.
    fn last_rect(&self) -> Rect;
}
