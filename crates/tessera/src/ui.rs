//! The declarative API used inside a surface pass.

use std::sync::Arc;

use tracing::debug;

use crate::{
    context::Context,
    depth::DepthManager,
    error::{Error, Result},
    event::FrameInput,
    geom::Rect,
    hit::HitTest,
    id::{ControlId, SurfaceId, WindowHandle},
    interaction::Grip,
    numeric::{parse_float, parse_int},
    registry::WindowRegistry,
    render::{CursorIcon, RenderBackend},
    style::{Color, DOWNWARDS_ARROW, RIGHTWARDS_ARROW, Skin, names},
    window::body_rect,
};

/// What a window declaration produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowResponse {
    /// Handle of the declared window.
    pub handle: WindowHandle,
    /// Depth after any click-to-front this frame.
    pub depth: u32,
    /// Controls declared in this window are drawn. False while the window is
    /// collapsed or closed.
    pub visible: bool,
    /// Window rectangle after any move or resize this frame.
    pub rect: Rect,
}

/// Declaration handle for one surface pass.
///
/// Windows are opened with [`Ui::begin_window`] and closed with
/// [`Ui::end_window`]; controls may only be declared in between.
pub struct Ui<'a> {
    /// Shared state.
    ctx: &'a mut Context,
    /// The surface running this pass.
    surface: SurfaceId,
    /// Drawing and layout collaborator.
    backend: &'a mut dyn RenderBackend,
}

impl<'a> Ui<'a> {
    /// Wrap a context for a pass on `surface`. The pass must already have
    /// been started with `begin_pass`.
    pub fn new(ctx: &'a mut Context, surface: SurfaceId, backend: &'a mut dyn RenderBackend) -> Self {
        Self {
            ctx,
            surface,
            backend,
        }
    }

    /// The surface running this pass.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The shared context.
    pub fn context(&self) -> &Context {
        self.ctx
    }

    /// Input for this pass.
    pub fn input(&self) -> &FrameInput {
        &self.ctx.input
    }

    /// Replace the surface's skin. Skins lacking a required style are
    /// rejected.
    pub fn set_style(&mut self, skin: Skin) -> Result<()> {
        skin.validate()?;
        self.ctx.surfaces.require_mut(self.surface)?.skin = Some(Arc::new(skin));
        Ok(())
    }

    /// Width of controls declared from here until the end of the frame.
    pub fn set_control_width(&mut self, width: f32) {
        self.ctx.control_width = width;
    }

    /// Width of control labels.
    pub fn set_label_width(&mut self, width: f32) {
        self.ctx.label_width = width;
    }

    /// Append control ids to labels until the end of the frame.
    pub fn set_draw_control_ids(&mut self, on: bool) {
        self.ctx.draw_control_ids = on;
    }

    /// The surface's skin, or the built-in one if none was set.
    fn skin(&self) -> Arc<Skin> {
        self.ctx
            .surfaces
            .get(self.surface)
            .and_then(|s| s.skin.clone())
            .unwrap_or_else(|| Arc::new(Skin::dark()))
    }

    /// Open a window. Pass `Some(&mut open)` for a closable window; the flag
    /// is cleared when the user closes it and the window is then skipped
    /// until the caller sets it again.
    pub fn begin_window(&mut self, name: &str, open: Option<&mut bool>) -> Result<WindowResponse> {
        if self.ctx.surfaces.require(self.surface)?.declaring {
            return Err(Error::WindowAlreadyOpen);
        }
        let header_height = self.ctx.config.header_height;
        let handle_size = self.ctx.config.resize_handle;
        let min_size = self.ctx.config.min_window_expanse();
        let input = self.ctx.input;
        let skin = self.skin();

        let closable = open.is_some();
        let mut is_open = open.as_deref().copied().unwrap_or(true);
        let handle = self.ctx.resolve_window(self.surface, name, is_open)?;
        let (guid, original, depth, mut content_active) = {
            let w = self
                .ctx
                .surfaces
                .window(handle)
                .ok_or(Error::UnknownSurface(self.surface))?;
            (w.guid, w.rect, w.depth, w.content_active)
        };
        let grip = Grip { handle, guid };
        let header = original.top_band(header_height);
        let resize = original.bottom_right_square(handle_size, 1.0);

        self.backend.set_depth(depth);
        let mut consumed = false;
        if is_open {
            let (toggled, closed) =
                self.draw_header(name, header, depth, content_active, closable, &skin)?;
            if toggled {
                content_active = !content_active;
                debug!(window = name, content_active, "window folded");
            }
            if closed {
                is_open = false;
                debug!(window = name, "window closed");
            }
            consumed = toggled || closed;
        }

        let hit = is_open && self.ctx.surfaces.hit_test(input.pointer) == Some(handle);
        let mut promote = false;
        if hit && !consumed && !self.ctx.interaction.is_locked() {
            let on_header = header.contains_point(input.pointer);
            let on_resize = content_active && resize.contains_point(input.pointer);
            self.backend.set_cursor(if on_header || on_resize {
                CursorIcon::Grab
            } else {
                CursorIcon::Default
            });
            if input.is_pointer_down() {
                if on_header {
                    self.ctx
                        .interaction
                        .start_move(grip, input.pointer, original);
                } else if on_resize {
                    self.ctx
                        .interaction
                        .start_resize(grip, input.pointer, original);
                }
                promote = original.contains_point(input.pointer);
            }
        }
        if input.is_pointer_up() {
            self.ctx.interaction.release();
        }

        let rect = if depth == 0 {
            self.ctx
                .interaction
                .apply(
                    grip,
                    original,
                    input.pointer,
                    header_height,
                    min_size,
                    input.screen(),
                )
                .unwrap_or(original)
        } else {
            original
        };

        if promote {
            self.ctx.surfaces.promote_to_front(handle);
        }
        let depth = self.ctx.surfaces.window(handle).map_or(depth, |w| w.depth);

        let visible = is_open && content_active;
        if is_open {
            let body = body_rect(original, header_height, content_active);
            let style = if content_active {
                names::WINDOW
            } else {
                names::HIDDEN
            };
            self.backend.set_enabled(depth == 0);
            self.backend.begin_area(body, skin.get(style)?)?;
            if content_active {
                self.backend.draw_box(resize, skin.get(names::RESIZE)?)?;
            }
        }

        if let Some(w) = self.ctx.surfaces.window_mut(handle) {
            w.content_active = content_active;
            w.open = is_open;
            w.place(rect, header_height, handle_size);
        }
        if let Some(flag) = open {
            *flag = is_open;
        }
        let surf = self.ctx.surfaces.require_mut(self.surface)?;
        surf.declaring = true;
        surf.can_draw_control = true;
        surf.content_visible = visible;
        surf.area_open = is_open;
        surf.current = Some(handle.slot);

        Ok(WindowResponse {
            handle,
            depth,
            visible,
            rect,
        })
    }

    /// Draw a window header. Returns whether the foldout and close buttons
    /// were clicked.
    fn draw_header(
        &mut self,
        name: &str,
        header: Rect,
        depth: u32,
        content_active: bool,
        closable: bool,
        skin: &Skin,
    ) -> Result<(bool, bool)> {
        let style = match (depth == 0, content_active) {
            (true, true) => names::HEADER,
            (true, false) => names::HEADER_CLOSED,
            (false, true) => names::HEADER_INACTIVE,
            (false, false) => names::HEADER_INACTIVE_CLOSED,
        };
        self.backend.begin_area(header, skin.get(style)?)?;
        self.backend.begin_row(header.w, header.h)?;

        let (glyph, fold_style) = if content_active {
            (DOWNWARDS_ARROW, names::FOLDOUT_CLOSE)
        } else {
            (RIGHTWARDS_ARROW, names::FOLDOUT_OPEN)
        };
        let fold = self.ctx.ids.allocate("WindowFoldout", header);
        let toggled = self
            .backend
            .button(fold, &glyph.to_string(), skin.get(fold_style)?)?;
        self.backend
            .label(name, skin.get(names::HEADER_TEXT)?, None)?;
        let mut closed = false;
        if closable {
            let close = self.ctx.ids.allocate("WindowClose", header);
            closed = self.backend.button(close, "x", skin.get(names::BUTTON)?)?;
        }

        self.backend.end_row()?;
        self.backend.end_area()?;
        Ok((toggled, closed))
    }

    /// Close the window opened by the last `begin_window`.
    pub fn end_window(&mut self) -> Result<()> {
        let surf = self.ctx.surfaces.require_mut(self.surface)?;
        if !surf.declaring {
            return Err(Error::NoOpenWindow);
        }
        let area_open = surf.area_open;
        surf.close_declaration();
        self.backend.set_enabled(true);
        if area_open {
            self.backend.end_area()?;
        }
        Ok(())
    }

    /// Check that a control may be declared. Returns whether it should be
    /// drawn.
    fn control_gate(&self) -> Result<bool> {
        let surf = self.ctx.surfaces.require(self.surface)?;
        if !surf.can_draw_control {
            return Err(Error::ControlOutsideWindow);
        }
        Ok(surf.content_visible)
    }

    /// Allocate an id at the current layout cursor.
    fn control_id(&mut self, hint: &str) -> ControlId {
        let cursor = self.backend.last_rect();
        self.ctx.ids.allocate(hint, cursor)
    }

    /// A label with the control id appended when id display is on.
    fn decorate(&self, label: &str, id: ControlId) -> String {
        if self.ctx.draw_control_ids {
            format!("{label} ({id})")
        } else {
            label.to_string()
        }
    }

    /// Draw a control's label in the label column.
    fn control_label(&mut self, label: &str, id: ControlId) -> Result<()> {
        let text = self.decorate(label, id);
        let skin = self.skin();
        self.backend.label(
            &text,
            skin.get(names::LABEL_TEXT)?,
            Some(self.ctx.label_width),
        )
    }

    /// Open a control row sized for a control plus its label.
    fn begin_control_row(&mut self, control_width: f32) -> Result<()> {
        self.backend.begin_row(
            control_width + self.ctx.label_width,
            self.ctx.config.control_height,
        )
    }

    /// Plain text.
    pub fn text(&mut self, text: &str) -> Result<()> {
        if !self.control_gate()? {
            return Ok(());
        }
        let skin = self.skin();
        self.backend.label(text, skin.get(names::LABEL_TEXT)?, None)
    }

    /// A push button. Returns true when clicked.
    pub fn button(&mut self, label: &str) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let id = self.control_id("Button");
        let text = self.decorate(label, id);
        let skin = self.skin();
        self.backend.button(id, &text, skin.get(names::BUTTON)?)
    }

    /// A labelled checkbox. Returns true when the value changed.
    pub fn toggle(&mut self, label: &str, value: &mut bool) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let id = self.control_id("Toggle");
        self.begin_control_row(self.ctx.control_width)?;
        let next = self.backend.toggle(id, *value)?;
        self.control_label(label, id)?;
        self.backend.end_row()?;
        let changed = next != *value;
        *value = next;
        Ok(changed)
    }

    /// A single-line text field. Without a label the field has the control
    /// width; with one it fills the row. Returns true when the text changed.
    pub fn input_text(&mut self, label: &str, text: &mut String) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let id = self.control_id("InputText");
        let labelled = !label.is_empty();
        let width = self.ctx.control_width;
        if labelled {
            self.begin_control_row(width)?;
        }
        let skin = self.skin();
        let next = self.backend.text_field(
            id,
            text,
            skin.get(names::FIELD)?,
            if labelled { None } else { Some(width) },
        )?;
        if labelled {
            self.control_label(label, id)?;
            self.backend.end_row()?;
        }
        let changed = next != *text;
        *text = next;
        Ok(changed)
    }

    /// A float slider with its value printed over it.
    pub fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let id = self.control_id("SliderFloat");
        let width = self.ctx.control_width;
        self.begin_control_row(width)?;
        let next = self.backend.slider(id, *value, min, max, width)?;
        self.slider_text(&format!("{next:.3}"))?;
        self.control_label(label, id)?;
        self.backend.end_row()?;
        let changed = next != *value;
        *value = next;
        Ok(changed)
    }

    /// An integer slider. Values are truncated toward zero.
    pub fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let id = self.control_id("SliderInt");
        let width = self.ctx.control_width;
        self.begin_control_row(width)?;
        let raw = self
            .backend
            .slider(id, *value as f32, min as f32, max as f32, width)?;
        let next = raw as i32;
        self.slider_text(&next.to_string())?;
        self.control_label(label, id)?;
        self.backend.end_row()?;
        let changed = next != *value;
        *value = next;
        Ok(changed)
    }

    /// Print a slider's value over the slider just drawn.
    fn slider_text(&mut self, text: &str) -> Result<()> {
        let rect = self.backend.last_rect();
        let skin = self.skin();
        self.backend
            .label_at(rect, text, skin.get(names::SLIDER_TEXT)?)
    }

    /// A float entry field. The value only changes when the edit is
    /// committed, on focus loss or Enter. Returns true on commit.
    pub fn float_field(&mut self, label: &str, value: &mut f32) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let id = self.control_id("FloatField");
        let width = self.ctx.control_width;
        match self.number_field(id, label, value.to_string(), width)? {
            Some(text) => {
                *value = parse_float(&text);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// An integer entry field, committed like [`Ui::float_field`].
    pub fn int_field(&mut self, label: &str, value: &mut i32) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let id = self.control_id("IntField");
        let width = self.ctx.control_width;
        match self.number_field(id, label, value.to_string(), width)? {
            Some(text) => {
                *value = parse_int(&text);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Four 0-255 fields editing a color's channels. Returns true if any
    /// channel was committed.
    pub fn color_edit4(&mut self, label: &str, color: &mut Color) -> Result<bool> {
        if !self.control_gate()? {
            return Ok(false);
        }
        let ids = [
            self.control_id("ColorEdit4_0"),
            self.control_id("ColorEdit4_1"),
            self.control_id("ColorEdit4_2"),
            self.control_id("ColorEdit4_3"),
        ];
        let field_width = self.ctx.control_width / 4.0 - 4.0;
        self.begin_control_row(self.ctx.control_width)?;
        let mut committed = false;
        for (id, channel) in ids
            .into_iter()
            .zip([&mut color.r, &mut color.g, &mut color.b, &mut color.a])
        {
            let shown = (*channel * 255.0).to_string();
            if let Some(text) = self.number_field(id, "", shown, field_width)? {
                *channel = parse_float(&text) / 255.0;
                committed = true;
            }
        }
        self.control_label(label, ids[0])?;
        self.backend.end_row()?;
        Ok(committed)
    }

    /// Shared body of numeric fields. While focused, the field shows and
    /// edits a buffer instead of the caller's value. Returns the text to
    /// parse when an edit is committed.
    fn number_field(
        &mut self,
        id: ControlId,
        label: &str,
        display: String,
        width: f32,
    ) -> Result<Option<String>> {
        let labelled = !label.is_empty();
        if labelled {
            self.begin_control_row(width)?;
        }
        let shown = match self.ctx.buffers.get(id) {
            Some(buffered) => buffered.to_string(),
            None => display,
        };
        let skin = self.skin();
        let edited = self.backend.text_field(
            id,
            &shown,
            skin.get(names::FIELD)?,
            if labelled { None } else { Some(width) },
        )?;
        if labelled {
            self.control_label(label, id)?;
            self.backend.end_row()?;
        }

        let focused = self.ctx.focus.is_focused(id);
        if self.ctx.focus.lost_focus(id) || (focused && self.ctx.input.is_enter()) {
            self.ctx.buffers.take(id);
            debug!(%id, text = %edited, "numeric field committed");
            return Ok(Some(edited));
        }
        if focused {
            self.ctx.buffers.set(id, edited);
        } else {
            self.ctx.buffers.take(id);
        }
        Ok(None)
    }
}
