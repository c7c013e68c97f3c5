//! The sample declaration passes.

use std::{cell::RefCell, rc::Rc};

use tessera::{Color, Gui, Result, SurfaceId, Ui};

/// Title of the control showcase window.
pub const SHOWCASE: &str = "Hello, EnhancedIMGUI!";
/// Title of the second window.
pub const NOTES: &str = "Hello Nr. 2, EnhancedIMGUI!";

/// State behind the control showcase: one of every control.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    /// The window has not been closed.
    pub open: bool,
    /// Width applied to controls.
    pub control_width: f32,
    /// Width applied to control labels.
    pub label_width: f32,
    /// Free text.
    pub text: String,
    /// Slider value.
    pub float1: f32,
    /// Field value.
    pub float2: f32,
    /// Integer slider value.
    pub int1: i32,
    /// Integer field value.
    pub int2: i32,
    /// Toggle value.
    pub flag: bool,
    /// Edited color.
    pub color: Color,
    /// Times "Save" was pressed.
    pub saves: u32,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            open: true,
            control_width: 140.0,
            label_width: 50.0,
            text: String::new(),
            float1: 0.0,
            float2: 4.4,
            int1: 0,
            int2: 0,
            flag: false,
            color: Color::rgb(51, 102, 204),
            saves: 0,
        }
    }
}

impl Showcase {
    /// Declare the showcase window.
    pub fn declare(&mut self, ui: &mut Ui<'_>) -> Result<()> {
        ui.begin_window(SHOWCASE, Some(&mut self.open))?;
        ui.set_draw_control_ids(true);
        ui.text("Hello World!")?;
        ui.slider_float("Controls Width", &mut self.control_width, 100.0, 400.0)?;
        ui.set_control_width(self.control_width);
        ui.slider_float("Label Width", &mut self.label_width, 10.0, 200.0)?;
        ui.set_label_width(self.label_width);
        if ui.button("Save")? {
            self.saves += 1;
        }
        ui.input_text("string", &mut self.text)?;
        ui.slider_float("float1", &mut self.float1, 0.0, 1.0)?;
        ui.float_field("float2", &mut self.float2)?;
        ui.slider_int("int1", &mut self.int1, 0, 10)?;
        ui.int_field("int2", &mut self.int2)?;
        ui.toggle("bool", &mut self.flag)?;
        ui.color_edit4("color4", &mut self.color)?;
        ui.end_window()
    }
}

/// State behind the second window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notes {
    /// The window has not been closed.
    pub open: bool,
    /// Free text.
    pub text: String,
    /// Content was drawn on the last pass.
    pub drawn: bool,
    /// Times "Save" was pressed.
    pub saves: u32,
}

impl Notes {
    /// Fresh, open state.
    pub fn new() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    /// Declare the notes window.
    pub fn declare(&mut self, ui: &mut Ui<'_>) -> Result<()> {
        let response = ui.begin_window(NOTES, Some(&mut self.open))?;
        self.drawn = response.visible;
        ui.text("Hello World!")?;
        if ui.button("Save")? {
            self.saves += 1;
        }
        ui.input_text("string", &mut self.text)?;
        ui.end_window()
    }
}

/// Shared handles to the sample state, readable after frames run.
#[derive(Debug, Clone)]
pub struct Panels {
    /// Surface declaring the showcase.
    pub showcase_surface: SurfaceId,
    /// Surface declaring the notes window.
    pub notes_surface: SurfaceId,
    /// Showcase state.
    pub showcase: Rc<RefCell<Showcase>>,
    /// Notes state.
    pub notes: Rc<RefCell<Notes>>,
}

/// Register one surface per sample window.
pub fn install(gui: &mut Gui) -> Panels {
    let showcase = Rc::new(RefCell::new(Showcase::default()));
    let notes = Rc::new(RefCell::new(Notes::new()));
    let state = Rc::clone(&showcase);
    let showcase_surface = gui.add_surface("showcase", move |ui| state.borrow_mut().declare(ui));
    let state = Rc::clone(&notes);
    let notes_surface = gui.add_surface("notes", move |ui| state.borrow_mut().declare(ui));
    Panels {
        showcase_surface,
        notes_surface,
        showcase,
        notes,
    }
}
