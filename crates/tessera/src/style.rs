//! Styles and skins.
//!
//! A [`Skin`] is a named collection of [`Style`]s. Windows and controls look
//! their styles up by path (see [`names`]); a skin that lacks a path the core
//! needs produces [`Error::MissingStyle`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Style paths the core looks up while declaring windows and controls.
pub mod names {
    /// Header of the topmost, expanded window.
    pub const HEADER: &str = "window/header";
    /// Header of the topmost, collapsed window.
    pub const HEADER_CLOSED: &str = "window/header_closed";
    /// Header of a background, expanded window.
    pub const HEADER_INACTIVE: &str = "window/header_inactive";
    /// Header of a background, collapsed window.
    pub const HEADER_INACTIVE_CLOSED: &str = "window/header_inactive_closed";
    /// Window title text.
    pub const HEADER_TEXT: &str = "window/header_text";
    /// Expanded window body.
    pub const WINDOW: &str = "window/body";
    /// Collapsed window body.
    pub const HIDDEN: &str = "window/hidden";
    /// Resize handle.
    pub const RESIZE: &str = "window/resize";
    /// Foldout button shown while collapsed.
    pub const FOLDOUT_OPEN: &str = "control/foldout_open";
    /// Foldout button shown while expanded.
    pub const FOLDOUT_CLOSE: &str = "control/foldout_close";
    /// Control labels.
    pub const LABEL_TEXT: &str = "control/label";
    /// Value text drawn over sliders.
    pub const SLIDER_TEXT: &str = "control/slider_text";
    /// Generic buttons, including the close button.
    pub const BUTTON: &str = "control/button";
    /// Text and numeric fields.
    pub const FIELD: &str = "control/field";

    /// Every path the core requires.
    pub const REQUIRED: &[&str] = &[
        HEADER,
        HEADER_CLOSED,
        HEADER_INACTIVE,
        HEADER_INACTIVE_CLOSED,
        HEADER_TEXT,
        WINDOW,
        HIDDEN,
        RESIZE,
        FOLDOUT_OPEN,
        FOLDOUT_CLOSE,
        LABEL_TEXT,
        SLIDER_TEXT,
        BUTTON,
        FIELD,
    ];
}

/// Glyph on the foldout button of a collapsed window.
pub const RIGHTWARDS_ARROW: char = '►';
/// Glyph on the foldout button of an expanded window.
pub const DOWNWARDS_ARROW: char = '▼';

/// An RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Construct a color from channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque color from 8-bit channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Visual style for a rectangle or a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Fill color.
    pub background: Color,
    /// Text and glyph color.
    pub foreground: Color,
}

impl Style {
    /// Construct a style.
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// A named set of styles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skin {
    /// Display name.
    pub name: String,
    /// Styles by path.
    styles: HashMap<String, Style>,
}

impl Skin {
    /// Construct an empty skin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: HashMap::new(),
        }
    }

    /// Add or replace a style, builder fashion.
    pub fn with(mut self, path: &str, style: Style) -> Self {
        self.insert(path, style);
        self
    }

    /// Add or replace a style.
    pub fn insert(&mut self, path: &str, style: Style) {
        self.styles.insert(path.to_string(), style);
    }

    /// Look up a style by path.
    pub fn get(&self, path: &str) -> Result<&Style> {
        self.styles
            .get(path)
            .ok_or_else(|| Error::MissingStyle(path.to_string()))
    }

    /// Check that every style the core needs is present.
    pub fn validate(&self) -> Result<()> {
        for path in names::REQUIRED {
            self.get(path)?;
        }
        Ok(())
    }

    /// The built-in dark skin, used whenever no skin has been set.
    pub fn dark() -> Self {
        let text = Color::rgb(0xdd, 0xdd, 0xdd);
        let dim = Color::rgb(0x99, 0x99, 0x99);
        let accent = Color::rgb(0x2d, 0x5a, 0x88);
        let accent_dim = Color::rgb(0x30, 0x3a, 0x44);
        let body = Color::rgb(0x1e, 0x1e, 0x1e);
        let field = Color::rgb(0x2a, 0x2a, 0x2a);
        Self::new("dark")
            .with(names::HEADER, Style::new(accent, text))
            .with(names::HEADER_CLOSED, Style::new(accent, text))
            .with(names::HEADER_INACTIVE, Style::new(accent_dim, dim))
            .with(names::HEADER_INACTIVE_CLOSED, Style::new(accent_dim, dim))
            .with(names::HEADER_TEXT, Style::new(Color::transparent(), text))
            .with(names::WINDOW, Style::new(body, text))
            .with(
                names::HIDDEN,
                Style::new(Color::transparent(), Color::transparent()),
            )
            .with(names::RESIZE, Style::new(accent_dim, text))
            .with(names::FOLDOUT_OPEN, Style::new(Color::transparent(), text))
            .with(names::FOLDOUT_CLOSE, Style::new(Color::transparent(), text))
            .with(names::LABEL_TEXT, Style::new(Color::transparent(), dim))
            .with(names::SLIDER_TEXT, Style::new(Color::transparent(), text))
            .with(names::BUTTON, Style::new(field, text))
            .with(names::FIELD, Style::new(field, text))
    }
}
