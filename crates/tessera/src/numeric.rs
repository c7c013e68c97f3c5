//! Editable text buffers for numeric fields and their commit parsing.

use std::collections::HashMap;

use crate::id::ControlId;

/// In-progress text for numeric fields, keyed by control id.
#[derive(Debug, Default, Clone)]
pub struct EditBuffers {
    /// Buffered text.
    entries: HashMap<ControlId, String>,
}

impl EditBuffers {
    /// Buffered text for a control.
    pub fn get(&self, id: ControlId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Replace a control's buffer.
    pub fn set(&mut self, id: ControlId, text: String) {
        self.entries.insert(id, text);
    }

    /// Remove and return a control's buffer.
    pub fn take(&mut self, id: ControlId) -> Option<String> {
        self.entries.remove(&id)
    }

    /// Is a buffer held for this control?
    pub fn contains(&self, id: ControlId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of live buffers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is being edited.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize user text before parsing: trim, accept ',' as the decimal
/// separator, and cut at the first '.' when more than one is present.
fn normalize(text: &str) -> String {
    let mut s = text.trim().replace(',', ".");
    if s.matches('.').count() > 1 {
        let first = s.find('.').unwrap_or(s.len());
        s.truncate(first);
    }
    s
}

/// Parse committed float text. Empty, malformed or non-finite input is 0.
pub fn parse_float(text: &str) -> f32 {
    match normalize(text).parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse committed integer text. Empty or malformed input is 0.
pub fn parse_int(text: &str) -> i32 {
    normalize(text).parse::<i32>().unwrap_or(0)
}
