//! Interned font and color identifiers.
//!
//! Glyphs carry compact ids rather than owned name strings; the registry
//! that maps between the two is built by the caller, passed into the
//! pipeline at construction, and shared read-only from there on.

use rustc_hash::FxHashMap;

/// Identifier of an interned font name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub u32);

/// Identifier of an interned color value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ColorId(pub u32);

/// Caller-owned interning table for font names and color values.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<String>,
    font_ids: FxHashMap<String, FontId>,
    colors: Vec<String>,
    color_ids: FxHashMap<String, ColorId>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a font name, returning the existing id if already known.
    pub fn intern_font(&mut self, name: &str) -> FontId {
        if let Some(&id) = self.font_ids.get(name) {
            return id;
        }
        let id = FontId(self.fonts.len() as u32);
        self.fonts.push(name.to_string());
        self.font_ids.insert(name.to_string(), id);
        id
    }

    /// Interns a color value, returning the existing id if already known.
    pub fn intern_color(&mut self, value: &str) -> ColorId {
        if let Some(&id) = self.color_ids.get(value) {
            return id;
        }
        let id = ColorId(self.colors.len() as u32);
        self.colors.push(value.to_string());
        self.color_ids.insert(value.to_string(), id);
        id
    }

    pub fn font_name(&self, id: FontId) -> Option<&str> {
        self.fonts.get(id.0 as usize).map(String::as_str)
    }

    pub fn color_value(&self, id: ColorId) -> Option<&str> {
        self.colors.get(id.0 as usize).map(String::as_str)
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }
}
