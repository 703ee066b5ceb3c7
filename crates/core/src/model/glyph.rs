//! The positioned glyph type and its builder.
//!
//! Use `Glyph::builder()` to construct glyphs with optional fields.

use crate::utils::{HasBBox, Rect, rect_union};

use super::font::{ColorId, FontId};

/// Builder for Glyph with fluent API for optional fields.
///
/// # Example
/// ```ignore
/// let g = Glyph::builder((0.0, 0.0, 5.0, 10.0), "a", 17)
///     .font(FontId(2))
///     .size(12.0)
///     .page(3)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GlyphBuilder {
    bbox: Rect,
    text: String,
    order: u32,
    font: FontId,
    size: f64,
    color: ColorId,
    page: u32,
}

impl GlyphBuilder {
    /// Creates a new builder with required fields.
    /// Optional fields default to: font=FontId(0), size=0.0, color=ColorId(0), page=1.
    pub fn new(bbox: Rect, text: &str, order: u32) -> Self {
        Self {
            bbox,
            text: text.to_string(),
            order,
            font: FontId(0),
            size: 0.0,
            color: ColorId(0),
            page: 1,
        }
    }

    /// Sets the interned font identifier (default: FontId(0)).
    pub const fn font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    /// Sets the font size in page units (default: 0.0).
    pub const fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the interned color identifier (default: ColorId(0)).
    pub const fn color(mut self, color: ColorId) -> Self {
        self.color = color;
        self
    }

    /// Sets the 1-based page number (default: 1).
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Builds the Glyph instance.
    pub fn build(self) -> Glyph {
        let (x0, y0, x1, y1) = self.bbox;
        Glyph {
            x0,
            y0,
            x1,
            y1,
            text: self.text,
            order: self.order,
            font: self.font,
            size: self.size,
            color: self.color,
            page: self.page,
        }
    }
}

/// A positioned character (or a merged base + combining sequence) on a page.
///
/// The extraction-order number is the emission order from the source content
/// stream: stable, page-scoped, strictly increasing, and the deterministic
/// tiebreak wherever geometric order is ambiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    text: String,
    order: u32,
    font: FontId,
    size: f64,
    color: ColorId,
    page: u32,
}

impl Glyph {
    /// Creates a new builder for constructing Glyph instances.
    pub fn builder(bbox: Rect, text: &str, order: u32) -> GlyphBuilder {
        GlyphBuilder::new(bbox, text, order)
    }

    /// Creates a glyph with required fields only.
    pub fn new(bbox: Rect, text: &str, order: u32) -> Self {
        Self::builder(bbox, text, order).build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn order(&self) -> u32 {
        self.order
    }

    pub const fn font(&self) -> FontId {
        self.font
    }

    pub const fn size(&self) -> f64 {
        self.size
    }

    pub const fn color(&self) -> ColorId {
        self.color
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Accumulates a merged combining form: appends `text` and grows the
    /// bounding box to the union of both boxes. The only mutation a glyph
    /// undergoes after construction.
    pub(crate) fn absorb(&mut self, text: &str, bbox: Rect) {
        self.text.push_str(text);
        let (x0, y0, x1, y1) = rect_union(self.bbox(), bbox);
        self.x0 = x0;
        self.y0 = y0;
        self.x1 = x1;
        self.y1 = y1;
    }
}

impl HasBBox for Glyph {
    fn x0(&self) -> f64 {
        self.x0
    }
    fn y0(&self) -> f64 {
        self.y0
    }
    fn x1(&self) -> f64 {
        self.x1
    }
    fn y1(&self) -> f64 {
        self.y1
    }
}
