//! Leaf output blocks of partitioning.

use crate::stats::GlyphStatistics;
use crate::utils::{HasBBox, rect_union};

use super::glyph::Glyph;

/// A grouped run of glyphs in final reading order: one word, line, or
/// paragraph depending on the strategy that packed it.
///
/// Blocks own their member lists and are never mutated after creation; the
/// bounding box, text, and statistics snapshot are all derived at pack time.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    glyphs: Vec<Glyph>,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    text: String,
    page: u32,
    statistics: GlyphStatistics,
}

impl Block {
    /// Packs glyphs (already in final reading order) into a block.
    pub fn from_glyphs(page: u32, glyphs: Vec<Glyph>) -> Self {
        let bbox = glyphs
            .iter()
            .map(HasBBox::bbox)
            .reduce(rect_union)
            .unwrap_or((0.0, 0.0, 0.0, 0.0));
        let text: String = glyphs.iter().map(Glyph::text).collect();
        let statistics = GlyphStatistics::compute(&glyphs);
        let (x0, y0, x1, y1) = bbox;
        Self {
            glyphs,
            x0,
            y0,
            x1,
            y1,
            text,
            page,
            statistics,
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.glyphs
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn statistics(&self) -> &GlyphStatistics {
        &self.statistics
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl HasBBox for Block {
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
