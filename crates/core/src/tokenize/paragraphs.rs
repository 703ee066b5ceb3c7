//! Paragraph-level cut strategy.

use crate::cut::CutStrategy;
use crate::model::{Block, Glyph};
use crate::stats::GlyphStatistics;
use crate::utils::HasBBox;

/// Parameters for paragraph segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphParams {
    /// A vertical column gap must be at least this many times the dominant
    /// whitespace width.
    pub column_gap_factor: f64,
    /// Lower bound on the column gap, in page units.
    pub min_column_gap: f64,
    /// Column gap to use when no whitespace statistic is available.
    pub default_column_gap: f64,
    /// A paragraph break must exceed the dominant line gap by this factor.
    pub line_gap_factor: f64,
    /// Paragraph gap to use when no line-gap statistic is available.
    pub default_paragraph_gap: f64,
}

impl Default for ParagraphParams {
    fn default() -> Self {
        Self {
            column_gap_factor: 3.0,
            min_column_gap: 2.0,
            default_column_gap: 10.0,
            line_gap_factor: 1.5,
            default_paragraph_gap: 8.0,
        }
    }
}

/// Splits a page's glyphs into paragraphs.
///
/// Same column handling as the line strategy, but a horizontal lane only
/// counts when its gap exceeds the page's dominant inter-line spacing, so
/// ordinary line pitch stays inside one paragraph.
#[derive(Debug, Clone)]
pub struct ParagraphStrategy {
    column_gap: f64,
    paragraph_gap: f64,
}

impl ParagraphStrategy {
    pub fn new(params: ParagraphParams, statistics: &GlyphStatistics) -> Self {
        let column_gap = match statistics.whitespace_width {
            Some(width) => (width * params.column_gap_factor).max(params.min_column_gap),
            None => params.default_column_gap,
        };
        let paragraph_gap = match statistics.line_gap {
            Some(gap) => gap * params.line_gap_factor,
            None => params.default_paragraph_gap,
        };
        Self {
            column_gap,
            paragraph_gap,
        }
    }
}

impl CutStrategy for ParagraphStrategy {
    fn lane_width(&self, _page: u32, _glyphs: &[Glyph]) -> f64 {
        self.column_gap
    }

    fn is_valid_vertical_lane(
        &self,
        _left: &[&Glyph],
        overlap: &[&Glyph],
        _right: &[&Glyph],
    ) -> bool {
        overlap.is_empty()
    }

    fn lane_height(&self, _page: u32, _glyphs: &[Glyph]) -> f64 {
        self.paragraph_gap
    }

    fn is_valid_horizontal_lane(
        &self,
        _upper: &[&Glyph],
        overlap: &[&Glyph],
        _lower: &[&Glyph],
    ) -> bool {
        overlap.is_empty()
    }

    fn pack(&self, page: u32, mut glyphs: Vec<Glyph>) -> Block {
        // A paragraph reads row-major: top to bottom, left to right.
        glyphs.sort_by(|a, b| {
            a.y0()
                .total_cmp(&b.y0())
                .then(a.x0().total_cmp(&b.x0()))
                .then(a.order().cmp(&b.order()))
        });
        Block::from_glyphs(page, glyphs)
    }
}
