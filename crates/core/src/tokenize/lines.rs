//! Line-level cut strategy.

use crate::cut::CutStrategy;
use crate::model::{Block, Glyph};
use crate::stats::GlyphStatistics;
use crate::utils::HasBBox;

/// Parameters for line segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineParams {
    /// A vertical column gap must be at least this many times the dominant
    /// whitespace width.
    pub column_gap_factor: f64,
    /// Lower bound on the column gap, in page units.
    pub min_column_gap: f64,
    /// Column gap to use when no whitespace statistic is available.
    pub default_column_gap: f64,
    /// Minimum height of a horizontal lane between two lines. Small enough
    /// that effectively any positive vertical gap is a candidate.
    pub lane_height: f64,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            column_gap_factor: 3.0,
            min_column_gap: 2.0,
            default_column_gap: 10.0,
            lane_height: 0.1,
        }
    }
}

/// Splits a page's glyphs into lines.
///
/// The horizontal pass does the work: any clear vertical gap separates two
/// lines. The vertical pass only fires on column-sized gaps, derived from
/// the page's dominant whitespace width, so that a two-column page is split
/// into columns before its lines are peeled off top to bottom.
#[derive(Debug, Clone)]
pub struct LineStrategy {
    params: LineParams,
    column_gap: f64,
}

impl LineStrategy {
    pub fn new(params: LineParams, statistics: &GlyphStatistics) -> Self {
        let column_gap = match statistics.whitespace_width {
            Some(width) => (width * params.column_gap_factor).max(params.min_column_gap),
            None => params.default_column_gap,
        };
        Self { params, column_gap }
    }
}

impl CutStrategy for LineStrategy {
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
        self.params.lane_height
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
        // A line reads left to right.
        glyphs.sort_by(|a, b| a.x0().total_cmp(&b.x0()).then(a.order().cmp(&b.order())));
        Block::from_glyphs(page, glyphs)
    }
}
