//! Word-level cut strategy.

use crate::cut::CutStrategy;
use crate::model::{Block, Glyph};
use crate::utils::{HasBBox, INF_F64};

/// Parameters for word segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct WordParams {
    /// Minimum width of a vertical lane between two words. Small enough
    /// that effectively any positive horizontal gap is a candidate.
    pub lane_width: f64,
}

impl Default for WordParams {
    fn default() -> Self {
        Self { lane_width: 0.1 }
    }
}

/// Splits a line's glyphs into words.
///
/// Word formation is purely a left-right decision: a vertical lane is
/// accepted iff no glyph spans it, and the horizontal pass is disabled
/// entirely. Separating lines is the line tokenizer's job, upstream of
/// this one.
#[derive(Debug, Clone)]
pub struct WordStrategy {
    params: WordParams,
}

impl WordStrategy {
    pub fn new(params: WordParams) -> Self {
        Self { params }
    }
}

impl Default for WordStrategy {
    fn default() -> Self {
        Self::new(WordParams::default())
    }
}

impl CutStrategy for WordStrategy {
    fn lane_width(&self, _page: u32, _glyphs: &[Glyph]) -> f64 {
        self.params.lane_width
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
        INF_F64
    }

    fn is_valid_horizontal_lane(
        &self,
        _upper: &[&Glyph],
        _overlap: &[&Glyph],
        _lower: &[&Glyph],
    ) -> bool {
        false
    }

    fn pack(&self, page: u32, mut glyphs: Vec<Glyph>) -> Block {
        // A word reads left to right.
        glyphs.sort_by(|a, b| a.x0().total_cmp(&b.x0()).then(a.order().cmp(&b.order())));
        Block::from_glyphs(page, glyphs)
    }
}
