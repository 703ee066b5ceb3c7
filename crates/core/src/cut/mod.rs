//! Recursive XY-cut partitioning.
//!
//! The engine turns a normalized glyph set into reading-order leaf blocks by
//! recursively slicing the set along empty vertical and horizontal lanes.
//! What counts as a lane, and what a leaf becomes, is supplied by a
//! [`CutStrategy`]; the word/line/paragraph tokenizers are nothing more than
//! different strategies over this one algorithm.

use crate::error::Result;
use crate::model::{Block, Glyph};
use crate::span::GlyphSpan;
use crate::utils::HasBBox;

/// Lane geometry and packing callbacks parameterizing the engine.
///
/// All methods must be pure functions of their arguments: the engine
/// guarantees deterministic output only for deterministic strategies.
pub trait CutStrategy {
    /// Minimum width of a vertical lane for the given set.
    fn lane_width(&self, page: u32, glyphs: &[Glyph]) -> f64;

    /// Whether a vertical lane candidate separates the set.
    fn is_valid_vertical_lane(
        &self,
        left: &[&Glyph],
        overlap: &[&Glyph],
        right: &[&Glyph],
    ) -> bool;

    /// Minimum height of a horizontal lane for the given set.
    fn lane_height(&self, page: u32, glyphs: &[Glyph]) -> f64;

    /// Whether a horizontal lane candidate separates the set.
    fn is_valid_horizontal_lane(
        &self,
        upper: &[&Glyph],
        overlap: &[&Glyph],
        lower: &[&Glyph],
    ) -> bool;

    /// Packs a geometrically indivisible run of glyphs into a leaf block.
    fn pack(&self, page: u32, glyphs: Vec<Glyph>) -> Block;
}

/// A candidate empty strip between two consecutive sorted glyphs, with the
/// set classified against its coordinate range. Ephemeral: lives only for
/// the duration of one acceptance check.
struct LaneCandidate<'a> {
    lo: f64,
    hi: f64,
    before: Vec<&'a Glyph>,
    overlap: Vec<&'a Glyph>,
    after: Vec<&'a Glyph>,
}

/// Which axis a lane candidate is measured on.
#[derive(Copy, Clone)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn lo(self, g: &Glyph) -> f64 {
        match self {
            Axis::X => g.x0(),
            Axis::Y => g.y0(),
        }
    }

    fn hi(self, g: &Glyph) -> f64 {
        match self {
            Axis::X => g.x1(),
            Axis::Y => g.y1(),
        }
    }

    fn center(self, g: &Glyph) -> f64 {
        match self {
            Axis::X => g.center_x(),
            Axis::Y => g.center_y(),
        }
    }
}

impl<'a> LaneCandidate<'a> {
    fn classify(glyphs: &'a [Glyph], axis: Axis, lo: f64, hi: f64) -> Self {
        let mut before = Vec::new();
        let mut overlap = Vec::new();
        let mut after = Vec::new();
        for glyph in glyphs {
            if axis.hi(glyph) <= lo {
                before.push(glyph);
            } else if axis.lo(glyph) >= hi {
                after.push(glyph);
            } else {
                overlap.push(glyph);
            }
        }
        Self {
            lo,
            hi,
            before,
            overlap,
            after,
        }
    }
}

/// Side of an accepted lane a glyph belongs to (`false` = before the cut):
/// glyphs crossing the lane join whichever side their center falls into,
/// with a center exactly on the lane center going before the cut.
fn lane_side(glyph: &Glyph, axis: Axis, lo: f64, hi: f64) -> bool {
    if axis.hi(glyph) <= lo {
        false
    } else if axis.lo(glyph) >= hi {
        true
    } else {
        axis.center(glyph) > (lo + hi) / 2.0
    }
}

/// Partitions one page's glyphs into reading-order leaf blocks.
///
/// Deterministic and total on well-formed (filtered) input: an empty set
/// yields no blocks, and a set with no acceptable lane in either direction
/// packs into a single fallback block.
pub fn partition<S: CutStrategy + ?Sized>(
    page: u32,
    mut glyphs: Vec<Glyph>,
    strategy: &S,
) -> Result<Vec<Block>> {
    if glyphs.is_empty() {
        return Ok(Vec::new());
    }
    let mut blocks = Vec::new();
    cut_span(page, GlyphSpan::new(&mut glyphs), strategy, &mut blocks)?;
    Ok(blocks)
}

/// One recursion step: vertical pass, then horizontal pass, then fallback.
/// Every accepted cut leaves both halves nonempty, so the recursion depth is
/// bounded by the number of glyphs.
fn cut_span<S: CutStrategy + ?Sized>(
    page: u32,
    mut span: GlyphSpan<'_>,
    strategy: &S,
    out: &mut Vec<Block>,
) -> Result<()> {
    if span.len() <= 1 {
        if !span.is_empty() {
            out.push(strategy.pack(page, span.to_vec()));
        }
        return Ok(());
    }

    span.sort_by_x();
    if let Some(at) = accept_lane(page, &mut span, strategy, Axis::X) {
        let (left, right) = span.cut(at)?;
        cut_span(page, left, strategy, out)?;
        cut_span(page, right, strategy, out)?;
        return Ok(());
    }

    span.sort_by_y();
    if let Some(at) = accept_lane(page, &mut span, strategy, Axis::Y) {
        let (upper, lower) = span.cut(at)?;
        cut_span(page, upper, strategy, out)?;
        cut_span(page, lower, strategy, out)?;
        return Ok(());
    }

    out.push(strategy.pack(page, span.to_vec()));
    Ok(())
}

/// Scans the sorted span for the first acceptable lane on the given axis.
/// On acceptance the span is reordered so the two sides are contiguous and
/// the cut index is returned.
fn accept_lane<S: CutStrategy + ?Sized>(
    page: u32,
    span: &mut GlyphSpan<'_>,
    strategy: &S,
    axis: Axis,
) -> Option<usize> {
    let min_gap = match axis {
        Axis::X => strategy.lane_width(page, span.as_slice()),
        Axis::Y => strategy.lane_height(page, span.as_slice()),
    };

    let glyphs = span.as_slice();
    let mut accepted: Option<(f64, f64)> = None;
    for i in 0..glyphs.len() - 1 {
        let lo = axis.hi(&glyphs[i]);
        let hi = axis.lo(&glyphs[i + 1]);
        if hi - lo < min_gap {
            continue;
        }
        let candidate = LaneCandidate::classify(glyphs, axis, lo, hi);
        let valid = match axis {
            Axis::X => strategy.is_valid_vertical_lane(
                &candidate.before,
                &candidate.overlap,
                &candidate.after,
            ),
            Axis::Y => strategy.is_valid_horizontal_lane(
                &candidate.before,
                &candidate.overlap,
                &candidate.after,
            ),
        };
        if valid {
            accepted = Some((candidate.lo, candidate.hi));
            break;
        }
    }

    let (lo, hi) = accepted?;
    span.sort_by_key(|g| lane_side(g, axis, lo, hi));
    let at = span
        .iter()
        .take_while(|g| !lane_side(g, axis, lo, hi))
        .count();
    Some(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{WordParams, WordStrategy};

    fn word_strategy() -> WordStrategy {
        WordStrategy::new(WordParams::default())
    }

    #[test]
    fn empty_set_yields_no_blocks() {
        let blocks = partition(1, Vec::new(), &word_strategy()).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn singleton_packs_without_cutting() {
        let glyphs = vec![Glyph::new((0.0, 0.0, 5.0, 10.0), "x", 0)];
        let blocks = partition(1, glyphs, &word_strategy()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "x");
    }

    #[test]
    fn gap_between_words_is_cut() {
        let glyphs = vec![
            Glyph::new((0.0, 0.0, 5.0, 10.0), "a", 0),
            Glyph::new((5.0, 0.0, 10.0, 10.0), "b", 1),
            Glyph::new((20.0, 0.0, 25.0, 10.0), "c", 2),
            Glyph::new((25.0, 0.0, 30.0, 10.0), "d", 3),
        ];
        let blocks = partition(1, glyphs, &word_strategy()).unwrap();
        let texts: Vec<&str> = blocks.iter().map(Block::text).collect();
        assert_eq!(texts, vec!["ab", "cd"]);
    }

    #[test]
    fn wide_glyph_spanning_gap_vetoes_the_lane() {
        // "b" and "c" leave a wide gap, but a rule-like glyph starting left
        // of both crosses it, so the word lane is rejected and the set packs
        // whole.
        let glyphs = vec![
            Glyph::new((0.0, 0.0, 5.0, 10.0), "a", 0),
            Glyph::new((1.0, 4.0, 30.0, 6.0), "_", 1),
            Glyph::new((6.0, 0.0, 11.0, 10.0), "b", 2),
            Glyph::new((40.0, 0.0, 45.0, 10.0), "c", 3),
        ];
        let blocks = partition(1, glyphs, &word_strategy()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 4);
    }
}
