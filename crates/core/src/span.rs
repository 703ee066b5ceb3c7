//! Splittable ordered glyph spans.
//!
//! A span is a mutable view over a contiguous run of glyphs inside a
//! page-owned vector (the arena). `cut` consumes the span and yields two
//! disjoint sub-views over the same storage, so a split never copies and a
//! stale view can never observe its sibling: disjointness and invalidation
//! on re-cut are enforced by the borrow checker rather than at runtime.

use crate::error::{LayoutError, Result};
use crate::model::Glyph;
use crate::utils::HasBBox;

/// An ordered, index-addressable view over a contiguous run of glyphs.
///
/// Order reflects the current reading-order hypothesis and is re-established
/// by one of the sort methods before each cut attempt.
#[derive(Debug)]
pub struct GlyphSpan<'a> {
    glyphs: &'a mut [Glyph],
}

impl<'a> GlyphSpan<'a> {
    pub fn new(glyphs: &'a mut [Glyph]) -> Self {
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn first(&self) -> Option<&Glyph> {
        self.glyphs.first()
    }

    pub fn last(&self) -> Option<&Glyph> {
        self.glyphs.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    pub fn as_slice(&self) -> &[Glyph] {
        self.glyphs
    }

    /// Clones the span's glyphs in current order into an owned vector.
    pub fn to_vec(&self) -> Vec<Glyph> {
        self.glyphs.to_vec()
    }

    /// Swaps the glyphs at `i` and `j`; no other side effects.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.len();
        for index in [i, j] {
            if index >= len {
                return Err(LayoutError::IndexOutOfRange { index, len });
            }
        }
        self.glyphs.swap(i, j);
        Ok(())
    }

    /// Splits this span at `index` into the `[0, index)` and `[index, len)`
    /// sub-views. Consumes the span; the two halves alias disjoint ranges of
    /// the same backing storage.
    pub fn cut(self, index: usize) -> Result<(GlyphSpan<'a>, GlyphSpan<'a>)> {
        let len = self.len();
        if index > len {
            return Err(LayoutError::IndexOutOfRange { index, len });
        }
        let (head, tail) = self.glyphs.split_at_mut(index);
        Ok((GlyphSpan::new(head), GlyphSpan::new(tail)))
    }

    /// Stable sort by left edge, ties broken by extraction order.
    pub fn sort_by_x(&mut self) {
        self.glyphs
            .sort_by(|a, b| a.x0().total_cmp(&b.x0()).then(a.order().cmp(&b.order())));
    }

    /// Stable sort by top edge, ties broken by extraction order.
    pub fn sort_by_y(&mut self) {
        self.glyphs
            .sort_by(|a, b| a.y0().total_cmp(&b.y0()).then(a.order().cmp(&b.order())));
    }

    /// Stable reorder by an arbitrary key; relative order within equal keys
    /// is preserved. Used to gather the two sides of an accepted lane into
    /// contiguous halves before cutting.
    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&Glyph) -> K) {
        self.glyphs.sort_by_key(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs() -> Vec<Glyph> {
        vec![
            Glyph::new((20.0, 0.0, 25.0, 10.0), "c", 2),
            Glyph::new((0.0, 0.0, 5.0, 10.0), "a", 0),
            Glyph::new((5.0, 0.0, 10.0, 10.0), "b", 1),
        ]
    }

    #[test]
    fn cut_yields_disjoint_views() {
        let mut backing = glyphs();
        let mut span = GlyphSpan::new(&mut backing);
        span.sort_by_x();
        let (left, right) = span.cut(2).unwrap();
        let left_text: Vec<&str> = left.iter().map(Glyph::text).collect();
        let right_text: Vec<&str> = right.iter().map(Glyph::text).collect();
        assert_eq!(left_text, vec!["a", "b"]);
        assert_eq!(right_text, vec!["c"]);
    }

    #[test]
    fn cut_at_bounds_is_allowed() {
        let mut backing = glyphs();
        let (left, right) = GlyphSpan::new(&mut backing).cut(0).unwrap();
        assert!(left.is_empty());
        assert_eq!(right.len(), 3);

        let (left, right) = GlyphSpan::new(&mut backing).cut(3).unwrap();
        assert_eq!(left.len(), 3);
        assert!(right.is_empty());
    }

    #[test]
    fn cut_past_end_fails() {
        let mut backing = glyphs();
        let err = GlyphSpan::new(&mut backing).cut(4).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::IndexOutOfRange { index: 4, len: 3 }
        ));
    }

    #[test]
    fn swap_out_of_range_fails() {
        let mut backing = glyphs();
        let mut span = GlyphSpan::new(&mut backing);
        assert!(span.swap(0, 2).is_ok());
        let err = span.swap(1, 3).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::IndexOutOfRange { index: 3, len: 3 }
        ));
    }

    #[test]
    fn sort_ties_break_by_extraction_order() {
        let mut backing = vec![
            Glyph::new((0.0, 0.0, 5.0, 10.0), "second", 5),
            Glyph::new((0.0, 0.0, 5.0, 10.0), "first", 1),
        ];
        let mut span = GlyphSpan::new(&mut backing);
        span.sort_by_x();
        assert_eq!(span.get(0).unwrap().text(), "first");
        assert_eq!(span.get(1).unwrap().text(), "second");
    }
}
