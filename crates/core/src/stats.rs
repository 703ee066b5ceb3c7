//! Frequency statistics over glyph sets.
//!
//! Counters key continuous measurements by a quantized value (floored to one
//! decimal place) and break most-frequent ties by first insertion, so the
//! descriptors feeding the lane heuristics are deterministic for a given
//! accumulation order. Every descriptor is an `Option`: an empty counter
//! yields `None`, never a default.

use indexmap::IndexMap;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::model::{ColorId, FontId, Glyph};
use crate::utils::HasBBox;

/// Floors a measurement to the fixed quantization step of one decimal
/// place. Scales by 10 rather than dividing by 0.1; the reciprocal is
/// inexact in binary and floors 2.0 down to 1.9.
pub fn quantize(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}

/// An occurrence counter with insertion-ordered keys.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyCounter<K: std::hash::Hash + Eq> {
    counts: IndexMap<K, usize>,
}

impl<K: std::hash::Hash + Eq> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<K: std::hash::Hash + Eq> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The key with the highest occurrence count. On a tie the key seen
    /// first during accumulation wins; `None` on an empty counter.
    pub fn most_common(&self) -> Option<&K> {
        let mut best: Option<(&K, usize)> = None;
        for (key, &count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((key, count)),
            }
        }
        best.map(|(key, _)| key)
    }
}

/// A frequency counter over quantized float measurements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatCounter {
    inner: FrequencyCounter<OrderedFloat<f64>>,
}

impl FloatCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.inner.add(OrderedFloat(quantize(value)));
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn most_common(&self) -> Option<f64> {
        self.inner.most_common().map(|v| v.0)
    }
}

/// Read-only aggregate descriptors over a glyph set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphStatistics {
    /// Most frequent font identifier.
    pub font: Option<FontId>,
    /// Most frequent font size, quantized.
    pub font_size: Option<f64>,
    /// Most frequent color identifier.
    pub color: Option<ColorId>,
    /// Most frequent character-to-character whitespace width, quantized.
    pub whitespace_width: Option<f64>,
    /// Most frequent line-to-line gap, quantized.
    pub line_gap: Option<f64>,
}

impl GlyphStatistics {
    /// Computes the snapshot for a glyph set.
    pub fn compute(glyphs: &[Glyph]) -> Self {
        let mut fonts = FrequencyCounter::new();
        let mut sizes = FloatCounter::new();
        let mut colors = FrequencyCounter::new();
        for glyph in glyphs {
            fonts.add(glyph.font());
            sizes.add(glyph.size());
            colors.add(glyph.color());
        }
        Self {
            font: fonts.most_common().copied(),
            font_size: sizes.most_common(),
            color: colors.most_common().copied(),
            whitespace_width: estimate_whitespace_width(glyphs),
            line_gap: estimate_line_gap(glyphs),
        }
    }
}

/// Estimates the dominant whitespace width in a glyph set.
///
/// For each glyph with both neighbors in x-sorted order, the floored
/// non-negative distance to each neighbor is computed and whichever of the
/// two is strictly larger is registered as whitespace-like; the most
/// frequent registered width wins.
pub fn estimate_whitespace_width(glyphs: &[Glyph]) -> Option<f64> {
    let mut sorted: Vec<&Glyph> = glyphs.iter().collect();
    sorted.sort_by(|a, b| a.x0().total_cmp(&b.x0()).then(a.order().cmp(&b.order())));

    let mut counter = FloatCounter::new();
    for (prev, cur, next) in sorted.iter().tuple_windows() {
        let left = quantize(cur.x0() - prev.x1()).max(0.0);
        let right = quantize(next.x0() - cur.x1()).max(0.0);
        if left > right {
            counter.add(left);
        } else if right > left {
            counter.add(right);
        }
    }
    counter.most_common()
}

/// Estimates the dominant line-to-line gap.
///
/// Every positive vertical gap between consecutive glyphs in y-sorted order
/// is registered; glyphs sharing a line overlap vertically and contribute
/// nothing, so the dominant registered gap is the page's line pitch.
pub fn estimate_line_gap(glyphs: &[Glyph]) -> Option<f64> {
    let mut sorted: Vec<&Glyph> = glyphs.iter().collect();
    sorted.sort_by(|a, b| a.y0().total_cmp(&b.y0()).then(a.order().cmp(&b.order())));

    let mut counter = FloatCounter::new();
    for (cur, next) in sorted.iter().tuple_windows() {
        let gap = quantize(next.y0() - cur.y1());
        if gap > 0.0 {
            counter.add(gap);
        }
    }
    counter.most_common()
}
