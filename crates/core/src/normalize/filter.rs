//! Degenerate-glyph filtering.

use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::model::Glyph;
use crate::utils::HasBBox;

/// Counters describing one filter run, returned as part of the stage result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    /// Glyphs examined.
    pub processed: usize,
    /// Glyphs dropped as degenerate.
    pub filtered: usize,
}

impl FilterReport {
    pub fn merge(&mut self, other: FilterReport) {
        self.processed += other.processed;
        self.filtered += other.filtered;
    }
}

/// Returns true if the glyph should be dropped: non-positive box width or
/// height, or text that trims to empty.
pub fn is_degenerate(glyph: &Glyph) -> bool {
    glyph.width() <= 0.0 || glyph.height() <= 0.0 || glyph.text().trim().is_empty()
}

/// Drops degenerate glyphs from a page's sequence.
///
/// Non-finite geometry is a validation failure rather than a silent drop;
/// everything else that is dropped is accounted for in the report. Running
/// the filter on its own output is a no-op.
pub fn filter_degenerate(glyphs: Vec<Glyph>) -> Result<(Vec<Glyph>, FilterReport)> {
    let mut report = FilterReport::default();
    let mut retained = Vec::with_capacity(glyphs.len());

    for glyph in glyphs {
        report.processed += 1;

        if !glyph.is_finite() {
            return Err(LayoutError::InvalidGeometry {
                page: glyph.page(),
                order: glyph.order(),
            });
        }

        if is_degenerate(&glyph) {
            report.filtered += 1;
            continue;
        }

        retained.push(glyph);
    }

    debug!(
        processed = report.processed,
        filtered = report.filtered,
        "character filter complete"
    );
    Ok((retained, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_zero_width_height_and_blank_text() {
        let glyphs = vec![
            Glyph::new((0.0, 0.0, 5.0, 10.0), "a", 0),
            Glyph::new((5.0, 0.0, 5.0, 10.0), "b", 1),
            Glyph::new((10.0, 10.0, 15.0, 10.0), "c", 2),
            Glyph::new((15.0, 0.0, 20.0, 10.0), "  ", 3),
        ];
        let (retained, report) = filter_degenerate(glyphs).unwrap();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].text(), "a");
        assert_eq!(report.processed, 4);
        assert_eq!(report.filtered, 3);
    }

    #[test]
    fn non_finite_geometry_is_a_validation_error() {
        let glyphs = vec![Glyph::builder((0.0, f64::NAN, 5.0, 10.0), "a", 9)
            .page(2)
            .build()];
        let err = filter_degenerate(glyphs).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidGeometry { page: 2, order: 9 }
        ));
    }

    #[test]
    fn filter_is_idempotent() {
        let glyphs = vec![
            Glyph::new((0.0, 0.0, 5.0, 10.0), "a", 0),
            Glyph::new((5.0, 0.0, 5.0, 10.0), "", 1),
        ];
        let (once, _) = filter_degenerate(glyphs).unwrap();
        let (twice, report) = filter_degenerate(once.clone()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(report.filtered, 0);
        assert_eq!(report.processed, once.len());
    }
}
