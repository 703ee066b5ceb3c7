//! Diacritic-mark detection and merging.
//!
//! Page description streams frequently emit an accent as its own glyph right
//! after the base character it decorates. Partitioning assumes one glyph =
//! one logical grapheme, so these marks are fused into their base before any
//! cut is attempted.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::model::Glyph;
use crate::utils::HasBBox;

/// Legacy spacing code points mapped to their combining forms. These are
/// values the Unicode spec treats as equivalent but that NFKC normalization
/// does not map, determined from the Combining Diacritical Marks section;
/// e.g. ACUTE ACCENT maps to COMBINING ACUTE ACCENT.
static COMBINING_FORMS: Lazy<FxHashMap<u32, &'static str>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert(0x0060, "\u{0300}");
    m.insert(0x02CB, "\u{0300}");
    m.insert(0x0027, "\u{0301}");
    m.insert(0x02B9, "\u{0301}");
    m.insert(0x02CA, "\u{0301}");
    m.insert(0x005E, "\u{0302}");
    m.insert(0x02C6, "\u{0302}");
    m.insert(0x007E, "\u{0303}");
    m.insert(0x02C9, "\u{0304}");
    m.insert(0x00B0, "\u{030A}");
    m.insert(0x02BA, "\u{030B}");
    m.insert(0x02C7, "\u{030C}");
    m.insert(0x02C8, "\u{030D}");
    m.insert(0x0022, "\u{030E}");
    m.insert(0x02BB, "\u{0312}");
    m.insert(0x02BC, "\u{0313}");
    m.insert(0x0486, "\u{0313}");
    m.insert(0x055A, "\u{0313}");
    m.insert(0x02BD, "\u{0314}");
    m.insert(0x0485, "\u{0314}");
    m.insert(0x0559, "\u{0314}");
    m.insert(0x02D4, "\u{031D}");
    m.insert(0x02D5, "\u{031E}");
    m.insert(0x02D6, "\u{031F}");
    m.insert(0x02D7, "\u{0320}");
    m.insert(0x02B2, "\u{0321}");
    m.insert(0x02CC, "\u{0329}");
    m.insert(0x02B7, "\u{032B}");
    m.insert(0x02CD, "\u{0331}");
    m.insert(0x005F, "\u{0332}");
    m.insert(0x204E, "\u{0359}");
    m
});

/// Counters describing one merge run, returned as part of the stage result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Glyphs examined.
    pub processed: usize,
    /// Diacritic glyphs fused into their base.
    pub merged: usize,
}

impl MergeReport {
    pub fn merge(&mut self, other: MergeReport) {
        self.processed += other.processed;
        self.merged += other.merged;
    }
}

/// Returns true if the glyph is a free-standing diacritic mark: a single
/// code point in the non-spacing-mark, modifier-symbol, or modifier-letter
/// category.
pub fn is_diacritic(glyph: &Glyph) -> bool {
    let mut chars = glyph.text().chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return false;
    };
    matches!(
        c.general_category(),
        GeneralCategory::NonspacingMark
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::ModifierLetter
    )
}

/// Resolves a diacritic glyph's text to its combining form: the fixed legacy
/// table first, otherwise NFKC normalization of the text itself, trimmed.
fn resolve_combining_form(text: &str) -> String {
    if let Some(c) = text.chars().next()
        && let Some(&combining) = COMBINING_FORMS.get(&(c as u32))
    {
        return combining.to_string();
    }
    text.nfkc().collect::<String>().trim().to_string()
}

/// Fuses each diacritic mark into the base character immediately preceding
/// it in extraction order: the base's text gains the resolved combining form
/// and its box grows to the union of both boxes; the mark itself is removed
/// from the sequence. A mark with no preceding base is left untouched.
pub fn merge_diacritics(glyphs: Vec<Glyph>) -> (Vec<Glyph>, MergeReport) {
    let mut report = MergeReport::default();
    let mut merged: Vec<Glyph> = Vec::with_capacity(glyphs.len());

    for glyph in glyphs {
        report.processed += 1;

        if is_diacritic(&glyph)
            && let Some(base) = merged.last_mut().filter(|prev| !is_diacritic(prev))
        {
            let form = resolve_combining_form(glyph.text());
            base.absorb(&form, glyph.bbox());
            report.merged += 1;
            continue;
        }

        merged.push(glyph);
    }

    debug!(
        processed = report.processed,
        merged = report.merged,
        "diacritic merge complete"
    );
    (merged, report)
}
