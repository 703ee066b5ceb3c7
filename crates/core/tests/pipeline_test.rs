//! End-to-end pipeline tests: normalization, tokenization, reports, and
//! page-order guarantees.

use std::sync::Arc;

use pagecut_core::model::{Document, FontRegistry, Glyph, Page};
use pagecut_core::pipeline::{Granularity, Pipeline, PipelineOptions};
use pagecut_core::utils::HasBBox;
use pagecut_core::LayoutError;

fn pipeline(options: PipelineOptions) -> Pipeline {
    Pipeline::new(Arc::new(FontRegistry::new()), options)
}

fn options(granularity: Granularity) -> PipelineOptions {
    PipelineOptions {
        granularity,
        ..PipelineOptions::default()
    }
}

/// "ab cd" on one line: abutting characters inside words, a 4-unit space
/// between them.
fn ab_cd(page: u32) -> Page {
    Page::new(
        page,
        vec![
            Glyph::builder((0.0, 0.0, 5.0, 10.0), "a", 0).page(page).build(),
            Glyph::builder((5.0, 0.0, 10.0, 10.0), "b", 1).page(page).build(),
            Glyph::builder((14.0, 0.0, 19.0, 10.0), "c", 2).page(page).build(),
            Glyph::builder((19.0, 0.0, 24.0, 10.0), "d", 3).page(page).build(),
        ],
    )
}

#[test]
fn words_are_cut_per_line() {
    let layout = pipeline(options(Granularity::Words))
        .run(Document::new(vec![ab_cd(1)]))
        .unwrap();
    let texts: Vec<&str> = layout.pages[0].blocks.iter().map(|b| b.text()).collect();
    assert_eq!(texts, vec!["ab", "cd"]);
}

#[test]
fn degenerate_glyphs_and_diacritics_are_normalized_before_cutting() {
    let page = Page::new(
        1,
        vec![
            Glyph::new((0.0, 0.0, 5.0, 10.0), "a", 0),
            Glyph::new((5.0, 0.0, 5.0, 10.0), " ", 1),
            Glyph::new((4.0, 9.0, 6.0, 11.0), "\u{0301}", 2),
        ],
    );
    let layout = pipeline(options(Granularity::Words))
        .run(Document::new(vec![page]))
        .unwrap();

    assert_eq!(layout.filter.processed, 3);
    assert_eq!(layout.filter.filtered, 1);
    assert_eq!(layout.merge.processed, 2);
    assert_eq!(layout.merge.merged, 1);

    let blocks = &layout.pages[0].blocks;
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text(), "a\u{0301}");
    assert_eq!(blocks[0].bbox(), (0.0, 0.0, 6.0, 11.0));
}

#[test]
fn non_finite_geometry_fails_validation() {
    let page = Page::new(
        4,
        vec![Glyph::builder((0.0, 0.0, f64::INFINITY, 10.0), "a", 11)
            .page(4)
            .build()],
    );
    let err = pipeline(options(Granularity::Words))
        .run(Document::new(vec![page]))
        .unwrap_err();
    assert!(matches!(
        err,
        LayoutError::InvalidGeometry { page: 4, order: 11 }
    ));
}

#[test]
fn pages_come_back_in_ascending_order() {
    let layout = pipeline(options(Granularity::Words))
        .run(Document::new(vec![ab_cd(3), ab_cd(1), ab_cd(2)]))
        .unwrap();
    let numbers: Vec<u32> = layout.pages.iter().map(|p| p.page).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn parallel_run_matches_sequential_run() {
    let doc = Document::new(vec![ab_cd(1), ab_cd(2), ab_cd(3), ab_cd(4)]);

    let sequential = pipeline(options(Granularity::Words))
        .run(doc.clone())
        .unwrap();
    let parallel = pipeline(PipelineOptions {
        granularity: Granularity::Words,
        threads: Some(3),
        ..PipelineOptions::default()
    })
    .run(doc)
    .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn line_and_paragraph_levels_agree_on_a_single_line_page() {
    let doc = Document::new(vec![ab_cd(1)]);
    let lines = pipeline(options(Granularity::Lines))
        .run(doc.clone())
        .unwrap();
    let paragraphs = pipeline(options(Granularity::Paragraphs)).run(doc).unwrap();

    // One line of text is one line and one paragraph.
    assert_eq!(lines.pages[0].blocks.len(), 1);
    assert_eq!(lines.pages[0].blocks[0].text(), "abcd");
    assert_eq!(paragraphs.pages[0].blocks.len(), 1);
}
