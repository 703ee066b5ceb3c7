//! Per-page layout pipeline: filter → diacritic merge → statistics →
//! partition, in ascending page order.

use std::sync::Arc;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::debug;

use crate::cut::partition;
use crate::error::{LayoutError, Result};
use crate::model::{Block, Document, FontRegistry, Page};
use crate::normalize::{FilterReport, MergeReport, filter_degenerate, merge_diacritics};
use crate::stats::GlyphStatistics;
use crate::tokenize::{
    LineParams, LineStrategy, ParagraphParams, ParagraphStrategy, WordParams, WordStrategy,
};

/// Segmentation level the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Words,
    Lines,
    Paragraphs,
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub granularity: Granularity,
    /// Number of worker threads for page-level parallelism. `None` or values
    /// below 2 run sequentially; either way output order is by page number.
    pub threads: Option<usize>,
    pub word: WordParams,
    pub line: LineParams,
    pub paragraph: ParagraphParams,
}

/// One page's result: its blocks in reading order plus the page statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page: u32,
    pub blocks: Vec<Block>,
    pub statistics: GlyphStatistics,
}

/// Whole-document result with normalization counters aggregated over pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub pages: Vec<PageLayout>,
    pub filter: FilterReport,
    pub merge: MergeReport,
}

/// The layout pipeline. Owns its options and a read-only handle to the
/// caller's font registry.
#[derive(Debug, Clone)]
pub struct Pipeline {
    registry: Arc<FontRegistry>,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(registry: Arc<FontRegistry>, options: PipelineOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Runs the pipeline over a whole document.
    ///
    /// Pages carry no cross-page dependency, so with `threads > 1` they are
    /// processed in a scoped worker pool; results are re-sorted by page
    /// number afterwards, making the parallel path observationally identical
    /// to the sequential one.
    pub fn run(&self, document: Document) -> Result<DocumentLayout> {
        let pages = document.into_pages();
        debug!(pages = pages.len(), "layout pipeline start");

        let mut results: Vec<(u32, Result<(PageLayout, FilterReport, MergeReport)>)> =
            match self.options.threads {
                Some(threads) if threads > 1 => {
                    let pool = ThreadPoolBuilder::new()
                        .num_threads(threads)
                        .build()
                        .map_err(|e| LayoutError::ThreadPool(e.to_string()))?;
                    pool.install(|| {
                        pages
                            .into_par_iter()
                            .map(|page| (page.number(), self.run_page(page)))
                            .collect()
                    })
                }
                _ => pages
                    .into_iter()
                    .map(|page| (page.number(), self.run_page(page)))
                    .collect(),
            };
        results.sort_by_key(|(number, _)| *number);

        let mut layout = DocumentLayout {
            pages: Vec::with_capacity(results.len()),
            filter: FilterReport::default(),
            merge: MergeReport::default(),
        };
        for (_, result) in results {
            let (page, filter, merge) = result?;
            layout.filter.merge(filter);
            layout.merge.merge(merge);
            layout.pages.push(page);
        }

        debug!(pages = layout.pages.len(), "layout pipeline complete");
        Ok(layout)
    }

    fn run_page(&self, page: Page) -> Result<(PageLayout, FilterReport, MergeReport)> {
        let number = page.number();
        debug!(page = number, glyphs = page.len(), "page start");

        let (glyphs, filter_report) = filter_degenerate(page.into_glyphs())?;
        let (glyphs, merge_report) = merge_diacritics(glyphs);
        let statistics = GlyphStatistics::compute(&glyphs);

        let blocks = match self.options.granularity {
            Granularity::Words => {
                // Word formation assumes line-separated input, so peel lines
                // off first and cut each line into words.
                let line_strategy = LineStrategy::new(self.options.line.clone(), &statistics);
                let word_strategy = WordStrategy::new(self.options.word.clone());
                let mut blocks = Vec::new();
                for line in partition(number, glyphs, &line_strategy)? {
                    blocks.extend(partition(number, line.into_glyphs(), &word_strategy)?);
                }
                blocks
            }
            Granularity::Lines => {
                let strategy = LineStrategy::new(self.options.line.clone(), &statistics);
                partition(number, glyphs, &strategy)?
            }
            Granularity::Paragraphs => {
                let strategy = ParagraphStrategy::new(self.options.paragraph.clone(), &statistics);
                partition(number, glyphs, &strategy)?
            }
        };

        debug!(page = number, blocks = blocks.len(), "page complete");
        Ok((
            PageLayout {
                page: number,
                blocks,
                statistics,
            },
            filter_report,
            merge_report,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Glyph;

    fn pipeline(granularity: Granularity) -> Pipeline {
        Pipeline::new(
            Arc::new(FontRegistry::new()),
            PipelineOptions {
                granularity,
                ..PipelineOptions::default()
            },
        )
    }

    #[test]
    fn empty_document_yields_empty_layout() {
        let layout = pipeline(Granularity::Words)
            .run(Document::default())
            .unwrap();
        assert!(layout.pages.is_empty());
        assert_eq!(layout.filter, FilterReport::default());
    }

    #[test]
    fn single_glyph_page_yields_one_block() {
        let doc = Document::new(vec![Page::new(
            1,
            vec![Glyph::new((0.0, 0.0, 5.0, 10.0), "x", 0)],
        )]);
        let layout = pipeline(Granularity::Words).run(doc).unwrap();
        assert_eq!(layout.pages.len(), 1);
        assert_eq!(layout.pages[0].blocks.len(), 1);
        assert_eq!(layout.pages[0].blocks[0].text(), "x");
    }
}
