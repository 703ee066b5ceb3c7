//! pagecut - extract reading-order words, lines, or paragraphs from a
//! positioned-glyph dump.
//!
//! The input is the JSON interface format produced by an upstream document
//! parser: an array of pages, each carrying its glyphs with bounding box,
//! font, size, color, and extraction-order number.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use pagecut_core::utils::HasBBox;
use pagecut_core::{
    Document, DocumentLayout, FontRegistry, Glyph, Granularity, Page, Pipeline, PipelineOptions,
};

/// Segmentation level to produce.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum GranularityArg {
    #[default]
    Words,
    Lines,
    Paragraphs,
}

impl From<GranularityArg> for Granularity {
    fn from(value: GranularityArg) -> Self {
        match value {
            GranularityArg::Words => Granularity::Words,
            GranularityArg::Lines => Granularity::Lines,
            GranularityArg::Paragraphs => Granularity::Paragraphs,
        }
    }
}

/// Output type for the extracted blocks.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Plain text, one block per line (default)
    #[default]
    Text,
    /// One JSON object per block
    Jsonl,
}

/// Extract reading-order text blocks from a positioned-glyph dump.
#[derive(Parser, Debug)]
#[command(name = "pagecut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to glyph-dump JSON files ("-" for stdin)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Segmentation level to produce
    #[arg(short = 'g', long, value_enum, default_value = "words")]
    granularity: GranularityArg,

    /// Number of worker threads for page-level parallelism
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,
}

/// One page of the glyph-dump interface format.
#[derive(Debug, Deserialize)]
struct PageRecord {
    page: u32,
    glyphs: Vec<GlyphRecord>,
}

/// One glyph of the glyph-dump interface format.
#[derive(Debug, Deserialize)]
struct GlyphRecord {
    text: String,
    bbox: [f64; 4],
    order: u32,
    #[serde(default)]
    font: Option<String>,
    #[serde(default)]
    size: f64,
    #[serde(default)]
    color: Option<String>,
}

fn read_input(path: &Path) -> anyhow::Result<Vec<PageRecord>> {
    let data = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

fn build_document(records: Vec<PageRecord>, registry: &mut FontRegistry) -> Document {
    let pages = records
        .into_iter()
        .map(|record| {
            let glyphs = record
                .glyphs
                .into_iter()
                .map(|g| {
                    let font = registry.intern_font(g.font.as_deref().unwrap_or(""));
                    let color = registry.intern_color(g.color.as_deref().unwrap_or(""));
                    let [x0, y0, x1, y1] = g.bbox;
                    Glyph::builder((x0, y0, x1, y1), &g.text, g.order)
                        .font(font)
                        .size(g.size)
                        .color(color)
                        .page(record.page)
                        .build()
                })
                .collect();
            Page::new(record.page, glyphs)
        })
        .collect();
    Document::new(pages)
}

fn write_text(out: &mut dyn Write, layout: &DocumentLayout) -> io::Result<()> {
    for page in &layout.pages {
        for block in &page.blocks {
            writeln!(out, "{}", block.text())?;
        }
        // Page separator, as text converters conventionally emit.
        out.write_all(b"\x0c")?;
    }
    Ok(())
}

fn write_jsonl(
    out: &mut dyn Write,
    layout: &DocumentLayout,
    registry: &FontRegistry,
) -> anyhow::Result<()> {
    for page in &layout.pages {
        for block in &page.blocks {
            let stats = block.statistics();
            let record = serde_json::json!({
                "page": block.page(),
                "text": block.text(),
                "bbox": [block.x0(), block.y0(), block.x1(), block.y1()],
                "font": stats.font.and_then(|id| registry.font_name(id)),
                "size": stats.font_size,
                "color": stats.color.and_then(|id| registry.color_value(id)),
            });
            writeln!(out, "{record}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_dump_format_parses_and_builds_a_document() {
        let input = r##"[
            {"page": 2, "glyphs": [
                {"text": "a", "bbox": [0.0, 0.0, 5.0, 10.0], "order": 0,
                 "font": "Helvetica", "size": 12.0, "color": "#000000"},
                {"text": "b", "bbox": [5.0, 0.0, 10.0, 10.0], "order": 1}
            ]},
            {"page": 1, "glyphs": []}
        ]"##;
        let records: Vec<PageRecord> = serde_json::from_str(input).unwrap();
        assert_eq!(records.len(), 2);

        let mut registry = FontRegistry::new();
        let document = build_document(records, &mut registry);
        assert_eq!(document.page_count(), 2);
        // Pages come back in ascending order regardless of input order.
        assert_eq!(document.pages()[0].number(), 1);
        assert_eq!(document.pages()[1].number(), 2);

        let glyphs = document.pages()[1].glyphs();
        assert_eq!(glyphs[0].text(), "a");
        assert_eq!(glyphs[0].size(), 12.0);
        assert_eq!(registry.font_name(glyphs[0].font()), Some("Helvetica"));
        // Missing font and color fall back to the empty interned name.
        assert_eq!(registry.font_name(glyphs[1].font()), Some(""));
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let mut writer: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        Box::new(BufWriter::new(
            File::create(&args.outfile).with_context(|| format!("creating {}", args.outfile))?,
        ))
    };

    for path in &args.files {
        let records = read_input(path)?;
        let mut registry = FontRegistry::new();
        let document = build_document(records, &mut registry);

        let pipeline = Pipeline::new(
            Arc::new(registry),
            PipelineOptions {
                granularity: args.granularity.into(),
                threads: args.threads,
                ..PipelineOptions::default()
            },
        );
        let layout = pipeline.run(document)?;

        match args.output_type {
            OutputType::Text => write_text(&mut writer, &layout)?,
            OutputType::Jsonl => write_jsonl(&mut writer, &layout, pipeline.registry())?,
        }
    }

    writer.flush()?;
    Ok(())
}
