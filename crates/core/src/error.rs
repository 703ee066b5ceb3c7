//! Library error type and crate-level `Result` alias.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! crate: eager geometry validation in the filter stage, contract violations
//! in span `cut`/`swap`, and worker-pool construction failures in the
//! pipeline. All failures are deterministic functions of input; nothing is
//! retried.

use thiserror::Error;

/// Errors raised by the layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Non-finite glyph geometry reached the filter stage — a validation
    /// failure labeled with the offending glyph's page and extraction order.
    #[error("invalid geometry for glyph on page {page} (order {order})")]
    InvalidGeometry { page: u32, order: u32 },

    /// A span `cut`/`swap` index was out of range — a contract violation,
    /// fatal to the operation.
    #[error("index {index} out of range for span of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The scoped worker pool could not be constructed.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Crate-level result alias over [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;
