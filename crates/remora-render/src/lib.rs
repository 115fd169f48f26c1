#![forbid(unsafe_code)]

//! Causal log graph renderer (headless).
//!
//! Lays out an ordered [`LogSequence`] as a single vertical column of nodes,
//! draws non-overlapping curved connectors between causally related nodes,
//! and serializes the result as an SVG data URL wrapped in a styled-console
//! directive.
//!
//! Rendering is a pure function of its input: identical sequences produce
//! byte-identical SVG text. Anomalies (missing cause, unresolved cause rank,
//! empty input) degrade to a partial drawing instead of an error; a malformed
//! causal graph must never crash the host process.

pub mod console;
pub mod data_url;
pub mod layout;
mod svg;

pub use console::{BufferedConsole, ConsoleDirective, ConsoleSink, StderrConsole};
pub use layout::{Connector, GraphLayout, NODE_RADIUS, SHIFT_RATIO, X_GAP, Y_GAP};

use remora_core::LogSequence;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("console sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A rendered causal graph: the SVG document plus its canvas size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGraph {
    pub svg: String,
    pub width: i64,
    pub height: i64,
}

impl RenderedGraph {
    /// The document as a URL-safe embeddable image reference.
    pub fn data_url(&self) -> String {
        data_url::svg_data_url(&self.svg)
    }

    /// The single console write that displays this graph inline.
    pub fn console_directive(&self) -> ConsoleDirective {
        ConsoleDirective::new(&self.data_url(), self.height)
    }
}

/// Renders the sequence to an SVG document. Pure and infallible: the only
/// observable effect of the whole pipeline is the sink write in
/// [`log_graph`].
pub fn render_graph(entries: &LogSequence) -> RenderedGraph {
    let layout = GraphLayout::compute(entries);
    let svg = svg::render_document(entries, &layout);
    RenderedGraph {
        svg,
        width: layout.width,
        height: layout.height,
    }
}

/// Renders the sequence and emits exactly one styled write to the sink.
pub fn log_graph(entries: &LogSequence, sink: &mut dyn ConsoleSink) -> Result<()> {
    let directive = render_graph(entries).console_directive();
    sink.write_styled(&directive.format, &directive.style)?;
    Ok(())
}
