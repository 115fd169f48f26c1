use crate::layout::Y_GAP;
use std::io::Write as _;

/// One styled-console write: a format string with a `%c` style placeholder
/// plus the style applied to it. The style embeds the rendered graph as a
/// CSS `background` data URL with a display height that trims the two
/// outermost row margins, so the strip tightly frames the node column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleDirective {
    pub format: String,
    pub style: String,
}

impl ConsoleDirective {
    pub(crate) fn new(data_url: &str, canvas_height: i64) -> Self {
        Self {
            format: "%c ".to_string(),
            style: format!(
                "font-size:{}px; background: url({data_url}) no-repeat; font-family: monospace;",
                canvas_height - 2 * Y_GAP,
            ),
        }
    }
}

/// The diagnostic output seam: a console that accepts a format string plus a
/// style string, browser-devtools style. The sink is assumed to serialize
/// its own writes, so implementations need no internal coordination.
pub trait ConsoleSink {
    fn write_styled(&mut self, format: &str, style: &str) -> std::io::Result<()>;
}

/// Default sink: one `format<TAB>style` line per directive on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrConsole;

impl ConsoleSink for StderrConsole {
    fn write_styled(&mut self, format: &str, style: &str) -> std::io::Result<()> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{format}\t{style}")
    }
}

/// Capturing sink for tests and embedders that forward directives elsewhere.
#[derive(Debug, Clone, Default)]
pub struct BufferedConsole {
    writes: Vec<ConsoleDirective>,
}

impl BufferedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[ConsoleDirective] {
        &self.writes
    }
}

impl ConsoleSink for BufferedConsole {
    fn write_styled(&mut self, format: &str, style: &str) -> std::io::Result<()> {
        self.writes.push(ConsoleDirective {
            format: format.to_string(),
            style: style.to_string(),
        });
        Ok(())
    }
}
