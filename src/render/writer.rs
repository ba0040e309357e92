use std::io::Write;

use crate::error::Result;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{MetricSnapshot, RenderMetrics};
use crate::style::reverse_line;
use crate::width::StyledText;

use super::align::{column_widths, pad_to};

const LOG_TARGET: &str = "escapes::render";

/// Writer runtime parameters.
#[derive(Debug, Clone)]
pub struct LineWriterSettings {
    /// Inserted between cells of a row.
    pub separator: String,
    /// Terminate every row with `\n`.
    pub trailing_newline: bool,
}

impl Default for LineWriterSettings {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            trailing_newline: true,
        }
    }
}

/// Writes rows of styled cells, padding each to its column so the visible
/// output lines up whatever escape sequences the cells carry.
pub struct LineWriter<W: Write> {
    writer: W,
    settings: LineWriterSettings,
    metrics: RenderMetrics,
    logger: Option<Logger>,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W, settings: LineWriterSettings) -> Self {
        Self {
            writer,
            settings,
            metrics: RenderMetrics::new(),
            logger: None,
        }
    }

    pub fn with_default(writer: W) -> Self {
        Self::new(writer, LineWriterSettings::default())
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn settings_mut(&mut self) -> &mut LineWriterSettings {
        &mut self.settings
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot()
    }

    /// Write one row, padding cell `i` to `widths[i]`. The last cell is left
    /// unpadded so rows carry no trailing blanks. Returns the visible width.
    pub fn write_row(&mut self, cells: &[StyledText], widths: &[usize]) -> Result<usize> {
        let separator = StyledText::plain(self.settings.separator.as_str());
        let last = cells.len().saturating_sub(1);

        let mut line = StyledText::default();
        for (idx, cell) in cells.iter().enumerate() {
            if idx > 0 {
                line = line + &separator;
            }
            if idx == last {
                line = line + cell;
            } else {
                let target = widths.get(idx).copied().unwrap_or(0);
                line = line + pad_to(cell, target);
            }
        }

        let columns = line.width();
        let mut bytes = line.into_string();
        if self.settings.trailing_newline {
            bytes.push('\n');
        }
        self.writer.write_all(bytes.as_bytes())?;

        self.metrics.record_row(cells.len(), bytes.len(), columns);
        self.emit(
            "row_written",
            [
                json_kv("cells", cells.len()),
                json_kv("bytes", bytes.len()),
                json_kv("columns", columns),
            ],
        );
        Ok(columns)
    }

    /// Write every row aligned to the widest cell of each column.
    pub fn write_table<R>(&mut self, rows: &[R]) -> Result<()>
    where
        R: AsRef<[StyledText]>,
    {
        let widths = column_widths(rows);
        for row in rows {
            self.write_row(row.as_ref(), &widths)?;
        }
        Ok(())
    }

    /// Write a reverse-video line cleared to the right margin.
    pub fn write_reverse_line(&mut self, text: &str) -> Result<()> {
        let line = reverse_line(text);
        self.writer.write_all(line.as_bytes())?;
        self.metrics.record_raw(line.len());
        self.emit("reverse_line_written", [json_kv("bytes", line.len())]);
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush, report the final counters and hand back the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(self.metrics.snapshot().to_log_event(LOG_TARGET));
        }
        Ok(self.writer)
    }

    fn emit(&self, message: &str, fields: impl IntoIterator<Item = (String, serde_json::Value)>) {
        if let Some(logger) = &self.logger {
            if logger.enabled(LogLevel::Debug) {
                let event = event_with_fields(LogLevel::Debug, LOG_TARGET, message, fields);
                let _ = logger.log_event(event);
            }
        }
    }
}
