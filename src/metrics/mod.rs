use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated by a [`LineWriter`](crate::render::LineWriter).
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    rows: u64,
    cells: u64,
    bytes: u64,
    columns: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emitted row of `cells` cells, `bytes` long, occupying
    /// `columns` visible terminal columns.
    pub fn record_row(&mut self, cells: usize, bytes: usize, columns: usize) {
        self.rows = self.rows.saturating_add(1);
        self.cells = self.cells.saturating_add(cells as u64);
        self.bytes = self.bytes.saturating_add(bytes as u64);
        self.columns = self.columns.saturating_add(columns as u64);
    }

    /// Record raw output whose width is unknown, such as a cleared line.
    pub fn record_raw(&mut self, bytes: usize) {
        self.rows = self.rows.saturating_add(1);
        self.bytes = self.bytes.saturating_add(bytes as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            rows: self.rows,
            cells: self.cells,
            bytes: self.bytes,
            columns: self.columns,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub rows: u64,
    pub cells: u64,
    pub bytes: u64,
    pub columns: u64,
}

impl MetricSnapshot {
    /// Bytes that did not turn into visible columns: escape sequences plus
    /// the extra bytes of multi-byte characters.
    pub fn overhead_bytes(&self) -> u64 {
        self.bytes.saturating_sub(self.columns)
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("rows".to_string(), json!(self.rows));
        map.insert("cells".to_string(), json!(self.cells));
        map.insert("bytes".to_string(), json!(self.bytes));
        map.insert("columns".to_string(), json!(self.columns));
        map.insert("overhead_bytes".to_string(), json!(self.overhead_bytes()));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "render_metrics", self.as_fields())
    }
}
