//! JSON output format.

use chrono::{DateTime, Utc};
use ohlczoom_types::{Field, Series};
use ohlczoom_view::{AxisTicks, ChartFrame, ViewModel};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

/// Flattened view-model record used for NDJSON output.
#[derive(Serialize)]
struct PointRecord {
    field: Field,
    index: usize,
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct TickRecord {
    index: usize,
    value: f64,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_document<T, W>(&self, value: &T, mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_lines<T, W>(
        records: impl IntoIterator<Item = T>,
        mut writer: W,
    ) -> Result<(), FormatError>
    where
        T: Serialize,
        W: Write,
    {
        for record in records {
            serde_json::to_writer(&mut writer, &record)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &Series,
        writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_document(series, writer),
            JsonStyle::Ndjson => Self::write_lines(series.iter(), writer),
        }
    }

    fn write_view_model<W: Write + Send>(
        &self,
        model: &ViewModel,
        writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_document(model, writer),
            JsonStyle::Ndjson => {
                let records = model.iter().flat_map(|(field, points)| {
                    points.iter().enumerate().map(move |(index, point)| PointRecord {
                        field,
                        index,
                        value: point.value,
                        label: point.label,
                    })
                });
                Self::write_lines(records, writer)
            }
        }
    }

    fn write_ticks<W: Write + Send>(
        &self,
        ticks: &AxisTicks,
        writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_document(ticks, writer),
            JsonStyle::Ndjson => {
                let records = ticks
                    .iter()
                    .enumerate()
                    .map(|(index, &value)| TickRecord { index, value });
                Self::write_lines(records, writer)
            }
        }
    }

    /// A frame is a single document: one JSON value, or one NDJSON line.
    fn write_frame<W: Write + Send>(
        &self,
        frame: &ChartFrame,
        writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_document(frame, writer),
            JsonStyle::Ndjson => Self::write_lines(std::iter::once(frame), writer),
        }
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
