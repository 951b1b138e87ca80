//! CSV output format.

use chrono::{DateTime, SecondsFormat, Utc};
use ohlczoom_types::Series;
use ohlczoom_view::{AxisTicks, ViewModel};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(label: Option<DateTime<Utc>>) -> String {
    label.map_or_else(String::new, |dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &Series,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "timestamp{d}date{d}open{d}high{d}low{d}close{d}volume")?;
        }

        for point in series {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                point.timestamp,
                format_label(point.datetime()),
                point.open,
                point.high,
                point.low,
                point.close,
                point.volume
            )?;
        }

        Ok(())
    }

    /// One row per sample; one column per visible field. The `label`
    /// column is taken from whichever field carries a label.
    fn write_view_model<W: Write + Send>(
        &self,
        model: &ViewModel,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let columns: Vec<_> = model.iter().collect();

        if self.include_header {
            write!(writer, "index{d}label")?;
            for (field, _) in &columns {
                write!(writer, "{d}{}", field.as_str())?;
            }
            writeln!(writer)?;
        }

        for i in 0..model.points_per_series() {
            let label = columns.iter().find_map(|(_, points)| points[i].label);
            write!(writer, "{i}{d}{}", format_label(label))?;
            for (_, points) in &columns {
                write!(writer, "{d}{}", points[i].value)?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn write_ticks<W: Write + Send>(
        &self,
        ticks: &AxisTicks,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "tick{d}value")?;
        }

        for (i, value) in ticks.iter().enumerate() {
            writeln!(writer, "{i}{d}{value}")?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
