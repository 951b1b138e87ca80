//! Display utilities and output formatting for the ohlczoom CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use ohlczoom_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Output format for series and frames.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Command-line spelling of [`TickScope`].
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum TickScopeArg {
    AllFields,
    VisibleFields,
}

impl From<TickScopeArg> for TickScope {
    fn from(arg: TickScopeArg) -> Self {
        match arg {
            TickScopeArg::AllFields => Self::AllFields,
            TickScopeArg::VisibleFields => Self::VisibleFields,
        }
    }
}

/// Opens `output` for writing, or stdout when absent.
pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    })
}

/// Write a raw series in the specified format, then flush.
pub(crate) fn write_series<W: Write + Send>(
    series: &Series,
    mut writer: W,
    format: Format,
) -> ohlczoom_lib::Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_series(series, &mut writer)?,
        Format::Json => JsonFormatter::new().write_series(series, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_series(series, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write a chart frame in the specified format, then flush.
pub(crate) fn write_frame<W: Write + Send>(
    frame: &ChartFrame,
    mut writer: W,
    format: Format,
) -> ohlczoom_lib::Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_frame(frame, &mut writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_frame(frame, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_frame(frame, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Spinner shown while a series loads; hidden in quiet mode.
pub(crate) fn spinner(message: String, quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("Invalid progress template")?,
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// One-line description of a zoom transition.
pub(crate) fn describe_transition(transition: &ZoomTransition) -> String {
    match transition {
        ZoomTransition::Ignored => "ignored".to_string(),
        ZoomTransition::Started => "started".to_string(),
        ZoomTransition::Live { live } => format!("live {live:.2}"),
        ZoomTransition::Committed { previous, current } => {
            format!("committed {previous:.2} -> {current:.2}")
        }
        ZoomTransition::Cancelled => "cancelled".to_string(),
        ZoomTransition::Reset { previous } => format!("reset from {previous:.2}"),
    }
}

/// One-line summary of the current view state.
pub(crate) fn summarize(view: &ChartView) -> String {
    let frame = view.frame();
    let fields: Vec<&str> = view
        .visibility()
        .visible_fields()
        .map(|field| field.as_str())
        .collect();
    let ticks: Vec<String> = frame.ticks.iter().map(|t| format!("{t:.2}")).collect();

    format!(
        "factor {:.2} (live {:.2}) | step {} | points {}/{} | fields [{}] | ticks [{}]",
        frame.committed_factor,
        view.zoom().live(),
        frame.step,
        frame.decimated_len,
        frame.raw_len,
        fields.join(","),
        ticks.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn make_view() -> ChartView {
        let points = (0..10)
            .map(|i| OhlcPoint::new(i, 1.0, 5.0, 1.0, 3.0, 0.0))
            .collect();
        ChartView::with_series(ViewConfig::default(), Series::new(points).unwrap())
    }

    #[test]
    fn test_summary_line() {
        let mut view = make_view();
        view.toggle(Field::Low);
        assert_eq!(
            summarize(&view),
            "factor 1.00 (live 1.00) | step 1 | points 10/10 | fields [open,high,close] \
             | ticks [5.00, 4.00, 3.00, 2.00, 1.00]"
        );
    }

    #[test]
    fn test_describe_transition() {
        let committed = ZoomTransition::Committed {
            previous: 1.0,
            current: 2.5,
        };
        assert_eq!(describe_transition(&committed), "committed 1.00 -> 2.50");
        assert_eq!(describe_transition(&ZoomTransition::Ignored), "ignored");
    }

    #[test]
    fn test_write_series_ndjson() {
        let view = make_view();
        let mut out = Cursor::new(Vec::new());
        write_series(view.series(), &mut out, Format::Ndjson).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap().lines().count(), 10);
    }

    /// Accepts writes but fails on flush, like a full disk behind a buffer.
    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_flush_error_is_reported() {
        let view = make_view();
        assert!(matches!(
            write_series(view.series(), FailingFlush, Format::Csv),
            Err(OhlczoomError::Io(_))
        ));
        assert!(matches!(
            write_frame(view.frame(), FailingFlush, Format::Json),
            Err(OhlczoomError::Io(_))
        ));
    }

    #[test]
    fn test_open_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.json");
        {
            let writer = open_output(Some(&path)).unwrap();
            write_frame(make_view().frame(), writer, Format::Json).unwrap();
        }
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"raw_len\": 10"));
    }
}
