//! Replay command implementation.
//!
//! Applies a scripted sequence of gesture, toggle and reset events to a
//! chart view, printing the resulting state after every step.

use crate::commands::open_view;
use crate::commands::view::apply_factor;
use crate::display::{describe_transition, open_output, summarize, write_frame};
use crate::{OutputArgs, SourceArgs, ViewArgs};
use anyhow::{Context, Result, bail};
use ohlczoom_lib::prelude::*;

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ReplayStep {
    /// A raw gesture event.
    Gesture(GestureEvent),
    /// A complete start/update/end pinch.
    Pinch(f64),
    /// Flip one field's visibility.
    Toggle(Field),
    /// Reset zoom to 1.
    Reset,
}

impl std::str::FromStr for ReplayStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };

        let parse_delta = |arg: Option<&str>| -> Result<f64> {
            let arg = arg.with_context(|| format!("'{name}' needs a scale, e.g. {name}:2"))?;
            arg.parse()
                .with_context(|| format!("Invalid scale '{arg}' in '{s}'"))
        };

        Ok(match name.to_lowercase().as_str() {
            "start" => Self::Gesture(GestureEvent::Start),
            "end" => Self::Gesture(GestureEvent::End),
            "update" => Self::Gesture(GestureEvent::Update {
                scale_delta: parse_delta(arg)?,
            }),
            "pinch" => Self::Pinch(parse_delta(arg)?),
            "toggle" => {
                let field = arg.context("'toggle' needs a field, e.g. toggle:high")?;
                Self::Toggle(field.parse()?)
            }
            "reset" => Self::Reset,
            _ => bail!(
                "Unknown event '{s}'. Valid events: start, update:<delta>, end, \
                 pinch:<delta>, toggle:<field>, reset"
            ),
        })
    }
}

impl std::fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gesture(GestureEvent::Start) => write!(f, "start"),
            Self::Gesture(GestureEvent::Update { scale_delta }) => {
                write!(f, "update:{scale_delta}")
            }
            Self::Gesture(GestureEvent::End) => write!(f, "end"),
            Self::Pinch(delta) => write!(f, "pinch:{delta}"),
            Self::Toggle(field) => write!(f, "toggle:{field}"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

/// Parses a comma separated event script. Empty entries are skipped.
pub(crate) fn parse_script(script: &str) -> Result<Vec<ReplayStep>> {
    script
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Applies one step and describes its effect.
pub(crate) fn apply_step(chart: &mut ChartView, step: ReplayStep) -> String {
    match step {
        ReplayStep::Gesture(event) => describe_transition(&chart.handle_gesture(event)),
        ReplayStep::Pinch(delta) => describe_transition(&apply_factor(chart, delta)),
        ReplayStep::Toggle(field) => {
            let visible = chart.toggle(field);
            format!("{field} {}", if visible { "shown" } else { "hidden" })
        }
        ReplayStep::Reset => describe_transition(&chart.reset()),
    }
}

/// Execute the replay command.
pub(crate) async fn replay(
    events: &str,
    source: SourceArgs,
    view: ViewArgs,
    output: OutputArgs,
    quiet: bool,
) -> Result<()> {
    let steps = parse_script(events)?;
    let (_cache, mut chart) = open_view(&source, &view, quiet).await?;

    println!("0. initial -> {}", summarize(&chart));
    for (i, step) in steps.into_iter().enumerate() {
        let outcome = apply_step(&mut chart, step);
        println!("{}. {step} -> {outcome} | {}", i + 1, summarize(&chart));
    }

    let writer = open_output(output.output.as_deref())?;
    write_frame(chart.frame(), writer, output.format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_view(len: i64) -> ChartView {
        let points = (0..len)
            .map(|i| OhlcPoint::new(i, 2.0, 4.0, 1.0, 3.0, 0.0))
            .collect();
        ChartView::with_series(ViewConfig::default(), Series::new(points).unwrap())
    }

    #[test]
    fn test_parse_script() {
        let steps = parse_script("start, update:2.5,end,pinch:2,toggle:h,reset,").unwrap();
        assert_eq!(
            steps,
            vec![
                ReplayStep::Gesture(GestureEvent::Start),
                ReplayStep::Gesture(GestureEvent::Update { scale_delta: 2.5 }),
                ReplayStep::Gesture(GestureEvent::End),
                ReplayStep::Pinch(2.0),
                ReplayStep::Toggle(Field::High),
                ReplayStep::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_script_errors() {
        assert!(parse_script("zoom").is_err());
        assert!(parse_script("update").is_err());
        assert!(parse_script("pinch:wide").is_err());
        assert!(parse_script("toggle:volume").is_err());
    }

    #[test]
    fn test_step_display_round_trips_through_parse() {
        let step = ReplayStep::Toggle(Field::Close);
        assert_eq!(step.to_string().parse::<ReplayStep>().unwrap(), step);
    }

    #[test]
    fn test_live_updates_do_not_decimate() {
        let mut chart = make_view(100);
        apply_step(&mut chart, ReplayStep::Gesture(GestureEvent::Start));
        let outcome = apply_step(
            &mut chart,
            ReplayStep::Gesture(GestureEvent::Update { scale_delta: 4.0 }),
        );
        assert_eq!(outcome, "live 4.00");
        assert_eq!(chart.frame().decimated_len, 100);

        let outcome = apply_step(&mut chart, ReplayStep::Gesture(GestureEvent::End));
        assert_eq!(outcome, "committed 1.00 -> 4.00");
        assert_eq!(chart.frame().decimated_len, 25);
    }

    #[test]
    fn test_pinches_compound_and_reset() {
        let mut chart = make_view(100);
        apply_step(&mut chart, ReplayStep::Pinch(2.0));
        apply_step(&mut chart, ReplayStep::Pinch(1.5));
        assert_eq!(chart.frame().step, 3);

        assert_eq!(apply_step(&mut chart, ReplayStep::Reset), "reset from 3.00");
        assert_eq!(chart.frame().decimated_len, 100);
    }

    #[test]
    fn test_toggle_step() {
        let mut chart = make_view(5);
        assert_eq!(apply_step(&mut chart, ReplayStep::Toggle(Field::Low)), "low hidden");
        assert!(!chart.view_model().contains(Field::Low));
        assert_eq!(apply_step(&mut chart, ReplayStep::Toggle(Field::Low)), "low shown");
    }
}
