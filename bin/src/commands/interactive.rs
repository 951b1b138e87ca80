//! Interactive command implementation.

use crate::commands::open_view;
use crate::commands::view::apply_factor;
use crate::display::{Format, describe_transition, spinner, summarize, write_frame};
use crate::{SourceArgs, ViewArgs};
use anyhow::{Context, Result};
use inquire::{CustomType, Select};
use ohlczoom_lib::prelude::*;
use ohlczoom_lib::refresh_view;

const PINCH: &str = "Pinch";
const TOGGLE: &str = "Toggle field";
const RESET: &str = "Reset zoom";
const SHOW: &str = "Show frame";
const REFRESH: &str = "Refresh data";
const QUIT: &str = "Quit";

/// Run the prompt loop until the user quits.
pub(crate) async fn interactive(
    source: SourceArgs,
    view: ViewArgs,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let (mut cache, mut chart) = open_view(&source, &view, quiet).await?;
    println!("{}", summarize(&chart));

    loop {
        let action = Select::new(
            "Action:",
            vec![PINCH, TOGGLE, RESET, SHOW, REFRESH, QUIT],
        )
        .prompt()
        .context("Prompt cancelled")?;

        match action {
            PINCH => {
                let delta = CustomType::<f64>::new("Scale delta:")
                    .with_help_message("> 1 zooms out (fewer points), < 1 zooms back in")
                    .prompt()
                    .context("Prompt cancelled")?;
                println!("{}", describe_transition(&apply_factor(&mut chart, delta)));
            }
            TOGGLE => {
                let options = toggle_options(chart.visibility());
                let selection = Select::new("Field:", options)
                    .raw_prompt()
                    .context("Prompt cancelled")?;
                let field = Field::all()[selection.index];
                let visible = chart.toggle(field);
                println!("{field} {}", if visible { "shown" } else { "hidden" });
            }
            RESET => println!("{}", describe_transition(&chart.reset())),
            SHOW => write_frame(chart.frame(), std::io::stdout(), format)?,
            REFRESH => {
                cache.invalidate();
                let progress = spinner(format!("Loading {}", cache.source().describe()), quiet)?;
                let status = refresh_view(&mut cache, &mut chart).await;
                progress.finish_and_clear();
                if let FetchStatus::Failed(reason) = status {
                    println!("Refresh failed: {reason}");
                    if let Some(previous) = cache.cached() {
                        chart.replace_series(previous.series.clone());
                    }
                }
            }
            _ => break,
        }

        println!("{}", summarize(&chart));
    }

    Ok(())
}

/// Prompt entries for the toggle menu, in [`Field::all`] order.
fn toggle_options(visibility: &VisibilityFlags) -> Vec<String> {
    Field::all()
        .iter()
        .map(|field| {
            let state = if visibility.is_visible(*field) {
                "shown"
            } else {
                "hidden"
            };
            format!("{} ({state})", field.label())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_options() {
        assert_eq!(
            toggle_options(&VisibilityFlags::open_close()),
            vec!["Open (shown)", "High (hidden)", "Low (hidden)", "Close (shown)"]
        );
    }
}
