use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ndvi_core::interaction::InputEvent;
use ndvi_core::viewport::DisplaySize;
use serde::Deserialize;
use tracing::debug;

use super::{engine_for, load_grid_file};

#[derive(Args)]
pub struct ReplayArgs {
    /// Input grid (CSV or grayscale image)
    pub file: PathBuf,

    /// TOML script with an `events` array
    pub script: PathBuf,

    /// Engine config TOML
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output PNG path for the final canvas
    #[arg(short, long, default_value = "replay.png")]
    pub output: PathBuf,
}

/// A recorded pointer session.
///
/// A script-level `display` applies to every event that does not carry its own.
#[derive(Deserialize)]
struct ReplayScript {
    #[serde(default)]
    display: Option<DisplaySize>,
    #[serde(default)]
    events: Vec<InputEvent>,
}

impl ReplayScript {
    fn resolved_events(&self) -> Vec<InputEvent> {
        let fill = |d: Option<DisplaySize>| d.or(self.display);
        self.events
            .iter()
            .map(|e| match *e {
                InputEvent::PointerDown { x, y, display } => InputEvent::PointerDown {
                    x,
                    y,
                    display: fill(display),
                },
                InputEvent::PointerMove { x, y, display } => InputEvent::PointerMove {
                    x,
                    y,
                    display: fill(display),
                },
                InputEvent::Wheel {
                    x,
                    y,
                    delta_y,
                    display,
                } => InputEvent::Wheel {
                    x,
                    y,
                    delta_y,
                    display: fill(display),
                },
                other => other,
            })
            .collect()
    }
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let grid = load_grid_file(&args.file)?;
    let mut engine = engine_for(grid, args.config.as_deref())?;

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: ReplayScript = toml::from_str(&text)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;
    let events = script.resolved_events();
    debug!(events = events.len(), script = %args.script.display(), "Loaded replay script");

    let pb = ProgressBar::new(events.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Replaying events");

    let mut redraws = 0usize;
    for event in &events {
        if engine.handle_event(event).viewport_changed {
            redraws += 1;
        }
        pb.inc(1);
    }
    pb.finish_with_message(format!("Replayed {} events ({} redraws)", events.len(), redraws));

    engine
        .export_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    crate::summary::print_view_summary(&engine);
    println!("Saved to {}", args.output.display());
    Ok(())
}
