//! Day Probability Checker
//!
//! Desktop window over the reachability engine: dropdown, result, insights,
//! bar chart and CSV export.

use anyhow::Context;
use day_probability::config::Settings;
use day_probability::engine::{ReachabilityTable, DAYS_IN_MONTH};
use day_probability::gui::DayProbabilityApp;
use eframe::egui;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level comes from `RUST_LOG` when set, otherwise INFO for this crate.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("day_probability=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::load().context("failed to load settings")?;

    // Built once, read-only for the rest of the process.
    let table = Arc::new(
        ReachabilityTable::try_compute(settings.ceiling, 1..=DAYS_IN_MONTH)
            .context("failed to build reachability table")?,
    );

    let heading_seed = settings.heading_seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([820.0, 640.0])
            .with_title("Day-Based Probability Checker"),
        ..Default::default()
    };

    tracing::info!(ceiling = table.ceiling(), "starting window");

    eframe::run_native(
        "Day-Based Probability Checker",
        options,
        Box::new(move |cc| Ok(Box::new(DayProbabilityApp::new(cc, table, settings, heading_seed)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
