use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use quiz_core::Catalog;
use rand::{rngs::StdRng, SeedableRng};

mod config;
mod ui;

use config::load_settings;
use ui::SequencerApp;

#[derive(Parser, Debug)]
#[command(about = "Drag-and-drop quiz on the structure of an Arduino sketch")]
struct Args {
    /// JSON catalog file overriding the built-in concept set.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Seed for deterministic shuffles.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(path) = args.catalog {
        settings.catalog_path = Some(path);
    }
    if let Some(seed) = args.seed {
        settings.shuffle_seed = Some(seed);
    }

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let rng = match settings.shuffle_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        concepts = catalog.len(),
        seeded = settings.shuffle_seed.is_some(),
        "starting sequencer gui"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sketch Structure Sequencer")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sketch Structure Sequencer",
        options,
        Box::new(move |_cc| Ok(Box::new(SequencerApp::new(catalog, rng)))),
    )
    .map_err(|err| anyhow::anyhow!("gui event loop terminated with an error: {err}"))
}
