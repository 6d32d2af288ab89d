use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use consent::{ConsentController, ConsentStore, FileConsentStore, MemoryConsentStore};
use shared::config::load_site_config;

mod controller;
mod ui;

use controller::consent_flow::ConsentFlow;
use ui::SiteApp;

const APP_DIR_NAME: &str = "fahrschule_site";

#[derive(Debug, Parser)]
#[command(name = "site_gui", about = "Fahrschule site shell")]
struct Cli {
    /// Path to site.toml (defaults to SITE_CONFIG env var, then ./site.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Per-user data directory holding the persisted consent record.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn resolve_site_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }

    if let Some(base) = dirs::data_local_dir() {
        return Ok(base.join(APP_DIR_NAME));
    }

    // Fallback: per-user home directory namespace.
    let home = std::env::var("HOME").context("neither a local data dir nor HOME is available")?;
    Ok(PathBuf::from(home).join(format!(".{APP_DIR_NAME}")))
}

/// An unusable data dir degrades to the in-memory store: decisions hold for
/// the session and the user is simply asked again next launch. Never fatal.
fn build_consent_store(override_dir: Option<PathBuf>) -> Box<dyn ConsentStore> {
    match resolve_site_data_dir(override_dir) {
        Ok(data_dir) => Box::new(FileConsentStore::new(&data_dir)),
        Err(err) => {
            tracing::warn!(%err, "no writable data directory; consent will not persist");
            Box::new(MemoryConsentStore::new())
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let config = load_site_config(cli.config.as_deref());
    let controller = ConsentController::new(build_consent_store(cli.data_dir));
    let flow = ConsentFlow::new(controller);

    let title = format!("{} – Ihre Fahrschule", config.school.name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([860.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(SiteApp::new(config, flow)))),
    )
}
