//! Startup loading of settings, keymaps and the recent-repository cache.
//!
//! Responsibilities:
//! - Run the settings loader with the CLI's overrides.
//! - Build keymaps from the resolved settings.
//! - Open the cache database.
//!
//! Does NOT handle:
//! - Terminal setup (see `runtime::terminal`).
//! - Logging setup (see `runtime::logging`).
//!
//! Invariants:
//! - Any failure here is fatal and is reported before the terminal enters
//!   raw mode.

use anyhow::{Context, Result};
use thalia_config::{Settings, SettingsLoader};

use crate::cache::RecentRepoCache;
use crate::cli::Cli;
use crate::input::Keymaps;

/// Everything `main` needs to build the app.
#[derive(Debug)]
pub struct Startup {
    pub settings: Settings,
    pub keymaps: Keymaps,
    pub cache: RecentRepoCache,
}

/// Load settings with the CLI's overrides applied.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut loader = SettingsLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;
    if let Some(path) = &cli.config {
        loader = loader.with_config_file(path.clone());
    }
    let path = loader.config_file_path();
    loader
        .from_file()
        .with_context(|| format!("Failed to read settings file {}", path.display()))?
        .from_env()
        .context("Invalid THALIA_* environment variable")?
        .build()
        .context("Invalid settings")
}

/// Load settings, keymaps and the cache.
pub fn prepare(cli: &Cli) -> Result<Startup> {
    let settings = load_settings(cli)?;
    let keymaps = Keymaps::from_settings(&settings).context("Invalid key bindings")?;

    let cache_dir = cli.cache_dir();
    let cache = RecentRepoCache::open(&cache_dir)
        .with_context(|| format!("Failed to open cache in {}", cache_dir.display()))?;

    tracing::info!(
        config_file = %settings.config_file.display(),
        cache_dir = %cache_dir.display(),
        theme = %settings.theme,
        "Startup complete"
    );
    Ok(Startup {
        settings,
        keymaps,
        cache,
    })
}
