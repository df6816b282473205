pub mod config;
pub mod logger;
pub mod types;

#[cfg(test)]
mod tests;

use anyhow::Context;

pub use crate::config::Settings;
pub use crate::types::{Currency, Money};

/// Load the layered settings and install the tracing subscriber they
/// describe. Intended for the outermost caller, once per process.
pub fn bootstrap() -> anyhow::Result<Settings> {
    let settings = Settings::load().context("loading toxshare settings")?;
    if !logger::init_logger(&settings.log) {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }
    tracing::info!(level = %settings.log.level, json = settings.log.json, "settings loaded");
    Ok(settings)
}
