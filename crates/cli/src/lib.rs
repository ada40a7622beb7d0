//! `grocer-cli`: command-line front end for the storefront and cart crates.
//!
//! Stands in for the presentation layer: it reads input, builds the value
//! objects, calls into the pure crates and prints what comes back.

pub mod config;
pub mod money;
pub mod render;

use anyhow::Context;

use grocer_products::{Catalog, demo_catalog};

use crate::config::CatalogConfig;

/// Load the catalog named by configuration, or the built-in demo catalog.
pub fn load_catalog(config: &CatalogConfig) -> anyhow::Result<Catalog> {
    let Some(path) = &config.path else {
        tracing::debug!("using built-in demo catalog");
        return Ok(demo_catalog());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json_str(&json)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;

    tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}
