//! Bundled catalog and site configuration.

use tentcharged_core::{Catalog, CatalogError, ConfigError, DataLoader, SiteConfig, Storefront};
use thiserror::Error;

const SITE_CONFIG_JSON: &str = include_str!("../static/assets/data/site.json");

#[derive(Debug, Error)]
pub enum WebDataError {
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("site config: {0}")]
    Config(#[from] ConfigError),
}

/// Loads everything from data compiled into the wasm bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDataLoader;

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::seeded()?)
    }

    fn load_config(&self) -> Result<SiteConfig, Self::Error> {
        Ok(SiteConfig::from_json(SITE_CONFIG_JSON)?)
    }
}

/// Open the storefront, degrading to an empty catalog or default config
/// rather than failing to render.
#[must_use]
pub fn load_storefront() -> Storefront {
    let loader = WebDataLoader;
    match Storefront::open(&loader) {
        Ok(storefront) => storefront,
        Err(err) => {
            log::warn!("falling back to defaults: {err}");
            let catalog = loader.load_catalog().unwrap_or_else(|err| {
                log::warn!("starting with an empty catalog: {err}");
                Catalog::new()
            });
            let config = loader.load_config().unwrap_or_default();
            Storefront {
                state: tentcharged_core::SiteState::new(catalog),
                config,
            }
        }
    }
}
