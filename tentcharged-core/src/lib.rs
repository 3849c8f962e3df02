//! TentCharged storefront core
//!
//! Platform-agnostic logic behind the TentCharged single-page site: the
//! product catalog, its filtered and sorted view, overlay coordination, the
//! demo admin login and the add-product flow. No browser dependencies.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod overlay;
pub mod product;
pub mod product_form;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use auth::{AuthError, check_credentials, login};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactError, ContactForm, ContactStatus, deliver};
pub use overlay::Overlays;
pub use product::{NewProduct, Product, ProductId};
pub use product_form::{AddProductError, CATEGORY_SUGGESTIONS, DataUri, ProductForm, commit};
pub use state::{SiteEvent, SiteState, Transition};
pub use view::{
    ALL_CATEGORIES, CategoryFilter, SortOrder, ViewError, ViewSelection, categories,
    category_label, parse_price, visible,
};

/// Trait for abstracting where catalog and configuration data come from.
/// Platform-specific implementations should provide this.
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the initial product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or parsed.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load site configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config(&self) -> Result<SiteConfig, Self::Error>;
}

/// Everything the page needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    pub state: SiteState,
    pub config: SiteConfig,
}

impl Storefront {
    /// Open the storefront from a data loader.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or configuration cannot be loaded.
    pub fn open<L: DataLoader>(loader: &L) -> Result<Self, L::Error> {
        let catalog = loader.load_catalog()?;
        let config = loader.load_config()?;
        Ok(Self {
            state: SiteState::new(catalog),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl DataLoader for FixtureLoader {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            Ok(Catalog::new())
        }

        fn load_config(&self) -> Result<SiteConfig, Self::Error> {
            Ok(SiteConfig::default())
        }
    }

    struct BrokenLoader;

    impl DataLoader for BrokenLoader {
        type Error = CatalogError;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            Catalog::from_json("[")
        }

        fn load_config(&self) -> Result<SiteConfig, Self::Error> {
            Ok(SiteConfig::default())
        }
    }

    #[test]
    fn storefront_opens_with_loaded_catalog() {
        let mut storefront = Storefront::open(&FixtureLoader).unwrap();
        assert!(storefront.state.catalog.is_empty());
        assert_eq!(storefront.config.wechat_id, "TentChargedSales");
        storefront.state.is_admin = true;
        let transition = storefront.state.apply(SiteEvent::SubmitProduct {
            form: ProductForm {
                name: "First".into(),
                price: "¥1".into(),
                category: "Solo".into(),
                description: "d".into(),
            },
            image: Some(DataUri::encode("image/png", b"1")),
        });
        assert_eq!(transition, Transition::ProductAdded(1));
    }

    #[test]
    fn storefront_surfaces_loader_errors() {
        assert!(matches!(
            Storefront::open(&BrokenLoader),
            Err(CatalogError::Parse(_))
        ));
    }
}
