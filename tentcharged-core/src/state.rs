//! Whole-page UI state and the single update function that advances it.
//!
//! Every user interaction becomes a [`SiteEvent`]. [`SiteState::apply`]
//! handles one event at a time and reports a [`Transition`]; views read the
//! derived accessors (`visible_products`, `login_visible`, ...) afterwards.

use crate::auth;
use crate::catalog::Catalog;
use crate::overlay::Overlays;
use crate::product::{Product, ProductId};
use crate::product_form::{self, AddProductError, DataUri, ProductForm};
use crate::view::{self, CategoryFilter, SortOrder, ViewSelection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteEvent {
    SelectProduct(ProductId),
    CloseProduct,
    OpenOrderPopup,
    CloseOrderPopup,
    OpenLogin,
    CloseLogin,
    SubmitLogin { username: String, password: String },
    Logout,
    OpenAdminPanel,
    CloseAdminPanel,
    SetCategoryFilter(CategoryFilter),
    SetSortOrder(SortOrder),
    /// Second phase of the add-product flow, after the image has been read
    SubmitProduct {
        form: ProductForm,
        image: Option<DataUri>,
    },
    ImageReadFailed(String),
}

impl SiteEvent {
    /// Short name for logs. Never includes credentials or image payloads.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SelectProduct(_) => "select-product",
            Self::CloseProduct => "close-product",
            Self::OpenOrderPopup => "open-order-popup",
            Self::CloseOrderPopup => "close-order-popup",
            Self::OpenLogin => "open-login",
            Self::CloseLogin => "close-login",
            Self::SubmitLogin { .. } => "submit-login",
            Self::Logout => "logout",
            Self::OpenAdminPanel => "open-admin-panel",
            Self::CloseAdminPanel => "close-admin-panel",
            Self::SetCategoryFilter(_) => "set-category-filter",
            Self::SetSortOrder(_) => "set-sort-order",
            Self::SubmitProduct { .. } => "submit-product",
            Self::ImageReadFailed(_) => "image-read-failed",
        }
    }
}

/// What an event did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Updated,
    ProductAdded(ProductId),
    /// The event was refused; the message is also stored for inline display.
    Rejected(String),
}

impl Transition {
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteState {
    pub catalog: Catalog,
    pub selection: ViewSelection,
    pub is_admin: bool,
    pub overlays: Overlays,
    pub login_error: Option<String>,
    pub admin_error: Option<String>,
}

impl SiteState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Apply one event. Failures leave the catalog and form-facing state as
    /// they were, apart from the inline error message.
    pub fn apply(&mut self, event: SiteEvent) -> Transition {
        match event {
            SiteEvent::SelectProduct(id) => match self.catalog.get(id) {
                Some(product) => {
                    let product = product.clone();
                    self.overlays.select(product);
                    Transition::Updated
                }
                None => Transition::Rejected(format!("unknown product {id}")),
            },
            SiteEvent::CloseProduct => {
                self.overlays.close_product();
                Transition::Updated
            }
            SiteEvent::OpenOrderPopup => {
                if self.overlays.open_order_popup() {
                    Transition::Updated
                } else {
                    Transition::Unchanged
                }
            }
            SiteEvent::CloseOrderPopup => {
                self.overlays.close_order_popup();
                Transition::Updated
            }
            SiteEvent::OpenLogin => {
                if self.is_admin {
                    return Transition::Unchanged;
                }
                self.login_error = None;
                self.overlays.open_login();
                Transition::Updated
            }
            SiteEvent::CloseLogin => {
                self.overlays.close_login();
                self.login_error = None;
                Transition::Updated
            }
            SiteEvent::SubmitLogin { username, password } => {
                self.submit_login(&username, &password)
            }
            SiteEvent::Logout => {
                self.is_admin = false;
                self.overlays.close_admin_panel();
                self.admin_error = None;
                Transition::Updated
            }
            SiteEvent::OpenAdminPanel => {
                if !self.is_admin {
                    return Transition::Rejected(AddProductError::Unauthorized.to_string());
                }
                self.overlays.open_admin_panel();
                Transition::Updated
            }
            SiteEvent::CloseAdminPanel => {
                self.overlays.close_admin_panel();
                self.admin_error = None;
                Transition::Updated
            }
            SiteEvent::SetCategoryFilter(filter) => {
                self.selection.filter = filter;
                Transition::Updated
            }
            SiteEvent::SetSortOrder(sort) => {
                self.selection.sort = sort;
                Transition::Updated
            }
            SiteEvent::SubmitProduct { form, image } => self.submit_product(&form, image),
            SiteEvent::ImageReadFailed(reason) => {
                self.reject_product(&AddProductError::ImageRead(reason))
            }
        }
    }

    fn submit_login(&mut self, username: &str, password: &str) -> Transition {
        match auth::check_credentials(username, password) {
            Ok(()) => {
                self.is_admin = true;
                self.login_error = None;
                self.overlays.close_login();
                self.overlays.open_admin_panel();
                Transition::Updated
            }
            Err(err) => {
                let message = err.to_string();
                self.login_error = Some(message.clone());
                Transition::Rejected(message)
            }
        }
    }

    fn submit_product(&mut self, form: &ProductForm, image: Option<DataUri>) -> Transition {
        if !self.is_admin {
            return self.reject_product(&AddProductError::Unauthorized);
        }
        let draft = match product_form::commit(form, image) {
            Ok(draft) => draft,
            Err(err) => return self.reject_product(&err),
        };
        match self.catalog.add(draft) {
            Ok(added) => {
                self.admin_error = None;
                self.overlays.close_admin_panel();
                Transition::ProductAdded(added.id)
            }
            Err(_) => self.reject_product(&AddProductError::CatalogFull),
        }
    }

    fn reject_product(&mut self, err: &AddProductError) -> Transition {
        let message = err.to_string();
        self.admin_error = Some(message.clone());
        Transition::Rejected(message)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        view::categories(self.catalog.products())
    }

    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.selection.apply(self.catalog.products())
    }

    #[must_use]
    pub const fn login_visible(&self) -> bool {
        self.overlays.login_visible(self.is_admin)
    }

    #[must_use]
    pub const fn admin_panel_visible(&self) -> bool {
        self.overlays.admin_panel_visible(self.is_admin)
    }
}
