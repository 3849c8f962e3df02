//! Overlay coordination for the product detail, login, admin panel and order popup.
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Which overlays are open. The login overlay is additionally hidden while
/// the visitor is an admin, see [`Overlays::login_visible`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlays {
    pub selected: Option<Product>,
    pub login_open: bool,
    pub admin_panel_open: bool,
    /// The WeChat order popup; only meaningful on top of a selected product
    pub order_popup_open: bool,
}

impl Overlays {
    pub fn select(&mut self, product: Product) {
        self.selected = Some(product);
        self.order_popup_open = false;
    }

    /// Clearing the selection also drops the order popup sitting on top of it.
    pub fn close_product(&mut self) {
        self.selected = None;
        self.order_popup_open = false;
    }

    /// Returns `false` when there is no product to order.
    pub fn open_order_popup(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.order_popup_open = true;
        true
    }

    pub fn close_order_popup(&mut self) {
        self.order_popup_open = false;
    }

    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    pub fn open_admin_panel(&mut self) {
        self.admin_panel_open = true;
    }

    pub fn close_admin_panel(&mut self) {
        self.admin_panel_open = false;
    }

    #[must_use]
    pub const fn login_visible(&self, is_admin: bool) -> bool {
        self.login_open && !is_admin
    }

    #[must_use]
    pub const fn admin_panel_visible(&self, is_admin: bool) -> bool {
        self.admin_panel_open && is_admin
    }

    #[must_use]
    pub fn order_popup_visible(&self) -> bool {
        self.order_popup_open && self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn tent() -> Product {
        Catalog::seeded().unwrap().products()[0].clone()
    }

    #[test]
    fn closing_product_closes_order_popup() {
        let mut overlays = Overlays::default();
        overlays.select(tent());
        assert!(overlays.open_order_popup());
        assert!(overlays.order_popup_visible());
        overlays.close_product();
        assert!(overlays.selected.is_none());
        assert!(!overlays.order_popup_visible());
    }

    #[test]
    fn order_popup_needs_a_selection() {
        let mut overlays = Overlays::default();
        assert!(!overlays.open_order_popup());
        assert!(!overlays.order_popup_open);
    }

    #[test]
    fn login_hidden_while_admin_even_if_flag_set() {
        let mut overlays = Overlays::default();
        overlays.open_login();
        assert!(overlays.login_visible(false));
        assert!(!overlays.login_visible(true));
        overlays.close_login();
        assert!(!overlays.login_visible(false));
    }

    #[test]
    fn admin_panel_and_detail_are_independent() {
        let mut overlays = Overlays::default();
        overlays.select(tent());
        overlays.open_admin_panel();
        assert!(overlays.admin_panel_visible(true));
        assert!(overlays.selected.is_some());
        overlays.close_admin_panel();
        assert!(overlays.selected.is_some());
        assert!(!overlays.admin_panel_visible(true));
    }
}
