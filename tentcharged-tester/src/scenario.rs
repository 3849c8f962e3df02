use anyhow::{Context, Result, ensure};
use tentcharged_core::{
    Catalog, CategoryFilter, ContactForm, ContactStatus, DataUri, ProductForm, SiteEvent,
    SiteState, SortOrder, Transition, deliver, parse_price,
};

/// One scripted walk through the storefront state machine.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: fn(&mut SiteState) -> Result<()>,
}

impl Scenario {
    /// Run against a freshly seeded storefront.
    ///
    /// # Errors
    /// Returns the first failed expectation.
    pub fn run(&self) -> Result<()> {
        let catalog = Catalog::seeded().context("seed catalog should load")?;
        let mut state = SiteState::new(catalog);
        (self.run)(&mut state)
    }
}

pub const SCENARIOS: [Scenario; 7] = [
    Scenario {
        key: "smoke",
        description: "Seed catalog loads and renders unfiltered",
        run: smoke,
    },
    Scenario {
        key: "price-sort",
        description: "Price sorting in both directions",
        run: price_sort,
    },
    Scenario {
        key: "category-filter",
        description: "Every category filter returns only its products",
        run: category_filter,
    },
    Scenario {
        key: "admin-login",
        description: "Wrong and right credentials, then logout",
        run: admin_login,
    },
    Scenario {
        key: "add-product",
        description: "Admin adds a product and it appears last",
        run: add_product,
    },
    Scenario {
        key: "overlay-flow",
        description: "Product detail, order popup and their guards",
        run: overlay_flow,
    },
    Scenario {
        key: "contact-form",
        description: "Contact form validation outcomes",
        run: contact_form,
    },
];

#[must_use]
pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
}

fn login(state: &mut SiteState) -> Result<()> {
    state.apply(SiteEvent::OpenLogin);
    let transition = state.apply(SiteEvent::SubmitLogin {
        username: "admin".into(),
        password: "password".into(),
    });
    ensure!(transition == Transition::Updated, "admin login failed: {transition:?}");
    Ok(())
}

fn smoke(state: &mut SiteState) -> Result<()> {
    ensure!(state.catalog.len() == 6, "expected 6 seed products");
    let shown = state.visible_products();
    ensure!(shown.len() == state.catalog.len(), "default view hides products");
    ensure!(
        shown.iter().zip(state.catalog.products()).all(|(a, b)| *a == b),
        "default view reorders products"
    );
    ensure!(!state.login_visible(), "login should start closed");
    ensure!(!state.admin_panel_visible(), "admin panel should start closed");
    Ok(())
}

fn price_sort(state: &mut SiteState) -> Result<()> {
    for (order, ascending) in [(SortOrder::PriceAsc, true), (SortOrder::PriceDesc, false)] {
        state.apply(SiteEvent::SetSortOrder(order));
        let prices: Vec<f64> = state
            .visible_products()
            .iter()
            .filter_map(|p| parse_price(&p.price))
            .collect();
        ensure!(prices.len() == 6, "every seed price should parse");
        let sorted = prices.windows(2).all(|pair| {
            if ascending {
                pair[0] <= pair[1]
            } else {
                pair[0] >= pair[1]
            }
        });
        ensure!(sorted, "{order} produced {prices:?}");
    }
    state.apply(SiteEvent::SetSortOrder(SortOrder::Default));
    ensure!(
        state.visible_products().first().map(|p| p.id) == Some(1),
        "default order should restore insertion order"
    );
    Ok(())
}

fn category_filter(state: &mut SiteState) -> Result<()> {
    let categories = state.categories();
    ensure!(categories.first().map(String::as_str) == Some("All"), "\"All\" must lead");
    for category in categories.iter().skip(1) {
        state.apply(SiteEvent::SetCategoryFilter(CategoryFilter::from_value(category)));
        let shown = state.visible_products();
        ensure!(!shown.is_empty(), "{category} shows nothing");
        ensure!(
            shown.iter().all(|p| &p.category == category),
            "{category} leaks other categories"
        );
    }
    state.apply(SiteEvent::SetCategoryFilter(CategoryFilter::All));
    ensure!(state.visible_products().len() == state.catalog.len(), "\"All\" hides products");
    Ok(())
}

fn admin_login(state: &mut SiteState) -> Result<()> {
    state.apply(SiteEvent::OpenLogin);
    let rejected = state.apply(SiteEvent::SubmitLogin {
        username: "admin".into(),
        password: "letmein".into(),
    });
    ensure!(rejected.is_rejected(), "bad password accepted");
    ensure!(!state.is_admin, "bad password granted admin");
    ensure!(state.login_visible(), "login closed after a failure");

    login(state)?;
    ensure!(state.is_admin, "admin flag not set");
    ensure!(!state.login_visible(), "login still visible for admin");
    ensure!(state.admin_panel_visible(), "admin panel did not open");

    state.apply(SiteEvent::Logout);
    ensure!(!state.is_admin, "logout kept admin");
    ensure!(!state.admin_panel_visible(), "logout left the panel open");
    Ok(())
}

fn add_product(state: &mut SiteState) -> Result<()> {
    let form = ProductForm {
        name: "Trail Bivvy".into(),
        price: "¥450".into(),
        category: "Solo".into(),
        description: "Minimal bivvy shelter.".into(),
    };
    let image = DataUri::encode("image/png", &[0x89, b'P', b'N', b'G']);

    let refused = state.apply(SiteEvent::SubmitProduct {
        form: form.clone(),
        image: Some(image.clone()),
    });
    ensure!(refused.is_rejected(), "visitor was able to add a product");

    login(state)?;
    let missing_image = state.apply(SiteEvent::SubmitProduct {
        form: form.clone(),
        image: None,
    });
    ensure!(missing_image.is_rejected(), "product without image accepted");
    ensure!(state.catalog.len() == 6, "rejected submit changed the catalog");

    let expected_id = state.catalog.next_id().context("product ids exhausted")?;
    let added = state.apply(SiteEvent::SubmitProduct {
        form,
        image: Some(image.clone()),
    });
    ensure!(added == Transition::ProductAdded(expected_id), "unexpected {added:?}");
    let last = state
        .visible_products()
        .last()
        .map(|p| (*p).clone())
        .context("catalog is empty")?;
    ensure!(last.id == expected_id, "new product is not last");
    ensure!(last.image_url == image.as_str(), "image was not stored as a data URI");
    ensure!(!state.admin_panel_visible(), "panel stayed open after adding");
    Ok(())
}

fn overlay_flow(state: &mut SiteState) -> Result<()> {
    let ignored = state.apply(SiteEvent::OpenOrderPopup);
    ensure!(ignored == Transition::Unchanged, "order popup opened without a product");

    state.apply(SiteEvent::SelectProduct(2));
    ensure!(
        state.overlays.selected.as_ref().map(|p| p.id) == Some(2),
        "product 2 not selected"
    );
    state.apply(SiteEvent::OpenOrderPopup);
    ensure!(state.overlays.order_popup_visible(), "order popup did not open");

    state.apply(SiteEvent::CloseProduct);
    ensure!(state.overlays.selected.is_none(), "detail stayed open");
    ensure!(!state.overlays.order_popup_visible(), "order popup outlived the detail");

    ensure!(
        state.apply(SiteEvent::SelectProduct(999)).is_rejected(),
        "unknown product selected"
    );

    let refused = state.apply(SiteEvent::OpenAdminPanel);
    ensure!(refused.is_rejected(), "visitor opened the admin panel");
    Ok(())
}

fn contact_form(_state: &mut SiteState) -> Result<()> {
    let valid = ContactForm {
        name: "Li Wei".into(),
        email: "liwei@example.com".into(),
        message: "Do you ship to Chengdu?".into(),
    };
    let sent = ContactStatus::from_outcome(&deliver(&valid));
    ensure!(sent == ContactStatus::Sent, "valid message failed: {sent:?}");

    let no_at = ContactForm {
        email: "liwei.example.com".into(),
        ..valid.clone()
    };
    let failed = ContactStatus::from_outcome(&deliver(&no_at));
    ensure!(failed == ContactStatus::Failed, "email without @ accepted");

    let blank = ContactForm {
        message: "   ".into(),
        ..valid
    };
    ensure!(deliver(&blank).is_err(), "blank message accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_against_the_seed() {
        for scenario in &SCENARIOS {
            scenario
                .run()
                .unwrap_or_else(|err| panic!("{} failed: {err:#}", scenario.key));
        }
    }

    #[test]
    fn scenario_keys_are_unique() {
        let mut keys: Vec<_> = list_scenarios().map(|(key, _)| key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SCENARIOS.len());
        assert!(get_scenario("smoke").is_some());
        assert!(get_scenario("nope").is_none());
    }
}
