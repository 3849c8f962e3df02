use tentcharged_core::{
    Catalog, CategoryFilter, DataUri, NewProduct, Product, ProductForm, SiteEvent, SiteState,
    SortOrder, Transition, categories, visible,
};

fn priced(id: u32, price: &str) -> Product {
    NewProduct {
        name: format!("Tent {id}"),
        price: price.to_string(),
        image_url: String::new(),
        description: String::new(),
        category: "Test".to_string(),
    }
    .with_id(id)
}

fn seeded_state() -> SiteState {
    SiteState::new(Catalog::seeded().unwrap())
}

#[test]
fn price_ascending_orders_yen_amounts_numerically() {
    let products = vec![priced(1, "¥1,299"), priced(2, "¥899"), priced(3, "¥2,599")];
    let shown: Vec<&str> = visible(&products, &CategoryFilter::All, SortOrder::PriceAsc)
        .into_iter()
        .map(|p| p.price.as_str())
        .collect();
    assert_eq!(shown, vec!["¥899", "¥1,299", "¥2,599"]);
}

#[test]
fn solo_filter_on_seed_yields_single_tent() {
    let mut state = seeded_state();
    state.apply(SiteEvent::SetCategoryFilter(CategoryFilter::from_value("Solo")));
    let shown = state.visible_products();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].category, "Solo");
    assert_eq!(shown[0].name, "Ultralight Solo Hiker Tent");
}

#[test]
fn seed_categories_follow_catalog_order() {
    let catalog = Catalog::seeded().unwrap();
    assert_eq!(
        categories(catalog.products()),
        vec!["All", "2-Person", "Family", "Solo", "Expedition", "Shelter", "Glamping"]
    );
}

#[test]
fn unfiltered_default_view_is_the_store() {
    let state = seeded_state();
    let shown: Vec<Product> = state.visible_products().into_iter().cloned().collect();
    assert_eq!(shown, state.catalog.products());
}

#[test]
fn admin_adds_seventh_product_at_the_end() {
    let mut state = seeded_state();
    state.apply(SiteEvent::OpenLogin);
    state.apply(SiteEvent::SubmitLogin {
        username: "admin".into(),
        password: "password".into(),
    });
    assert!(state.is_admin);

    let before_categories = state.categories();
    let before_products = state.catalog.products().to_vec();
    let transition = state.apply(SiteEvent::SubmitProduct {
        form: ProductForm {
            name: "X".into(),
            price: "¥100".into(),
            category: "Solo".into(),
            description: "d".into(),
        },
        image: Some(DataUri::encode("image/jpeg", &[0xFF, 0xD8, 0xFF])),
    });

    assert_eq!(transition, Transition::ProductAdded(7));
    assert_eq!(state.categories(), before_categories);
    assert_eq!(&state.catalog.products()[..6], before_products.as_slice());
    let shown = state.visible_products();
    assert_eq!(shown.len(), 7);
    let last = shown.last().unwrap();
    assert_eq!(last.id, 7);
    assert_eq!(last.image_url, "data:image/jpeg;base64,/9j/");
}

#[test]
fn wrong_credentials_leave_visitor_state() {
    let mut state = seeded_state();
    for (user, pass) in [("admin", "admin"), ("guest", "password"), ("", "")] {
        let transition = state.apply(SiteEvent::SubmitLogin {
            username: user.into(),
            password: pass.into(),
        });
        assert!(transition.is_rejected());
        assert!(!state.is_admin);
        assert!(state.login_error.is_some());
    }
}

#[test]
fn sorting_after_add_includes_new_product() {
    let mut state = seeded_state();
    state.is_admin = true;
    state.apply(SiteEvent::SubmitProduct {
        form: ProductForm {
            name: "Budget Bivvy".into(),
            price: "¥100".into(),
            category: "Solo".into(),
            description: "d".into(),
        },
        image: Some(DataUri::encode("image/png", b"p")),
    });
    state.apply(SiteEvent::SetSortOrder(SortOrder::PriceAsc));
    let first = state.visible_products()[0];
    assert_eq!(first.name, "Budget Bivvy");
    state.apply(SiteEvent::SetSortOrder(SortOrder::PriceDesc));
    assert_eq!(state.visible_products()[0].name, "Luxury Glamping Yurt");
}
