use futures::executor::block_on;
use tentcharged_web::app::App;
use tentcharged_web::components::about::About;
use tentcharged_web::components::contact_section::{self, ContactSection};
use tentcharged_web::components::hero::{self, Hero};
use yew::{AttrValue, LocalServerRenderer};

#[test]
fn app_renders_every_section_for_a_visitor() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    for id in ["id=\"home\"", "id=\"about\"", "id=\"products\"", "id=\"contact\""] {
        assert!(html.contains(id), "missing section {id}");
    }
    assert!(html.contains("site-status"));
    assert!(html.contains("Admin Login"));
    assert!(html.contains("Luxury Glamping Yurt"));
    assert!(!html.contains("Add New Product"));
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn hero_uses_configured_brand() {
    let props = hero::Props {
        brand: AttrValue::from("TentCharged"),
    };
    let html = block_on(LocalServerRenderer::<Hero>::with_props(props).render());
    assert!(html.contains("TentCharged"));
    assert!(html.contains("Shop Now"));
}

#[test]
fn about_lists_company_pillars() {
    let html = block_on(LocalServerRenderer::<About>::new().render());
    assert!(html.contains("Our Story"));
    assert!(html.contains("Quality Guarantee"));
    assert!(html.contains("Customer-Centric"));
}

#[test]
fn contact_section_starts_idle() {
    let props = contact_section::Props {
        wechat_id: AttrValue::from("TentChargedSales"),
        sales_email: AttrValue::from("sales@tentcharged.com"),
        delay_ms: 1_000,
    };
    let html = block_on(LocalServerRenderer::<ContactSection>::with_props(props).render());
    assert!(html.contains("Send Message"));
    assert!(html.contains("WeChat ID: TentChargedSales"));
    assert!(!html.contains("Message sent successfully!"));
}
