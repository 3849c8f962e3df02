use crate::a11y;
use crate::components::about::About;
use crate::components::admin_panel::{AdminPanel, ProductSubmission};
use crate::components::contact_section::ContactSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::login_modal::{Credentials, LoginModal};
use crate::components::product_grid::ProductGrid;
use crate::components::product_modal::ProductModal;
use crate::dom;
use std::rc::Rc;
use tentcharged_core::{SiteEvent, Transition};
use yew::prelude::*;

pub mod state;

pub use state::{AppState, SiteStore, use_app_state};

#[function_component(App)]
pub fn app() -> Html {
    let app = use_app_state();
    let site = app.site();
    let config = app.config();

    // Announce completed actions to assistive tech.
    {
        let last = app.store.last.clone();
        use_effect_with(last, |last| {
            match last {
                Some(Transition::ProductAdded(id)) => a11y::set_status(&format!("Product {id} added.")),
                Some(Transition::Rejected(reason)) => a11y::set_status(reason),
                _ => {}
            }
            || {}
        });
    }

    let products: Rc<Vec<_>> = Rc::new(site.visible_products().into_iter().cloned().collect());
    let categories = Rc::new(site.categories());
    let suggestions = Rc::new(config.category_suggestions.clone());

    html! {
        <>
            <style>{ a11y::visible_focus_css() }</style>
            <div id="site-status" class="sr-only" role="status" aria-live="polite"></div>
            <Header
                brand={config.brand_name.clone()}
                is_admin={site.is_admin}
                on_login={app.callback(|()| SiteEvent::OpenLogin)}
                on_admin={app.callback(|()| SiteEvent::OpenAdminPanel)}
                on_logout={app.callback(|()| SiteEvent::Logout)}
            />
            <main id="main">
                <Hero brand={config.brand_name.clone()} />
                <About />
                <ProductGrid
                    {products}
                    {categories}
                    selection={site.selection.clone()}
                    on_filter={app.callback(SiteEvent::SetCategoryFilter)}
                    on_sort={app.callback(SiteEvent::SetSortOrder)}
                    on_select={app.callback(SiteEvent::SelectProduct)}
                />
                <ContactSection
                    wechat_id={config.wechat_id.clone()}
                    sales_email={config.sales_email.clone()}
                    delay_ms={config.contact_delay_ms}
                />
            </main>
            <Footer
                brand={config.brand_name.clone()}
                sales_email={config.sales_email.clone()}
                year={dom::current_year()}
            />
            <ProductModal
                product={site.overlays.selected.clone()}
                order_popup_open={site.overlays.order_popup_visible()}
                wechat_id={config.wechat_id.clone()}
                on_close={app.callback(|()| SiteEvent::CloseProduct)}
                on_order={app.callback(|()| SiteEvent::OpenOrderPopup)}
                on_close_order={app.callback(|()| SiteEvent::CloseOrderPopup)}
            />
            <LoginModal
                open={site.login_visible()}
                error={site.login_error.clone()}
                on_submit={app.callback(|c: Credentials| SiteEvent::SubmitLogin {
                    username: c.username,
                    password: c.password,
                })}
                on_close={app.callback(|()| SiteEvent::CloseLogin)}
            />
            <AdminPanel
                open={site.admin_panel_visible()}
                error={site.admin_error.clone()}
                {suggestions}
                on_submit={app.callback(|(form, image): ProductSubmission| SiteEvent::SubmitProduct { form, image })}
                on_read_failed={app.callback(SiteEvent::ImageReadFailed)}
                on_close={app.callback(|()| SiteEvent::CloseAdminPanel)}
            />
        </>
    }
}
