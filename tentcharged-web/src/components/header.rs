use crate::components::button::Button;
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// Page sections reachable from the navigation, as `(label, element id)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("About", "about"),
    ("Products", "products"),
    ("Contact", "contact"),
];

const SCROLLED_AFTER_PX: f64 = 10.0;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
    pub is_admin: bool,
    pub on_login: Callback<()>,
    pub on_admin: Callback<()>,
    pub on_logout: Callback<()>,
}

#[hook]
fn use_scrolled() -> bool {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |()| {
            let listener = Closure::<dyn Fn()>::new(move || {
                scrolled.set(dom::scroll_y() > SCROLLED_AFTER_PX);
            });
            let window = web_sys::window();
            if let Some(win) = window.as_ref() {
                let _ = win.add_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
            }
            move || {
                if let Some(win) = window.as_ref() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }
    *scrolled
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let scrolled = use_scrolled();
    let menu_open = use_state(|| false);

    let nav_click = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::scroll_to_id(target);
            menu_open.set(false);
        })
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let emit_and_close = |cb: &Callback<()>| {
        let cb = cb.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            cb.emit(());
        })
    };

    let admin_controls = if p.is_admin {
        html! {
            <>
                <Button id="admin-open-btn" class="btn--primary" label="Admin Panel" onclick={emit_and_close(&p.on_admin)} />
                <Button id="logout-btn" class="btn--dark" label="Logout" onclick={emit_and_close(&p.on_logout)} />
            </>
        }
    } else {
        html! {
            <Button id="login-open-btn" class="btn--dark" label="Admin Login" onclick={emit_and_close(&p.on_login)} />
        }
    };

    html! {
        <header role="banner" class={classes!("site-header", scrolled.then_some("site-header--scrolled"))}>
            <a href="#main" class="sr-only">{"Skip to content"}</a>
            <div class="header-content">
                <a href="#home" class="logo" aria-label="Go to homepage" onclick={nav_click("home")}>
                    { p.brand.clone() }
                </a>
                <nav
                    aria-label="Main"
                    class={classes!("site-nav", menu_open.then_some("site-nav--open"))}
                >
                    { for NAV_LINKS.iter().map(|&(label, id)| html! {
                        <a key={id} href={format!("#{id}")} onclick={nav_click(id)}>{ label }</a>
                    }) }
                    { admin_controls }
                </nav>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "×" } else { "☰" } }
                </button>
            </div>
        </header>
    }
}
