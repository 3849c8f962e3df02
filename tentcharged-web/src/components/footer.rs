use crate::dom;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
    pub sales_email: AttrValue,
    pub year: u32,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_id("contact");
    });
    html! {
        <footer class="site-footer">
            <p>{ format!("© {} {}.com. All Rights Reserved.", p.year, p.brand) }</p>
            <div class="footer-links">
                <a href="#contact" aria-label="WeChat" onclick={to_contact}>{"WeChat"}</a>
                <a href={format!("mailto:{}", p.sales_email)} aria-label="Email">{ p.sales_email.clone() }</a>
            </div>
        </footer>
    }
}
