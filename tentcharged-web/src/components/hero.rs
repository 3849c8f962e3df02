use crate::dom;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
}

#[function_component(Hero)]
pub fn hero(p: &Props) -> Html {
    let shop_now = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_id("products");
    });
    html! {
        <section id="home" class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1>{ p.brand.clone() }</h1>
                <p class="hero__tagline">{"Powering Your Outdoor Adventures"}</p>
                <a href="#products" class="btn btn--primary btn--pill" onclick={shop_now}>{"Shop Now"}</a>
            </div>
        </section>
    }
}
