use crate::components::modal::Modal;
use crate::components::order_popup::OrderPopup;
use crate::components::product_grid::detail_button_id;
use tentcharged_core::{Product, ProductId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Option<Product>,
    pub order_popup_open: bool,
    pub wechat_id: AttrValue,
    pub on_close: Callback<()>,
    pub on_order: Callback<()>,
    pub on_close_order: Callback<()>,
}

#[function_component(ProductModal)]
pub fn product_modal(p: &Props) -> Html {
    // The dialog stays mounted after closing, so the card to refocus is the
    // last one shown.
    let last_shown = use_mut_ref(|| None::<ProductId>);
    if let Some(product) = &p.product {
        *last_shown.borrow_mut() = Some(product.id);
    }
    let last_id = *last_shown.borrow();
    let return_focus_id = last_id.map(|id| AttrValue::from(detail_button_id(id)));
    let on_order = {
        let cb = p.on_order.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let title = p
        .product
        .as_ref()
        .map_or_else(|| AttrValue::from(""), |product| AttrValue::from(product.name.clone()));
    let body = p.product.as_ref().map(|product| {
        html! {
            <div class="product-detail">
                <img class="product-detail__image" src={product.image_url.clone()} alt={product.name.clone()} />
                <div class="product-detail__info">
                    <p class="product-detail__price">{ product.price.clone() }</p>
                    <p class="product-detail__category">{ product.category.clone() }</p>
                    <p class="product-detail__description">{ product.description.clone() }</p>
                    <button type="button" id="order-open-btn" class="btn btn--primary" onclick={on_order}>
                        {"Order via WeChat"}
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <>
            <Modal
                open={p.product.is_some()}
                {title}
                class="modal--product"
                on_close={p.on_close.clone()}
                {return_focus_id}
            >
                { body.unwrap_or_default() }
            </Modal>
            <OrderPopup
                open={p.order_popup_open && p.product.is_some()}
                wechat_id={p.wechat_id.clone()}
                on_close={p.on_close_order.clone()}
            />
        </>
    }
}
