use crate::components::modal::Modal;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub wechat_id: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(OrderPopup)]
pub fn order_popup(p: &Props) -> Html {
    html! {
        <Modal
            open={p.open}
            title="Order via WeChat"
            class="modal--order"
            description="Scan the QR code with WeChat to contact us and place your order."
            on_close={p.on_close.clone()}
            return_focus_id="order-open-btn"
        >
            <div class="wechat-qr" role="img" aria-label="WeChat QR Code"></div>
            <p class="wechat-id">{ format!("WeChat ID: {}", p.wechat_id) }</p>
        </Modal>
    }
}
