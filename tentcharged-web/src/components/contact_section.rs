use crate::a11y;
use crate::dom;
use tentcharged_core::{ContactForm, ContactStatus, deliver};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub wechat_id: AttrValue,
    pub sales_email: AttrValue,
    /// Simulated delivery time in milliseconds
    pub delay_ms: u32,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Message,
}

#[function_component(ContactSection)]
pub fn contact_section(p: &Props) -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(ContactStatus::default);

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<web_sys::HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| {
                    e.target_dyn_into::<web_sys::HtmlTextAreaElement>()
                        .map(|area| area.value())
                });
            if let Some(value) = value {
                let mut next = (*form).clone();
                match field {
                    Field::Name => next.name = value,
                    Field::Email => next.email = value,
                    Field::Message => next.message = value,
                }
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let delay_ms = i32::try_from(p.delay_ms).unwrap_or(i32::MAX);
        let sales_email = p.sales_email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_sending() {
                return;
            }
            status.set(ContactStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            let sales_email = sales_email.clone();
            spawn_local(async move {
                if let Err(err) = dom::sleep_ms(delay_ms).await {
                    log::warn!("contact delay failed: {}", dom::js_error_message(&err));
                }
                let outcome = deliver(&form);
                match &outcome {
                    Ok(()) => {
                        log::info!("contact message queued for {sales_email}");
                        form.set(ContactForm::default());
                    }
                    Err(err) => log::warn!("contact message rejected: {err}"),
                }
                let next = ContactStatus::from_outcome(&outcome);
                if let Some(msg) = next.message() {
                    a11y::set_status(msg);
                }
                status.set(next);
            });
        })
    };

    let sending = status.is_sending();
    let feedback = status.message().map(|msg| {
        let class = if *status == ContactStatus::Sent {
            "form__success"
        } else {
            "form__error"
        };
        html! { <p class={class} role="status">{ msg }</p> }
    });

    html! {
        <section id="contact" class="contact">
            <h2>{"Get in Touch"}</h2>
            <div class="contact__columns">
                <div class="contact__form">
                    <h3>{"Send Us a Message"}</h3>
                    <form class="form" onsubmit={on_submit}>
                        <label for="name">{"Name"}</label>
                        <input id="name" name="name" type="text" required=true value={form.name.clone()} oninput={on_field(Field::Name)} />
                        <label for="email">{"Email"}</label>
                        <input id="email" name="email" type="email" required=true value={form.email.clone()} oninput={on_field(Field::Email)} />
                        <label for="message">{"Message"}</label>
                        <textarea id="message" name="message" rows="4" required=true value={form.message.clone()} oninput={on_field(Field::Message)} />
                        <button type="submit" class="btn btn--primary" disabled={sending}>
                            { if sending { "Sending..." } else { "Send Message" } }
                        </button>
                        { feedback.unwrap_or_default() }
                    </form>
                </div>
                <div class="contact__direct">
                    <h3>{"Contact Us Directly"}</h3>
                    <p>{"For immediate inquiries or orders, please contact us via WeChat."}</p>
                    <div class="wechat-qr" role="img" aria-label="WeChat QR Code"></div>
                    <p class="wechat-id">{ format!("WeChat ID: {}", p.wechat_id) }</p>
                </div>
            </div>
        </section>
    }
}
