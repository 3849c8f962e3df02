use crate::a11y::{restore_focus, trap_focus_in};
use crate::dom;
use crate::upload::{PreviewUrl, read_file_as_data_uri, selected_file};
use std::rc::Rc;
use tentcharged_core::{DataUri, ProductForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

/// Form fields plus the encoded image, ready for `SiteEvent::SubmitProduct`.
pub type ProductSubmission = (ProductForm, Option<DataUri>);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub suggestions: Rc<Vec<String>>,
    pub on_submit: Callback<ProductSubmission>,
    pub on_read_failed: Callback<String>,
    pub on_close: Callback<()>,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Price,
    Category,
    Description,
}

impl Field {
    fn write(self, form: &mut ProductForm, value: String) {
        match self {
            Self::Name => form.name = value,
            Self::Price => form.price = value,
            Self::Category => form.category = value,
            Self::Description => form.description = value,
        }
    }
}

/// Slide-in panel for adding a product. Stays mounted; closing it resets the
/// fields and revokes the preview URL.
#[function_component(AdminPanel)]
pub fn admin_panel(p: &Props) -> Html {
    let form = {
        let suggestions = Rc::clone(&p.suggestions);
        use_state(move || ProductForm::with_suggestions(&suggestions))
    };
    let file = use_state(|| None::<File>);
    let preview = use_state(|| None::<Rc<PreviewUrl>>);
    let reading = use_state(|| false);

    {
        let form = form.clone();
        let file = file.clone();
        let preview = preview.clone();
        let suggestions = Rc::clone(&p.suggestions);
        use_effect_with(p.open, move |open| {
            dom::set_body_scroll_locked(*open);
            if *open {
                trap_focus_in("admin-panel");
            } else {
                form.set(ProductForm::with_suggestions(&suggestions));
                file.set(None);
                preview.set(None);
            }
            || dom::set_body_scroll_locked(false)
        });
    }

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
                field.write(&mut next, value);
                form.set(next);
            }
        })
    };

    let on_image = {
        let file = file.clone();
        let preview = preview.clone();
        let on_read_failed = p.on_read_failed.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Some(picked) = selected_file(&input) else {
                file.set(None);
                preview.set(None);
                return;
            };
            match PreviewUrl::create(&picked) {
                Ok(url) => preview.set(Some(Rc::new(url))),
                Err(err) => {
                    log::warn!("{err}");
                    on_read_failed.emit(err.reason().to_string());
                    preview.set(None);
                }
            }
            file.set(Some(picked));
        })
    };

    let on_submit = {
        let form = form.clone();
        let file = file.clone();
        let reading = reading.clone();
        let on_submit = p.on_submit.clone();
        let on_read_failed = p.on_read_failed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = (*form).clone();
            let Some(picked) = (*file).clone() else {
                on_submit.emit((fields, None));
                return;
            };
            reading.set(true);
            let reading = reading.clone();
            let on_submit = on_submit.clone();
            let on_read_failed = on_read_failed.clone();
            spawn_local(async move {
                match read_file_as_data_uri(&picked).await {
                    Ok(image) => on_submit.emit((fields, Some(image))),
                    Err(err) => {
                        log::error!("{err}");
                        on_read_failed.emit(err.reason().to_string());
                    }
                }
                reading.set(false);
            });
        })
    };

    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
                restore_focus("admin-open-btn");
            }
        })
    };

    if !p.open {
        return Html::default();
    }

    html! {
        <>
            <div class="admin-backdrop" aria-hidden="true" onclick={on_close.clone()}></div>
            <aside
                id="admin-panel"
                class="admin-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="admin-panel-title"
                onkeydown={on_keydown}
            >
                <div class="admin-panel__header">
                    <h2 id="admin-panel-title">{"Add New Product"}</h2>
                    <button type="button" class="modal__close" aria-label="Close admin panel" onclick={on_close}>
                        {"×"}
                    </button>
                </div>
                <form class="form admin-panel__form" onsubmit={on_submit}>
                    <label for="product-name">{"Product Name"}</label>
                    <input id="product-name" type="text" value={form.name.clone()} oninput={on_field(Field::Name)} />

                    <label for="product-price">{"Price (e.g., ¥1,299)"}</label>
                    <input id="product-price" type="text" value={form.price.clone()} oninput={on_field(Field::Price)} />

                    <label for="product-category">{"Category"}</label>
                    <input
                        id="product-category"
                        type="text"
                        list="product-category-options"
                        value={form.category.clone()}
                        oninput={on_field(Field::Category)}
                    />
                    <datalist id="product-category-options">
                        { for p.suggestions.iter().map(|cat| html! { <option key={cat.clone()} value={cat.clone()} /> }) }
                    </datalist>

                    <label for="product-image-upload">{"Product Image"}</label>
                    <input id="product-image-upload" type="file" accept="image/*" onchange={on_image} />
                    { (*preview).as_ref().map(|url| html! {
                        <img class="admin-panel__preview" src={url.as_str().to_string()} alt="Image preview" />
                    }).unwrap_or_default() }

                    <label for="product-description">{"Description"}</label>
                    <textarea id="product-description" rows="4" value={form.description.clone()} oninput={on_field(Field::Description)} />

                    { p.error.as_ref().map(|msg| html! {
                        <p class="form__error" role="alert">{ msg.clone() }</p>
                    }).unwrap_or_default() }
                    <button type="submit" class="btn btn--primary" disabled={*reading}>
                        { if *reading { "Processing image..." } else { "Add Product" } }
                    </button>
                </form>
            </aside>
        </>
    }
}
