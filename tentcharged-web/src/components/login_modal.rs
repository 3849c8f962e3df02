use crate::components::modal::Modal;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<Credentials>,
    pub on_close: Callback<()>,
}

#[function_component(LoginModal)]
pub fn login_modal(p: &Props) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    // Fields are cleared whenever the dialog closes, including after a
    // successful login.
    {
        let username = username.clone();
        let password = password.clone();
        use_effect_with(p.open, move |open| {
            if !*open {
                username.set(String::new());
                password.set(String::new());
            }
            || {}
        });
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_submit = {
        let cb = p.on_submit.clone();
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(Credentials {
                username: (*username).clone(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <Modal
            open={p.open}
            title="Admin Login"
            class="modal--narrow"
            on_close={p.on_close.clone()}
            return_focus_id="login-open-btn"
        >
            <form class="form" onsubmit={on_submit}>
                <label for="username">{"Username"}</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    required=true
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    required=true
                    value={(*password).clone()}
                    oninput={on_password}
                />
                { p.error.as_ref().map(|msg| html! {
                    <p class="form__error" role="alert">{ msg.clone() }</p>
                }).unwrap_or_default() }
                <button type="submit" class="btn btn--primary">{"Log In"}</button>
            </form>
        </Modal>
    }
}
