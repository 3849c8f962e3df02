use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    html! {
        <button
            type="button"
            id={p.id.clone()}
            class={classes!("btn", p.class.clone())}
            disabled={p.disabled}
            {onclick}
        >
            { p.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label_and_id() {
        let props = Props {
            label: AttrValue::from("Admin Login"),
            id: Some(AttrValue::from("login-open-btn")),
            class: classes!("btn--dark"),
            disabled: false,
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("Admin Login"));
        assert!(html.contains("login-open-btn"));
        assert!(html.contains("btn--dark"));
    }
}
