use std::rc::Rc;
use tentcharged_core::{CategoryFilter, Product, ProductId, SortOrder, ViewSelection, category_label};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Already filtered and sorted
    pub products: Rc<Vec<Product>>,
    pub categories: Rc<Vec<String>>,
    pub selection: ViewSelection,
    pub on_filter: Callback<CategoryFilter>,
    pub on_sort: Callback<SortOrder>,
    pub on_select: Callback<ProductId>,
}

/// Element id of a card's "View Details" button. Focus returns here when
/// the detail dialog closes.
#[must_use]
pub fn detail_button_id(id: ProductId) -> String {
    format!("product-{id}-btn")
}

#[function_component(ProductGrid)]
pub fn product_grid(p: &Props) -> Html {
    let on_filter = {
        let cb = p.on_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(CategoryFilter::from_value(&sel.value()));
            }
        })
    };
    let on_sort = {
        let cb = p.on_sort.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                match sel.value().parse::<SortOrder>() {
                    Ok(order) => cb.emit(order),
                    Err(err) => log::warn!("{err}"),
                }
            }
        })
    };
    let current_filter = p.selection.filter.as_value().to_string();
    let current_sort = p.selection.sort;

    let cards = if p.products.is_empty() {
        html! { <p class="product-grid__empty">{"No products match your criteria."}</p> }
    } else {
        p.products
            .iter()
            .map(|product| {
                let on_select = {
                    let cb = p.on_select.clone();
                    let id = product.id;
                    Callback::from(move |_| cb.emit(id))
                };
                html! {
                    <article key={product.id} class="product-card" data-product-id={product.id.to_string()}>
                        <div class="product-card__media">
                            <img src={product.image_url.clone()} alt={product.name.clone()} loading="lazy" />
                        </div>
                        <div class="product-card__body">
                            <h3>{ product.name.clone() }</h3>
                            <p class="product-card__price">{ product.price.clone() }</p>
                            <button type="button" id={detail_button_id(product.id)} class="btn btn--dark" onclick={on_select}>{"View Details"}</button>
                        </div>
                    </article>
                }
            })
            .collect::<Html>()
    };

    html! {
        <section id="products" class="products">
            <h2>{"Our Products"}</h2>
            <div class="products__controls">
                <label for="category-filter" class="sr-only">{"Filter by Category"}</label>
                <select id="category-filter" onchange={on_filter}>
                    { for p.categories.iter().map(|cat| html! {
                        <option key={cat.clone()} value={cat.clone()} selected={*cat == current_filter}>
                            { category_label(cat) }
                        </option>
                    }) }
                </select>
                <label for="sort-order" class="sr-only">{"Sort by Price"}</label>
                <select id="sort-order" onchange={on_sort}>
                    { for SortOrder::ALL.iter().map(|order| html! {
                        <option key={order.as_value()} value={order.as_value()} selected={*order == current_sort}>
                            { order.label() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="product-grid">
                { cards }
            </div>
        </section>
    }
}
