//! Card for a single product on the dashboard.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::products::format_price;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let id = product.id.to_string();
    let price = format_price(product.price);

    view! {
        <li class="product-card" data-product-id=id>
            <h3 class="product-card__name">{product.name}</h3>
            <p class="product-card__price">{price}</p>
            <p class="product-card__description">{product.description}</p>
        </li>
    }
}
