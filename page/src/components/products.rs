//! Featured product grid.

use leptos::prelude::*;
use storefront_core::types::Product;

use super::{Icon, SectionHeading, ICON_PLUS, ICON_STAR};

/// Review count shown on every card.
const REVIEW_COUNT: u32 = 127;

/// "Featured Products" grid. Omitted when there are no products.
#[component]
pub fn ProductsSection(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section id="products" class="products">
            <div class="container">
                <SectionHeading
                    title="Featured"
                    accent="Products"
                    description="Hand-picked premium dry fruits for the finest taste and health benefits"
                />
                <div class="card-grid">
                    {products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let card_id = format!("product-{}", product.id);
    let add_label = format!("Add {}", product.name);
    let stars = (0..5)
        .map(|_| view! { <Icon path=ICON_STAR size="14" /> })
        .collect::<Vec<_>>();

    view! {
        <article class="product-card" id=card_id>
            <div class="product-media">
                <img class="card-image" src=product.image alt=product.name.clone() />
                <span class="product-badge">"Premium"</span>
            </div>
            <div class="product-body">
                <h3 class="product-name">{product.name}</h3>
                <p class="product-pack">"Premium • 500g Pack"</p>
                <div class="product-rating">
                    <span class="stars">{stars}</span>
                    <span class="review-count">{format!("({REVIEW_COUNT})")}</span>
                </div>
                <div class="product-footer">
                    <div>
                        <p class="product-price">{product.price}</p>
                        <p class="product-unit">"Per pack"</p>
                    </div>
                    <button class="product-add" aria-label=add_label>
                        <Icon path=ICON_PLUS size="18" />
                    </button>
                </div>
            </div>
        </article>
    }
}
