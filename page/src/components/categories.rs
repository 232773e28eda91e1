//! Category cards.

use leptos::prelude::*;
use storefront_core::types::Category;

use super::SectionHeading;

/// "Premium Categories" grid. Omitted when there are no categories.
#[component]
pub fn CategoriesSection(categories: Vec<Category>) -> impl IntoView {
    if categories.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section id="categories" class="categories">
            <div class="container">
                <SectionHeading
                    title="Premium"
                    accent="Categories"
                    description="Explore our carefully curated selection of premium dry fruits"
                />
                <div class="card-grid">
                    {categories
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let card_id = format!("category-{}", category.id);
    view! {
        <article class="category-card" id=card_id>
            <div class="category-media">
                <img class="card-image" src=category.image alt=category.name.clone() />
                <div class="category-shade"></div>
            </div>
            <div class="category-body">
                <h3 class="category-name">{category.name}</h3>
                <p class="category-tag">"Premium Selection"</p>
                <a href="#products" class="category-link">"Explore →"</a>
            </div>
        </article>
    }
}
