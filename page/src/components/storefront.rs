//! The page body, shared by static rendering and the browser app.

use leptos::prelude::*;
use storefront_core::types::StoreContent;

use super::{CategoriesSection, Footer, Header, Hero, ProductsSection, StatsBar, TrustSection};

/// Whole storefront page without the `<html>` shell.
#[component]
pub fn StorefrontPage(content: StoreContent) -> impl IntoView {
    let variant = content.variant;
    let stats = variant
        .shows_stats()
        .then(|| view! { <StatsBar stats=content.stats /> });
    let trust = variant
        .shows_trust()
        .then(|| view! { <TrustSection badges=content.trust /> });

    view! {
        <div class="storefront">
            <Header brand=content.brand.clone() />
            <main>
                <Hero hero=content.hero />
                {stats}
                <CategoriesSection categories=content.categories />
                <ProductsSection products=content.products />
                {trust}
            </main>
            <Footer brand=content.brand links=content.footer />
        </div>
    }
}
