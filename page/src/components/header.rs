//! Sticky header with logo, section links and the call to action.

use leptos::prelude::*;
use storefront_core::types::Brand;

/// Site header. The menu button toggles the nav on narrow screens.
#[component]
pub fn Header(brand: Brand) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let logo_alt = format!("{} Logo", brand.name);
    let wordmark = brand.name.to_uppercase();

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#" class="header-brand">
                    <img class="header-logo" src=brand.logo alt=logo_alt />
                    <span class="header-wordmark">{wordmark}</span>
                </a>
                <nav class=move || if menu_open.get() { "header-nav open" } else { "header-nav" }>
                    <a href="#categories" class="header-link">"Categories"</a>
                    <a href="#products" class="header-link">"Products"</a>
                    <a href="#contact" class="header-link">"Contact"</a>
                </nav>
                <a href="#products" class="btn btn-gold header-cta">"Shop Now"</a>
                <button
                    class="header-menu"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
        </header>
    }
}
