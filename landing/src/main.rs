// Shahidaana storefront, browser build

use leptos::prelude::*;
use storefront_core::{PageVariant, catalog};
use storefront_page::components::StorefrontPage;
use storefront_page::styles::STOREFRONT_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// `?layout=extended` switches on the stats bar and trust section.
fn requested_variant() -> Option<PageVariant> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let layout = params.get("layout")?;
    match layout.parse() {
        Ok(variant) => Some(variant),
        Err(e) => {
            web_sys::console::warn_1(&e.into());
            None
        }
    }
}

#[component]
fn App() -> impl IntoView {
    let mut content = catalog::shahidaana();
    if let Some(variant) = requested_variant() {
        content.variant = variant;
    }

    view! {
        <style>{STOREFRONT_CSS}</style>
        <StorefrontPage content=content />
    }
}
