//! Root document component - the complete HTML page.

use leptos::prelude::*;
use storefront_core::types::StoreContent;

use super::StorefrontPage;
use crate::styles::{CSP, STOREFRONT_CSS};

/// The complete HTML document for the storefront.
#[component]
pub fn StorefrontDocument(content: StoreContent) -> impl IntoView {
    let title = format!("{} | Premium Dry Fruits", content.brand.name);
    let description = content.brand.tagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{STOREFRONT_CSS}</style>
            </head>
            <body>
                <StorefrontPage content=content />
            </body>
        </html>
    }
}
