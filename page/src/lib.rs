//! # storefront-page
//!
//! Leptos components for the Shahidaana storefront.
//!
//! The same component tree serves two builds:
//!
//! - **`ssr`** (default) - [`render_page`] produces a complete static HTML
//!   document. No reactive runtime runs, so the slider shows its first slide.
//! - **`csr`** - mount [`components::StorefrontPage`] in the browser; the
//!   slider rotates on a `window.setInterval` timer.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")]
//! # {
//! use storefront_core::catalog;
//! use storefront_page::render_page;
//!
//! let html = render_page(&catalog::shahidaana());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]

pub mod components;
pub mod styles;

#[cfg(feature = "ssr")]
use components::StorefrontDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use storefront_core::types::StoreContent;

/// Render the complete storefront as an HTML document string, including
/// `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use storefront_core::{catalog, PageVariant};
/// use storefront_page::render_page;
///
/// let mut content = catalog::shahidaana();
/// content.variant = PageVariant::Extended;
///
/// let html = render_page(&content);
/// assert!(html.contains("Happy Customers"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(content: &StoreContent) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <StorefrontDocument content=content.clone() /> }.to_html()
    });
    tracing::debug!(bytes = html.len(), variant = ?content.variant, "rendered storefront");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storefront_core::types::{Category, PageVariant, Product, SlideImage};
    use storefront_core::{catalog, StoreContent};

    /// `src` of every slider `<img>`, in document order. Attribute order
    /// inside the tag is up to the renderer, so each tag is scanned whole.
    fn slide_sources(html: &str) -> Vec<&str> {
        html.match_indices("<img ")
            .filter_map(|(at, _)| {
                let tag = &html[at..at + html[at..].find('>')?];
                if !tag.contains("class=\"slider-image\"") {
                    return None;
                }
                let start = tag.find("src=\"")? + 5;
                let end = tag[start..].find('"')?;
                Some(&tag[start..start + end])
            })
            .collect()
    }

    #[test]
    fn renders_default_storefront() {
        let html = render_page(&catalog::shahidaana());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Shahidaana | Premium Dry Fruits"));
        assert!(html.contains("SHAHIDAANA"));
        assert!(html.contains("Healthy."));
        assert!(html.contains("Handpicked."));
        assert!(html.contains("Explore Collection"));
    }

    #[test]
    fn renders_every_category_and_product() {
        let content = catalog::shahidaana();
        let html = render_page(&content);

        for category in &content.categories {
            assert!(html.contains(&category.name), "missing {}", category.name);
            assert!(html.contains(&format!("id=\"category-{}\"", category.id)));
        }
        for product in &content.products {
            assert!(html.contains(&product.name), "missing {}", product.name);
            assert!(html.contains(&product.price));
        }
        assert_eq!(html.matches("class=\"product-card\"").count(), 8);
        assert_eq!(html.matches("class=\"category-card\"").count(), 4);
        assert!(html.contains("Premium • 500g Pack"));
        assert!(html.contains("(127)"));
    }

    #[test]
    fn slider_renders_first_slide_and_one_dot_per_slide() {
        let html = render_page(&catalog::shahidaana());

        assert_eq!(slide_sources(&html), vec!["/date.jfif"]);
        assert!(html.contains("alt=\"Mixed Dry Fruits Bowl - Premium\""));
        assert_eq!(html.matches("data-slide=").count(), 3);
        assert_eq!(html.matches("slider-dot active").count(), 1);
        assert!(html.contains("data-slide=\"0\""));
    }

    #[test]
    fn empty_slider_renders_nothing() {
        let mut content = catalog::shahidaana();
        content.hero.slides.clear();
        let html = render_page(&content);

        assert!(!html.contains("class=\"slider\""));
        assert!(!html.contains("data-slide="));
        // The rest of the hero is still there.
        assert!(html.contains("Mixed Dry Fruits Bowl"));
    }

    #[test]
    fn single_slide_gets_a_single_active_dot() {
        let mut content = catalog::shahidaana();
        content.hero.slides = vec![SlideImage::new("/only.jpg", "Only")];
        let html = render_page(&content);

        assert_eq!(slide_sources(&html), vec!["/only.jpg"]);
        assert_eq!(html.matches("slider-dot active").count(), 1);
    }

    #[test]
    fn classic_variant_hides_stats_and_trust() {
        let html = render_page(&catalog::shahidaana());
        assert!(!html.contains("class=\"stats-bar\""));
        assert!(!html.contains("Why Choose"));
    }

    #[test]
    fn extended_variant_adds_stats_and_trust() {
        let mut content = catalog::shahidaana();
        content.variant = PageVariant::Extended;
        let html = render_page(&content);

        assert!(html.contains("class=\"stats-bar\""));
        assert!(html.contains("10K+"));
        assert!(html.contains("Why Choose"));
        assert!(html.contains("Quality Checked"));
        assert_eq!(html.matches("class=\"trust-badge\"").count(), 4);
    }

    #[test]
    fn footer_has_contact_and_copyright() {
        let html = render_page(&catalog::shahidaana());

        assert!(html.contains("href=\"tel:+917496074907\""));
        assert!(html.contains("+91 7496074907"));
        assert!(html.contains("Quick Links"));
        assert!(html.contains("Returns"));
        assert!(html.contains("Instagram"));
        assert!(html.contains("2025 Shahidaana. All rights reserved."));
    }

    #[test]
    fn escapes_content_text() {
        let content = StoreContent {
            categories: vec![Category {
                id: 1,
                name: "Nuts <b>& Seeds</b>".into(),
                image: "/n.jpg".into(),
            }],
            products: vec![Product {
                id: 1,
                name: "Plain".into(),
                price: "₹1".into(),
                image: "/p.jpg".into(),
            }],
            ..Default::default()
        };
        let html = render_page(&content);

        assert!(!html.contains("<b>& Seeds</b>"));
        assert!(html.contains("Nuts &lt;b&gt;&amp; Seeds&lt;/b&gt;"));
    }

    #[test]
    fn empty_lists_drop_their_sections() {
        let content = StoreContent {
            categories: Vec::new(),
            products: Vec::new(),
            ..Default::default()
        };
        let html = render_page(&content);

        assert!(!html.contains("id=\"categories\""));
        assert!(!html.contains("id=\"products\""));
        assert!(html.contains("id=\"contact\""));
    }

    #[test]
    fn slide_sources_ignores_attribute_order() {
        let html = r#"<img class="header-logo" src="/logo.jfif"><img src="/a.jpg" alt="A" class="slider-image"><img class="slider-image" src="/b.jpg">"#;
        assert_eq!(slide_sources(html), vec!["/a.jpg", "/b.jpg"]);
    }
}
