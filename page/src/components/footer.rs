//! Site footer: brand, link columns and contact.

use leptos::prelude::*;
use storefront_core::types::{Brand, FooterLinks, Link};

/// Footer with the `tel:` contact link and the copyright line. Carries
/// `id="contact"` for the nav anchor.
#[component]
pub fn Footer(brand: Brand, links: FooterLinks) -> impl IntoView {
    let phone_href = brand.phone_href();
    let copyright = format!(
        "© {} {}. All rights reserved. | Premium Dry Fruits.",
        brand.copyright_year, brand.name
    );

    view! {
        <footer id="contact" class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h4 class="footer-brand">{brand.name}</h4>
                    <p class="footer-tagline">{brand.tagline}</p>
                </div>
                <LinkColumn title="Quick Links" links=links.quick_links />
                <LinkColumn title="Support" links=links.support />
                <div>
                    <h4 class="footer-heading">"Follow Us"</h4>
                    <ul class="footer-links">
                        <li>
                            <span class="footer-label">"Contact:"</span>
                            " "
                            <a href=phone_href class="footer-link">{brand.phone}</a>
                        </li>
                        {links.social.into_iter().map(|link| view! {
                            <li><a href=link.href class="footer-link">{link.label}</a></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{copyright}</p>
            </div>
        </footer>
    }
}

/// One titled column of links.
#[component]
fn LinkColumn(title: &'static str, links: Vec<Link>) -> impl IntoView {
    view! {
        <div>
            <h4 class="footer-heading">{title}</h4>
            <ul class="footer-links">
                {links.into_iter().map(|link| view! {
                    <li><a href=link.href class="footer-link">{link.label}</a></li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
