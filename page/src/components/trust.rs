//! "Why Shahidaana" trust badges.

use leptos::prelude::*;
use storefront_core::types::TrustBadge;

use super::{Icon, SectionHeading, TRUST_ICONS};

/// "Why Choose Us" badge grid. Omitted when there are no badges.
#[component]
pub fn TrustSection(badges: Vec<TrustBadge>) -> impl IntoView {
    if badges.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="trust">
            <div class="container">
                <SectionHeading
                    title="Why Choose"
                    accent="Us"
                    description="Quality you can taste, care you can trust"
                />
                <div class="trust-grid">
                    {badges.into_iter().enumerate().map(|(i, badge)| {
                        let icon = TRUST_ICONS[i % TRUST_ICONS.len()];
                        view! {
                            <div class="trust-badge">
                                <div class="trust-icon"><Icon path=icon size="28" /></div>
                                <h3 class="trust-title">{badge.title}</h3>
                                <p class="trust-description">{badge.description}</p>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
