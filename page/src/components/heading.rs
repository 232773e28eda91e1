//! Section heading with a gold-gradient accent word.

use leptos::prelude::*;

/// Centered heading: `"{title} {accent}"` plus a one-line description.
#[component]
pub fn SectionHeading(
    title: &'static str,
    accent: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="section-title">
                {title} " " <span class="gold-text">{accent}</span>
            </h2>
            <p class="section-description">{description}</p>
        </div>
    }
}
