//! Stats bar (extended layout).

use leptos::prelude::*;
use storefront_core::types::Stat;

/// Row of headline figures under the hero.
#[component]
pub fn StatsBar(stats: Vec<Stat>) -> impl IntoView {
    if stats.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="stats-bar">
            <div class="container stats-grid">
                {stats.into_iter().map(|stat| view! {
                    <div class="stat">
                        <p class="stat-value gold-text">{stat.value}</p>
                        <p class="stat-label">{stat.label}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}
