//! Hero section with the rotating product slider.

use leptos::prelude::*;
use storefront_core::types::{FeaturedCallout, HeroContent};

use super::ProductImageSlider;

/// Headline, pitch, calls to action and the product slider.
#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let interval = hero.interval();
    let headline = hero
        .headline
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            // Middle line carries the gold gradient.
            let class = if i == 1 { "hero-line gold-text" } else { "hero-line" };
            view! { <span class=class>{line}</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">{headline}</h1>
                    <p class="hero-description">{hero.description}</p>
                    <div class="hero-actions">
                        <a href="#products" class="btn btn-gold btn-lg">"Shop Now"</a>
                        <a href="#categories" class="btn btn-outline btn-lg">"Explore Collection"</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-glow"></div>
                    <div class="hero-frame">
                        <div class="hero-frame-inner">
                            <ProductImageSlider images=hero.slides interval=interval />
                            {hero.featured.map(|featured| view! { <FeaturedCard featured=featured /> })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Product card floating over the slider.
#[component]
fn FeaturedCard(featured: FeaturedCallout) -> impl IntoView {
    view! {
        <div class="featured-card">
            <p class="featured-name">{featured.name}</p>
            <p class="featured-meta">
                {featured.weight} " · " <span class="featured-price">{featured.price}</span>
            </p>
        </div>
    }
}
