//! Leptos UI components for the storefront.
//!
//! Each component is a Leptos `#[component]` function taking owned content
//! records as props, so the same tree renders to static HTML on the server
//! and mounts live in the browser.
//!
//! # Component Hierarchy
//!
//! ```text
//! StorefrontDocument (static rendering only)
//! └── StorefrontPage
//!     ├── Header
//!     ├── Hero
//!     │   ├── ProductImageSlider
//!     │   └── FeaturedCard
//!     ├── StatsBar (extended variant)
//!     ├── CategoriesSection
//!     │   └── CategoryCard
//!     ├── ProductsSection
//!     │   └── ProductCard
//!     ├── TrustSection (extended variant)
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but the slider
//! works on its own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use storefront_page::components::ProductImageSlider;
//!
//! view! {
//!     <ProductImageSlider images=slides interval=Duration::from_secs(3) />
//! }
//! ```

mod categories;
mod document;
mod footer;
mod header;
mod heading;
mod hero;
mod icons;
mod products;
mod slider;
mod stats;
mod storefront;
mod trust;

pub use categories::CategoriesSection;
pub use document::StorefrontDocument;
pub use footer::Footer;
pub use header::Header;
pub use heading::SectionHeading;
pub use hero::Hero;
pub use icons::*;
pub use products::ProductsSection;
pub use slider::{BrowserInterval, ProductImageSlider};
pub use stats::StatsBar;
pub use storefront::StorefrontPage;
pub use trust::TrustSection;
