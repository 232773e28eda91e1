//! # storefront-core
//!
//! Content model and slider engine for the Shahidaana dry-fruits storefront.
//!
//! The page itself is static: a hero, category cards, a product grid and a
//! footer, all rendered from an immutable [`StoreContent`]. The one moving
//! part is the hero image slider, which advances to the next slide on a
//! repeating timer and wraps around after the last one.
//!
//! ## Modules
//!
//! - [`types`] - content records (categories, products, slides, brand)
//! - [`catalog`] - the built-in Shahidaana content
//! - [`config`] - loading and validating `.storefront/content.toml`
//! - [`slider`] - slide index arithmetic and [`AutoRotatingSlider`]
//! - [`rotation`] - the [`RepeatingTimer`] seam and timer ownership
//! - `timer` - [`TokioTimer`], available with the `tokio` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_core::catalog;
//!
//! let content = catalog::shahidaana();
//! assert!(content.validate().is_ok());
//! assert_eq!(content.hero.slides.len(), 3);
//! ```

#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod rotation;
pub mod slider;
#[cfg(feature = "tokio")]
pub mod timer;
pub mod types;

pub use error::{ConfigError, ContentError, TimerError};
pub use rotation::{RepeatingTimer, Rotation, TickFn};
pub use slider::{indicators, AutoRotatingSlider, Indicator, SliderState};
#[cfg(feature = "tokio")]
pub use timer::TokioTimer;
pub use types::{
    Category, PageVariant, Product, SlideImage, StoreContent, DEFAULT_SLIDE_INTERVAL,
};
