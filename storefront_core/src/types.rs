//! Storefront content types.
//!
//! Every record here is plain display data. They are:
//!
//! - **Deserializable** - content files are TOML, read via serde
//! - **Clone-friendly** - components take owned copies as props
//! - **Default-able** - `Default` is the built-in catalog, so partial content
//!   files keep it for everything they leave out
//!
//! # Example
//!
//! ```rust
//! use storefront_core::types::{Category, StoreContent};
//!
//! let content = StoreContent {
//!     categories: vec![Category {
//!         id: 1,
//!         name: "Almonds".into(),
//!         image: "/almonds.jfif".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.categories.len(), 1);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time between two slider ticks.
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(4000);

/// One displayable slider image with its accessible text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideImage {
    /// Asset path or URI, passed through to `<img src>` untouched
    pub source: String,
    /// Alternative text for the image
    pub alt_text: String,
}

impl SlideImage {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// A category card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub image: String,
}

/// A product card. `price` is already formatted for display (e.g. `"₹599"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub image: String,
}

/// Brand identity shown in the header and footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    /// One-liner under the brand name in the footer
    pub tagline: String,
    /// Contact phone, shown as a `tel:` link
    pub phone: String,
    pub copyright_year: u16,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Shahidaana".into(),
            logo: "/logo.jfif".into(),
            tagline: "Premium dry fruits hand-curated for your wellness and taste.".into(),
            phone: "+91 7496074907".into(),
            copyright_year: 2025,
        }
    }
}

impl Brand {
    /// Phone number as a `tel:` href (spaces stripped).
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

/// The product card laid over the hero slider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedCallout {
    pub name: String,
    /// Pack size, e.g. `"1 kg"`
    pub weight: String,
    pub price: String,
}

/// Hero section: headline, pitch and the rotating slider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// Headline lines; the second one is rendered with the gold gradient
    pub headline: Vec<String>,
    pub description: String,
    pub slides: Vec<SlideImage>,
    /// Milliseconds between slider ticks
    pub interval_ms: u64,
    pub featured: Option<FeaturedCallout>,
}

impl Default for HeroContent {
    fn default() -> Self {
        crate::catalog::hero()
    }
}

impl HeroContent {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// One figure in the stats bar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One entry in the trust section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustBadge {
    pub title: String,
    pub description: String,
}

/// A footer link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Footer link columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinks {
    pub quick_links: Vec<Link>,
    pub support: Vec<Link>,
    pub social: Vec<Link>,
}

impl Default for FooterLinks {
    fn default() -> Self {
        crate::catalog::footer_links()
    }
}

/// Which draft of the page to render.
///
/// `Extended` adds the stats bar under the hero and the trust section above
/// the footer. Everything else is shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    #[default]
    Classic,
    Extended,
}

impl PageVariant {
    pub fn shows_stats(self) -> bool {
        matches!(self, PageVariant::Extended)
    }

    pub fn shows_trust(self) -> bool {
        matches!(self, PageVariant::Extended)
    }
}

impl std::str::FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(PageVariant::Classic),
            "extended" => Ok(PageVariant::Extended),
            other => Err(format!("unknown page variant '{other}' (expected classic|extended)")),
        }
    }
}

/// Everything the page renders.
///
/// Defaults to [`catalog::shahidaana`](crate::catalog::shahidaana), so any
/// section or field missing from a content file keeps its built-in value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreContent {
    pub variant: PageVariant,
    pub brand: Brand,
    pub hero: HeroContent,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub stats: Vec<Stat>,
    pub trust: Vec<TrustBadge>,
    pub footer: FooterLinks,
}

impl Default for StoreContent {
    fn default() -> Self {
        crate::catalog::shahidaana()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_href_strips_spaces() {
        let brand = Brand::default();
        assert_eq!(brand.phone_href(), "tel:+917496074907");
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("Extended".parse::<PageVariant>(), Ok(PageVariant::Extended));
        assert_eq!("classic".parse::<PageVariant>(), Ok(PageVariant::Classic));
        assert!("fancy".parse::<PageVariant>().is_err());
    }

    #[test]
    fn variant_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PageVariant::Extended).unwrap(),
            "\"extended\""
        );
        let slide: SlideImage =
            serde_json::from_str(r#"{"source":"/a.jpg","alt_text":"A"}"#).unwrap();
        assert_eq!(slide, SlideImage::new("/a.jpg", "A"));
    }

    #[test]
    fn only_extended_shows_extra_sections() {
        assert!(!PageVariant::Classic.shows_stats());
        assert!(!PageVariant::Classic.shows_trust());
        assert!(PageVariant::Extended.shows_stats());
        assert!(PageVariant::Extended.shows_trust());
    }

    #[test]
    fn hero_defaults_to_four_second_interval() {
        let hero = HeroContent::default();
        assert_eq!(hero.interval(), DEFAULT_SLIDE_INTERVAL);
    }

    #[test]
    fn defaults_are_the_builtin_catalog() {
        assert_eq!(StoreContent::default(), crate::catalog::shahidaana());
        assert_eq!(HeroContent::default().slides.len(), 3);
        assert_eq!(FooterLinks::default().support.len(), 3);
    }
}
