//! Built-in Shahidaana content.
//!
//! Used when no content file is given. Asset paths are relative to the site
//! root, the same files the page has always shipped with.

use crate::types::{
    Brand, Category, FeaturedCallout, FooterLinks, HeroContent, Link, PageVariant, Product,
    SlideImage, Stat, StoreContent, TrustBadge, DEFAULT_SLIDE_INTERVAL,
};

/// The full default page content.
pub fn shahidaana() -> StoreContent {
    StoreContent {
        variant: PageVariant::Classic,
        brand: Brand::default(),
        hero: hero(),
        categories: categories(),
        products: products(),
        stats: stats(),
        trust: trust_badges(),
        footer: footer_links(),
    }
}

pub fn hero() -> HeroContent {
    HeroContent {
        headline: vec!["Healthy.".into(), "Premium.".into(), "Handpicked.".into()],
        description: "Discover our finest hand-curated collection of premium dry fruits \
                      sourced from the world's best farms. Every piece is selected for \
                      exceptional quality and authentic taste."
            .into(),
        slides: hero_slides(),
        interval_ms: DEFAULT_SLIDE_INTERVAL.as_millis() as u64,
        featured: Some(FeaturedCallout {
            name: "Mixed Dry Fruits Bowl".into(),
            weight: "1 kg".into(),
            price: "₹1499".into(),
        }),
    }
}

pub fn hero_slides() -> Vec<SlideImage> {
    vec![
        SlideImage::new("/date.jfif", "Mixed Dry Fruits Bowl - Premium"),
        SlideImage::new("/almonds.jfif", "Premium almonds"),
        SlideImage::new("/gift.jfif", "Deluxe Gifts"),
    ]
}

pub fn categories() -> Vec<Category> {
    [
        (1, "Almonds", "/almonds.jfif"),
        (2, "Cashews", "/cashew.jfif"),
        (3, "Raisins", "/raisin.jfif"),
        (4, "Pistachios", "/pistachio.jfif"),
    ]
    .into_iter()
    .map(|(id, name, image)| Category {
        id,
        name: name.into(),
        image: image.into(),
    })
    .collect()
}

pub fn products() -> Vec<Product> {
    [
        (1, "California Almonds Premium", "₹599", "/california.jfif"),
        (2, "Cashew Nuts Deluxe", "₹799", "/cashew-01.jfif"),
        (3, "Green Pistachios", "₹899", "/greenpistachio.jfif"),
        (4, "Black Raisins Premium", "₹399", "/raisin.jfif"),
        (5, "Premium Walnuts", "₹649", "/walnuts.jfif"),
        (6, "Trail Mix Blend", "₹499", "/berry.jfif"),
        (7, "Healthy Seeds Mix", "₹349", "/seed.jfif"),
        (8, "Gift Pack Assorted", "₹1299", "/gift.jfif"),
    ]
    .into_iter()
    .map(|(id, name, price, image)| Product {
        id,
        name: name.into(),
        price: price.into(),
        image: image.into(),
    })
    .collect()
}

pub fn stats() -> Vec<Stat> {
    [
        ("10K+", "Happy Customers"),
        ("50+", "Premium Varieties"),
        ("100%", "Natural & Fresh"),
        ("24h", "Dispatch Time"),
    ]
    .into_iter()
    .map(|(value, label)| Stat {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

pub fn trust_badges() -> Vec<TrustBadge> {
    [
        ("Farm Sourced", "Direct from trusted growers, no middlemen."),
        ("Quality Checked", "Every batch graded by hand before packing."),
        ("Freshness Sealed", "Nitrogen-flushed packs keep the crunch."),
        ("Fast Delivery", "Dispatched within 24 hours across India."),
    ]
    .into_iter()
    .map(|(title, description)| TrustBadge {
        title: title.into(),
        description: description.into(),
    })
    .collect()
}

pub fn footer_links() -> FooterLinks {
    FooterLinks {
        quick_links: vec![
            Link::new("About Us", "#"),
            Link::new("Contact", "#contact"),
            Link::new("Products", "#products"),
        ],
        support: vec![
            Link::new("FAQ", "#"),
            Link::new("Returns", "#"),
            Link::new("Shipping", "#"),
        ],
        social: vec![
            Link::new("Instagram", "#"),
            Link::new("Facebook", "#"),
            Link::new("Twitter", "#"),
        ],
    }
}
