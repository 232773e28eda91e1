//! CSS styles for the storefront.
//!
//! Navy-and-gold theme: deep navy gradients for sections, a gold gradient
//! for accents and buttons, white product cards.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use storefront_page::styles::STOREFRONT_CSS;
//!
//! let my_css = ".product-card { border-radius: 4px; }";
//! let combined = format!("{}\n{}", STOREFRONT_CSS, my_css);
//! ```

/// Complete CSS for the page.
pub const STOREFRONT_CSS: &str = r#"
:root {
    --navy-deep: #050A1A;
    --navy: #0A1F3C;
    --navy-light: #1A3A52;
    --gold: #D4AF37;
    --gold-light: #F5D98C;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --container-max: 1280px;
    --gold-gradient: linear-gradient(to right, var(--gold), var(--gold-light));
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #fff;
    background: linear-gradient(to bottom, var(--navy-deep), var(--navy), var(--navy-deep));
    min-height: 100vh;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.gold-text {
    background: var(--gold-gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* Buttons */
.btn {
    display: inline-block;
    border-radius: 9999px;
    font-weight: 600;
    font-size: 14px;
    padding: 10px 32px;
    transition: all 300ms;
    cursor: pointer;
    border: none;
}

.btn-lg {
    font-size: 18px;
    font-weight: 700;
    padding: 16px 40px;
}

.btn-gold {
    background: var(--gold-gradient);
    color: var(--navy);
}

.btn-gold:hover {
    box-shadow: 0 10px 30px rgba(212, 175, 55, 0.5);
    transform: scale(1.05);
}

.btn-outline {
    border: 2px solid var(--gold);
    color: #fff;
    background: transparent;
}

.btn-outline:hover {
    background: rgba(212, 175, 55, 0.1);
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    backdrop-filter: blur(24px);
    background: rgba(10, 31, 60, 0.8);
    border-bottom: 1px solid rgba(212, 175, 55, 0.2);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 20px;
    padding-bottom: 20px;
}

.header-brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.header-logo {
    width: 60px;
    height: 60px;
    filter: drop-shadow(0 4px 6px rgba(0, 0, 0, 0.4));
}

.header-wordmark {
    font-size: 24px;
    font-weight: 700;
    letter-spacing: 0.05em;
}

.header-nav {
    display: flex;
    gap: 48px;
}

.header-link {
    font-size: 14px;
    font-weight: 500;
    transition: color 300ms;
}

.header-link:hover,
.footer-link:hover,
.category-link:hover {
    color: var(--gold);
}

.header-menu {
    display: none;
    background: none;
    border: none;
    color: var(--gold);
    font-size: 24px;
    cursor: pointer;
}

/* Hero */
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 80px 0;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 64px;
    align-items: center;
    width: 100%;
}

.hero-title {
    font-size: 72px;
    font-weight: 900;
    line-height: 1.15;
    margin: 0 0 32px;
}

.hero-line {
    display: block;
}

.hero-description {
    color: var(--gray-300);
    font-size: 18px;
    line-height: 1.7;
    max-width: 28rem;
    margin: 0 0 40px;
}

.hero-actions {
    display: flex;
    gap: 16px;
    margin-bottom: 48px;
}

.hero-visual {
    position: relative;
}

.hero-glow {
    position: absolute;
    inset: 0;
    border-radius: 24px;
    filter: blur(64px);
    background: linear-gradient(135deg, rgba(212, 175, 55, 0.2), transparent, rgba(212, 175, 55, 0.1));
}

.hero-frame {
    position: relative;
    height: 450px;
    padding: 4px;
    border-radius: 24px;
    background: linear-gradient(135deg, var(--navy-light), var(--navy));
    box-shadow: 0 25px 50px rgba(212, 175, 55, 0.3);
}

.hero-frame-inner {
    position: relative;
    width: 100%;
    height: 100%;
    overflow: hidden;
    border-radius: 24px;
    background: linear-gradient(135deg, var(--navy-deep), var(--navy));
}

/* Slider */
.slider {
    position: relative;
    width: 100%;
    height: 100%;
}

.slider-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    border-radius: 24px;
    transition: all 700ms ease-in-out;
}

.slider-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(5, 10, 26, 0.6), transparent);
}

.slider-dots {
    position: absolute;
    right: 16px;
    bottom: 16px;
    display: flex;
    gap: 8px;
}

.slider-dot {
    width: 8px;
    height: 8px;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.5);
    transition: all 300ms;
}

.slider-dot.active {
    background: var(--gold);
}

.featured-card {
    position: absolute;
    bottom: 24px;
    left: 50%;
    transform: translateX(-50%);
    padding: 16px 24px;
    border-radius: 12px;
    background: rgba(255, 255, 255, 0.95);
    color: var(--navy);
    text-align: center;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
}

.featured-name {
    margin: 0;
    font-size: 14px;
    font-weight: 700;
}

.featured-meta {
    margin: 4px 0 0;
    font-size: 12px;
    color: var(--gray-600);
}

.featured-price {
    color: var(--gold);
    font-weight: 700;
}

/* Stats bar */
.stats-bar {
    padding: 48px 0;
    border-top: 1px solid rgba(212, 175, 55, 0.2);
    border-bottom: 1px solid rgba(212, 175, 55, 0.2);
    background: rgba(10, 31, 60, 0.6);
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 32px;
    text-align: center;
}

.stat-value {
    margin: 0;
    font-size: 40px;
    font-weight: 900;
}

.stat-label {
    margin: 4px 0 0;
    color: var(--gray-400);
    font-size: 14px;
}

/* Sections */
.categories,
.products,
.trust {
    padding: 96px 0;
}

.categories {
    background: linear-gradient(to bottom, var(--navy), var(--navy-deep), var(--navy-deep));
}

.products {
    background: linear-gradient(to bottom, var(--navy-deep), var(--navy), var(--navy-deep));
}

.section-heading {
    text-align: center;
    margin-bottom: 80px;
}

.section-title {
    font-size: 48px;
    font-weight: 900;
    margin: 0 0 16px;
}

.section-description {
    color: var(--gray-400);
    font-size: 18px;
    max-width: 42rem;
    margin: 0 auto;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 32px;
}

.card-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 500ms;
}

/* Category cards */
.category-card {
    overflow: hidden;
    border-radius: 16px;
    border: 1px solid rgba(212, 175, 55, 0.2);
    background: linear-gradient(135deg, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0.1));
    transition: all 500ms;
    cursor: pointer;
}

.category-card:hover {
    border-color: rgba(212, 175, 55, 0.6);
    transform: translateY(-12px);
}

.category-card:hover .card-image,
.product-card:hover .card-image {
    transform: scale(1.1);
}

.category-media {
    position: relative;
    height: 288px;
    overflow: hidden;
}

.category-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, var(--navy), transparent);
}

.category-body {
    padding: 24px;
}

.category-name {
    margin: 0;
    font-size: 24px;
    font-weight: 700;
}

.category-card:hover .category-name {
    color: var(--gold);
}

.category-tag {
    margin: 8px 0 0;
    color: var(--gray-400);
    font-size: 14px;
}

.category-link {
    display: inline-block;
    margin-top: 16px;
    color: var(--gold);
    font-size: 14px;
    font-weight: 600;
}

/* Product cards */
.product-card {
    overflow: hidden;
    border-radius: 16px;
    background: #fff;
    color: var(--navy);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
    transition: all 500ms;
}

.product-card:hover {
    transform: translateY(-8px);
}

.product-media {
    position: relative;
    height: 224px;
    overflow: hidden;
    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
}

.product-badge {
    position: absolute;
    top: 16px;
    right: 16px;
    padding: 8px 16px;
    border-radius: 9999px;
    background: var(--gold-gradient);
    color: var(--navy);
    font-size: 12px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.product-body {
    padding: 24px;
}

.product-name {
    margin: 0 0 8px;
    font-size: 18px;
    font-weight: 700;
}

.product-card:hover .product-name {
    color: var(--gold);
}

.product-pack {
    margin: 0 0 16px;
    color: var(--gray-600);
    font-size: 14px;
}

.product-rating {
    display: flex;
    align-items: center;
    gap: 4px;
    margin-bottom: 16px;
}

.stars {
    display: inline-flex;
    color: #facc15;
}

.review-count {
    color: var(--gray-500);
    font-size: 12px;
}

.product-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 16px;
    border-top: 1px solid #e5e7eb;
}

.product-price {
    margin: 0;
    color: var(--gold);
    font-size: 30px;
    font-weight: 700;
}

.product-unit {
    margin: 4px 0 0;
    color: var(--gray-500);
    font-size: 12px;
}

.product-add {
    display: flex;
    padding: 12px;
    border: none;
    border-radius: 9999px;
    color: #fff;
    background: linear-gradient(to right, var(--navy), var(--navy-light));
    cursor: pointer;
    transition: all 300ms;
}

.product-add:hover {
    background: var(--gold-gradient);
    color: var(--navy);
    transform: scale(1.1);
}

/* Trust section */
.trust-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 32px;
}

.trust-badge {
    padding: 32px 24px;
    border-radius: 16px;
    border: 1px solid rgba(212, 175, 55, 0.2);
    background: rgba(255, 255, 255, 0.04);
    text-align: center;
}

.trust-icon {
    display: inline-flex;
    color: var(--gold);
    margin-bottom: 16px;
}

.trust-title {
    margin: 0 0 8px;
    font-size: 18px;
    font-weight: 700;
}

.trust-description {
    margin: 0;
    color: var(--gray-400);
    font-size: 14px;
}

/* Footer */
.site-footer {
    margin-top: 80px;
    padding: 64px 0;
    border-top: 1px solid rgba(212, 175, 55, 0.2);
    background: var(--navy-deep);
    color: var(--gray-400);
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 48px;
    margin-bottom: 48px;
}

.footer-brand {
    margin: 0 0 16px;
    color: var(--gold);
    font-size: 18px;
    font-weight: 700;
}

.footer-tagline {
    font-size: 14px;
    line-height: 1.7;
}

.footer-heading {
    margin: 0 0 16px;
    color: #fff;
    font-size: 12px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.footer-links {
    list-style: none;
    margin: 0;
    padding: 0;
    display: grid;
    gap: 12px;
    font-size: 14px;
}

.footer-label {
    color: var(--gold);
    font-weight: 600;
}

.footer-bottom {
    padding-top: 32px;
    border-top: 1px solid rgba(212, 175, 55, 0.2);
    text-align: center;
    font-size: 14px;
}

/* Narrow screens */
@media (max-width: 768px) {
    .header-nav {
        display: none;
    }

    .header-nav.open {
        display: flex;
        flex-direction: column;
        gap: 16px;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 24px;
        background: var(--navy);
    }

    .header-cta,
    .header-wordmark {
        display: none;
    }

    .header-menu {
        display: block;
    }

    .hero-grid,
    .card-grid,
    .stats-grid,
    .trust-grid,
    .footer-grid {
        grid-template-columns: 1fr;
    }

    .hero-title {
        font-size: 48px;
    }

    .hero-actions {
        flex-direction: column;
    }

    .hero-frame {
        height: 384px;
    }
}
"#;

/// Content Security Policy for the static page (images may come from any
/// https origin, no scripts).
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'none'; font-src 'self' data:;";
