//! Inline SVG icons for the storefront.
//!
//! All paths are drawn on a 256x256 grid and filled with `currentColor`.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_STAR size="14" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Five-point star (ratings)
pub const ICON_STAR: &str =
    "M128,24L158,98L238,104L177,156L196,234L128,192L60,234L79,156L18,104L98,98Z";

/// Plus sign (add-to-pack button)
pub const ICON_PLUS: &str = "M116,40h24v76h76v24h-76v76h-24v-76H40v-24h76Z";

/// Check mark
pub const ICON_CHECK: &str = "M100,196L36,132L56,112L100,156L200,56L220,76Z";

/// Shield outline (quality / secure packaging)
pub const ICON_SHIELD: &str = "M128,20L220,54V126C220,184,180,218,128,236C76,218,36,184,36,126V54Z";

/// Lightning bolt (fast dispatch)
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Diamond (farm sourced / premium)
pub const ICON_DIAMOND: &str = "M128,16L240,128L128,240L16,128Z";

/// Icons used for trust badges, in badge order; wraps for longer lists.
pub const TRUST_ICONS: [&str; 4] = [ICON_DIAMOND, ICON_CHECK, ICON_SHIELD, ICON_LIGHTNING];
