//! Render the built-in storefront to a file.
//!
//! Run with: `cargo run -p storefront-page --example basic_page`

use storefront_core::{catalog, PageVariant};
use storefront_page::render_page;

fn main() {
    let mut content = catalog::shahidaana();
    content.variant = PageVariant::Extended;

    let html = render_page(&content);

    let output_path = "storefront.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
