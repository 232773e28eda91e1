use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use storefront_core::{PageVariant, StoreContent};
use storefront_page::render_page;
use tracing::info;

pub fn render(content: &StoreContent, variant: Option<PageVariant>, out: &Path) -> Result<()> {
    let mut content = content.clone();
    if let Some(variant) = variant {
        content.variant = variant;
    }

    let html = render_page(&content);

    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;
    let path = out.join("index.html");
    fs::write(&path, &html).with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = html.len(), variant = ?content.variant, "page rendered");
    println!("Page written to: {}", path.display());
    Ok(())
}
