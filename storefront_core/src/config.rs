//! Content file support.
//!
//! Loads optional `.storefront/content.toml` from the site root. Sections
//! and fields missing from the file keep the built-in catalog values, so a
//! file that only lists `[[products]]` still renders a complete page.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::catalog;
use crate::error::{ConfigError, ContentError};
use crate::types::StoreContent;

/// Directory (under the site root) holding the content file.
pub const CONTENT_DIR: &str = ".storefront";
/// Content file name inside [`CONTENT_DIR`].
pub const CONTENT_FILE: &str = "content.toml";

impl StoreContent {
    /// Parse and validate content from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let content: StoreContent = toml::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a specific path. Every failure is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded content file");
        Self::from_toml_str(&text)
    }

    /// Load `.storefront/content.toml` under `root`.
    /// Returns the built-in catalog if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONTENT_DIR).join(CONTENT_FILE);
        if !path.exists() {
            return catalog::shahidaana();
        }

        match Self::load_from_path(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to built-in catalog");
                catalog::shahidaana()
            }
        }
    }

    /// Check that every record can be rendered.
    ///
    /// Category and product ids key the rendered lists, so they must be
    /// unique within their list. Slides carry no id and may repeat.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::EmptyBrandName);
        }
        if self.hero.interval_ms == 0 {
            return Err(ContentError::ZeroInterval);
        }
        if let Some(index) = self
            .hero
            .slides
            .iter()
            .position(|slide| slide.source.trim().is_empty())
        {
            return Err(ContentError::EmptySlideSource { index });
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            check_record("category", category.id, &category.name, &category.image)?;
            if !seen.insert(category.id) {
                return Err(ContentError::DuplicateId {
                    kind: "category",
                    id: category.id,
                });
            }
        }

        seen.clear();
        for product in &self.products {
            check_record("product", product.id, &product.name, &product.image)?;
            if product.price.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    kind: "product",
                    id: product.id,
                    field: "price",
                });
            }
            if !seen.insert(product.id) {
                return Err(ContentError::DuplicateId {
                    kind: "product",
                    id: product.id,
                });
            }
        }

        Ok(())
    }
}

fn check_record(kind: &'static str, id: u32, name: &str, image: &str) -> Result<(), ContentError> {
    if name.trim().is_empty() {
        return Err(ContentError::EmptyField {
            kind,
            id,
            field: "name",
        });
    }
    if image.trim().is_empty() {
        return Err(ContentError::EmptyField {
            kind,
            id,
            field: "image",
        });
    }
    Ok(())
}
