//! Subcommand implementations.

mod catalog;
mod preview;
mod render;

use anyhow::{Context, Result};
use storefront_core::StoreContent;
use tracing::debug;

use crate::cli::{Args, Command, ContentArgs};

pub use catalog::catalog;
pub use preview::preview;
pub use render::render;

/// Run the parsed command.
pub async fn dispatch(args: Args) -> Result<()> {
    match args.command {
        Command::Render {
            content,
            variant,
            out,
        } => render(&load_content(&content)?, variant, &out),
        Command::Catalog { content, json } => catalog(&load_content(&content)?, json),
        Command::Preview {
            content,
            ticks,
            interval_ms,
        } => preview(&load_content(&content)?, ticks, interval_ms).await,
    }
}

/// An explicit `--config` must load; otherwise the working directory's
/// content file is used when present.
fn load_content(args: &ContentArgs) -> Result<StoreContent> {
    match &args.config {
        Some(path) => StoreContent::load_from_path(path)
            .with_context(|| format!("failed to load content from {}", path.display())),
        None => {
            let root = std::env::current_dir().context("failed to resolve current directory")?;
            debug!(root = %root.display(), "loading content from working directory");
            Ok(StoreContent::load(&root))
        }
    }
}
