//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_core::PageVariant;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Render, inspect and preview the Shahidaana storefront")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Content source shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// Content file (TOML). Defaults to `.storefront/content.toml` in the
    /// current directory, then to the built-in catalog.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the landing page to static HTML
    Render {
        #[command(flatten)]
        content: ContentArgs,

        /// Page layout (classic, extended); overrides the content file
        #[arg(long)]
        variant: Option<PageVariant>,

        /// Output directory for index.html
        #[arg(long, value_name = "DIR", default_value = "dist")]
        out: PathBuf,
    },

    /// List categories and products
    Catalog {
        #[command(flatten)]
        content: ContentArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run the hero slider in the terminal and print each slide change
    Preview {
        #[command(flatten)]
        content: ContentArgs,

        /// Stop after this many slide changes
        #[arg(long, default_value_t = 3)]
        ticks: u32,

        /// Milliseconds between slides; defaults to the content's interval
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn variant_parses_from_flag() {
        let args = Args::try_parse_from(["storefront", "render", "--variant", "extended"])
            .expect("parse render");
        match args.command {
            Command::Render { variant, out, .. } => {
                assert_eq!(variant, Some(PageVariant::Extended));
                assert_eq!(out, PathBuf::from("dist"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(Args::try_parse_from(["storefront", "render", "--variant", "wide"]).is_err());
    }

    #[test]
    fn log_level_is_global() {
        let args = Args::try_parse_from(["storefront", "catalog", "--log-level", "debug"])
            .expect("parse catalog");
        assert_eq!(args.log_level, "debug");
    }
}
