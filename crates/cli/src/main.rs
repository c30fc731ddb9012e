//! Vitrine CLI - Offline catalog filtering tools.
//!
//! # Usage
//!
//! ```bash
//! # Filter a catalog export the way the listing page would
//! vitrine filter --catalog data/catalog.json --category men --size M --sort price-asc
//!
//! # Show the facet vocabulary of a catalog export
//! vitrine facets --catalog data/catalog.json
//! ```
//!
//! # Commands
//!
//! - `filter` - Apply facet filters and a sort key, print the listing as JSON
//! - `facets` - Print distinct categories, subcategories, sizes, colors and
//!   the global price range as JSON
//!
//! `--catalog` defaults to `VITRINE_CATALOG_PATH` (also read from `.env`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vitrine_core::SortKey;

mod commands;

use commands::filter::FilterOptions;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort a catalog export
    Filter {
        /// Catalog JSON export (newest product first)
        #[arg(long, env = "VITRINE_CATALOG_PATH")]
        catalog: PathBuf,

        /// Keep products in this category (repeatable)
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,

        /// Keep products in this subcategory (repeatable)
        #[arg(long = "subcategory")]
        subcategories: Vec<String>,

        /// Keep products offered in this size (repeatable)
        #[arg(short = 's', long = "size")]
        sizes: Vec<String>,

        /// Keep products offered in this color (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Lower price bound; unparsable input means no bound
        #[arg(long)]
        min_price: Option<String>,

        /// Upper price bound; unparsable input means no bound
        #[arg(long)]
        max_price: Option<String>,

        /// Only products with stock left
        #[arg(long)]
        in_stock: bool,

        /// Only discounted products
        #[arg(long)]
        on_sale: bool,

        /// Sort key (`featured`, `newest`, `price-asc`, `price-desc`, `rating`)
        #[arg(long, default_value_t = SortKey::Featured)]
        sort: SortKey,
    },
    /// Print the facet vocabulary of a catalog export
    Facets {
        /// Catalog JSON export
        #[arg(long, env = "VITRINE_CATALOG_PATH")]
        catalog: PathBuf,
    },
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Filter {
            catalog,
            categories,
            subcategories,
            sizes,
            colors,
            min_price,
            max_price,
            in_stock,
            on_sale,
            sort,
        } => {
            let options = FilterOptions {
                catalog,
                categories,
                subcategories,
                sizes,
                colors,
                min_price,
                max_price,
                in_stock,
                on_sale,
                sort,
            };
            commands::filter::run(&options, &mut stdout)?;
        }
        Commands::Facets { catalog } => commands::facets::run(&catalog, &mut stdout)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_args() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "filter",
            "--catalog",
            "catalog.json",
            "-c",
            "men",
            "-s",
            "M",
            "-s",
            "L",
            "--in-stock",
            "--sort",
            "price-desc",
        ])
        .unwrap_or_else(|e| panic!("{e}"));

        let Commands::Filter {
            categories,
            sizes,
            in_stock,
            sort,
            ..
        } = cli.command
        else {
            panic!("expected filter command");
        };
        assert_eq!(categories, ["men"]);
        assert_eq!(sizes, ["M", "L"]);
        assert!(in_stock);
        assert_eq!(sort, SortKey::PriceDesc);
    }

    #[test]
    fn test_rejects_unknown_sort() {
        let result = Cli::try_parse_from([
            "vitrine",
            "filter",
            "--catalog",
            "catalog.json",
            "--sort",
            "cheapest",
        ]);
        assert!(result.is_err());
    }
}
