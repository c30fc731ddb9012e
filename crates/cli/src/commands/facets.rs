//! Print the facet vocabulary of a catalog export.
//!
//! # Usage
//!
//! ```bash
//! vitrine facets --catalog data/catalog.json
//! ```

use std::io::Write;
use std::path::Path;

use vitrine_core::FacetOptions;

use super::{CommandError, load_catalog, write_json};

/// Load the catalog and write its facet options as JSON to `out`.
///
/// # Errors
///
/// Returns `CommandError` if the catalog cannot be loaded or the output
/// cannot be written.
pub fn run(catalog: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    let products = load_catalog(catalog)?;
    let facets = FacetOptions::from_catalog(&products);

    tracing::info!(
        categories = facets.categories.len(),
        sizes = facets.sizes.len(),
        colors = facets.colors.len(),
        price_range = %facets.price_range,
        "Facets derived"
    );

    write_json(out, &facets)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_facets() {
        let path = std::env::temp_dir().join(format!(
            "vitrine-cli-facets-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[
                {"id":"a","name":"Tee","price":20,"category":"men","colors":["black"]},
                {"id":"b","name":"Skirt","price":35,"category":"women","subcategory":"skirts"}
            ]"#,
        )
        .unwrap();

        let mut out = Vec::new();
        run(&path, &mut out).unwrap();
        std::fs::remove_file(&path).unwrap();

        let facets: FacetOptions = serde_json::from_slice(&out).unwrap();
        assert_eq!(facets.categories, vec!["men", "women"]);
        assert_eq!(facets.subcategories, vec!["skirts"]);
        assert_eq!(facets.colors, vec!["black"]);
    }

    #[test]
    fn test_run_malformed_catalog() {
        let path = std::env::temp_dir().join(format!(
            "vitrine-cli-facets-bad-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json").unwrap();

        let err = run(&path, &mut Vec::new()).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, CommandError::Parse { .. }));
    }
}
