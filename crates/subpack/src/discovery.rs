//! Module discovery: scan the input directory for source modules.
//!
//! A module is a `.js` or `.ts` file directly under `<cwd>/<input_dir>`,
//! excluding `index.js`/`index.ts`, identified by its base name without the
//! extension. Results follow directory iteration order; callers must not
//! depend on any particular ordering.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use tokio::fs;

use crate::error::{Error, Result};

/// Extensions that qualify a file as a source module (case-sensitive).
const SOURCE_PATTERNS: [&str; 2] = ["*.js", "*.ts"];

/// Entry-point files never exposed as proxies.
const INDEX_NAMES: [&str; 2] = ["index.js", "index.ts"];

/// Discover module names under `<cwd>/<input_dir>`.
///
/// A `foo.js`/`foo.ts` pair collapses to a single `foo` entry, keeping
/// per-module target paths disjoint for the concurrent phase.
pub(crate) async fn discover_modules(cwd: &Path, input_dir: &str) -> Result<Vec<String>> {
    let matcher = source_matcher()?;
    let dir = cwd.join(input_dir);

    let mut entries = fs::read_dir(&dir).await.map_err(|e| Error::io(&dir, e))?;
    let mut modules: Vec<String> = Vec::new();

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io(&dir, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        if INDEX_NAMES.contains(&file_name) {
            tracing::debug!(file = file_name, "Skipping entry-point file");
            continue;
        }
        if !matcher.is_match(file_name) {
            continue;
        }

        let Some(module) = file_name
            .strip_suffix(".js")
            .or_else(|| file_name.strip_suffix(".ts"))
        else {
            continue;
        };

        if !modules.iter().any(|m| m == module) {
            tracing::debug!(module, "Discovered source module");
            modules.push(module.to_string());
        }
    }

    Ok(modules)
}

fn source_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in SOURCE_PATTERNS {
        builder.add(Glob::new(pattern).map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            source: e,
        })?);
    }
    builder.build().map_err(|e| Error::Pattern {
        pattern: SOURCE_PATTERNS.join(","),
        source: e,
    })
}
