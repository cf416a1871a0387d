//! Package manifest (`package.json`) name lookup.

use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::{Error, Result};

const MANIFEST_FILENAME: &str = "package.json";

/// The slice of `package.json` this tool cares about.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: Option<String>,
}

/// Read the `name` field from `<cwd>/package.json`.
///
/// The operations call this once per invocation, before the concurrent
/// per-module phase, so a bad manifest fails the whole call up front.
pub(crate) async fn package_name(cwd: &Path) -> Result<String> {
    let path = cwd.join(MANIFEST_FILENAME);

    let contents = fs::read_to_string(&path)
        .await
        .map_err(|e| Error::ManifestRead {
            path: path.clone(),
            source: e,
        })?;

    let manifest: PackageManifest =
        serde_json::from_str(&contents).map_err(|e| Error::ManifestParse {
            path: path.clone(),
            source: e,
        })?;

    manifest.name.ok_or(Error::ManifestName { path })
}
