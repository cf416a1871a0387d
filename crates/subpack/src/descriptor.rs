//! Proxy package descriptor construction.
//!
//! Builds the `package.json` payload written into each proxy directory. All
//! artifact paths are relative to the proxy directory (one level below the
//! package root), so they start with `..`.

use std::path::Path;

use serde::Serialize;
use tokio::fs;

use crate::error::Result;
use crate::options::GenerateOptions;

/// The descriptor written into each proxy directory.
///
/// Field order here is the field order in the emitted JSON.
#[derive(Debug, Serialize)]
pub(crate) struct ProxyDescriptor {
    /// Subpath package name, `<package-name>/<module-name>`.
    pub name: String,
    /// Proxies are never published on their own.
    pub private: bool,
    /// Relative path to the CommonJS build of the module.
    pub main: String,
    /// Relative path to the ES module build of the module.
    pub module: String,
    /// Relative path to the module's type declarations, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
}

/// Render the descriptor for one module: 2-space-indented JSON plus a
/// trailing newline, byte-identical across repeated runs.
pub(crate) async fn render(
    options: &GenerateOptions,
    pkg_name: &str,
    module: &str,
) -> Result<String> {
    let main = Path::new("..")
        .join(&options.cjs_dir)
        .join(format!("{module}.js"));
    let es_module = Path::new("..")
        .join(&options.es_dir)
        .join(format!("{module}.js"));

    let types = match &options.types_dir {
        // A configured types dir always wins, whether or not the file exists.
        Some(types_dir) => Some(Path::new("..").join(types_dir).join(format!("{module}.d.ts"))),
        None => {
            let declaration = options.base.cwd.join(format!("{module}.d.ts"));
            if is_file(&declaration).await {
                Some(Path::new("..").join(format!("{module}.d.ts")))
            } else {
                None
            }
        }
    };

    let descriptor = ProxyDescriptor {
        name: format!("{pkg_name}/{module}"),
        private: true,
        main: main.display().to_string(),
        module: es_module.display().to_string(),
        types: types.map(|p| p.display().to_string()),
    };

    let mut text = serde_json::to_string_pretty(&descriptor)?;
    text.push('\n');
    Ok(text)
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
