//! Proxy package generation.

use std::io::ErrorKind;

use futures::future::join_all;
use tokio::fs;

use crate::error::{Error, Result};
use crate::options::{GenerateOptions, Options};
use crate::{descriptor, discovery, manifest};

/// Generate one proxy package directory per discovered source module.
///
/// For each module this creates `<cwd>/<module>/` (an already-existing
/// directory is left as-is) and writes `<cwd>/<module>/package.json`,
/// overwriting any previous descriptor. All per-module writes run
/// concurrently; every launched write runs to completion and the first
/// observed failure becomes the call's error. Completed writes are not rolled
/// back on failure.
///
/// Returns the processed module names in discovery order.
pub async fn generate(options: Options) -> Result<Vec<String>> {
    let options = options.into_generate()?;
    let modules = discovery::discover_modules(&options.base.cwd, &options.base.input_dir).await?;
    let pkg_name = manifest::package_name(&options.base.cwd).await?;

    let writes = modules
        .iter()
        .map(|module| write_proxy(&options, &pkg_name, module));
    let results = join_all(writes).await;
    for result in results {
        result?;
    }

    Ok(modules)
}

async fn write_proxy(options: &GenerateOptions, pkg_name: &str, module: &str) -> Result<()> {
    let proxy_dir = options.base.cwd.join(module);

    match fs::create_dir(&proxy_dir).await {
        Ok(()) => {}
        // Regenerating over an existing proxy is routine; anything else
        // (permissions, bad path) still propagates.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(module, "Proxy directory already exists, reusing");
        }
        Err(e) => return Err(Error::io(&proxy_dir, e)),
    }

    let contents = descriptor::render(options, pkg_name, module).await?;
    let descriptor_path = proxy_dir.join("package.json");
    fs::write(&descriptor_path, contents)
        .await
        .map_err(|e| Error::io(&descriptor_path, e))?;

    tracing::debug!(module, path = %descriptor_path.display(), "Wrote proxy package");
    Ok(())
}
