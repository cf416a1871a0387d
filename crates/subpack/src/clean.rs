//! Proxy package cleanup.

use std::io::ErrorKind;
use std::path::Path;

use futures::future::join_all;
use tokio::fs;

use crate::discovery;
use crate::error::{Error, Result};
use crate::options::Options;

/// Remove the proxy package directory of every discovered source module.
///
/// A module without a proxy directory is not an error. All removals run
/// concurrently with the same failure semantics as
/// [`generate`](crate::generate): every launched removal runs to completion
/// and the first observed failure becomes the call's error.
///
/// Returns the discovered module names in discovery order, whether or not a
/// directory existed for them.
pub async fn clean(options: Options) -> Result<Vec<String>> {
    let options = options.into_base()?;
    let modules = discovery::discover_modules(&options.cwd, &options.input_dir).await?;

    let removals = modules.iter().map(|module| remove_proxy(&options.cwd, module));
    let results = join_all(removals).await;
    for result in results {
        result?;
    }

    Ok(modules)
}

async fn remove_proxy(cwd: &Path, module: &str) -> Result<()> {
    let proxy_dir = cwd.join(module);

    match fs::remove_dir_all(&proxy_dir).await {
        Ok(()) => {
            tracing::debug!(module, path = %proxy_dir.display(), "Removed proxy package");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(module, "No proxy directory to remove");
            Ok(())
        }
        Err(e) => Err(Error::io(&proxy_dir, e)),
    }
}
