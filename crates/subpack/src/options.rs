//! Option resolution: caller-supplied partial options merged over defaults.
//!
//! Resolution order (later layers win): built-in base defaults → the
//! operation's additional defaults → caller-supplied values. `cwd` is always
//! resolved to an absolute path against the process working directory at call
//! time, even when the caller already supplied an absolute path.

use std::path::PathBuf;

use crate::error::{Error, Result};

pub(crate) const DEFAULT_INPUT_DIR: &str = "src";
pub(crate) const DEFAULT_CJS_DIR: &str = "lib";
pub(crate) const DEFAULT_ES_DIR: &str = "es";

/// Caller-supplied partial configuration for [`generate`](crate::generate)
/// and [`clean`](crate::clean).
///
/// Any unset field falls back to its default; `types_dir` has no default and
/// stays unset unless given.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Package root directory. Default: the process working directory.
    pub cwd: Option<PathBuf>,

    /// Subdirectory of `cwd` holding the source modules. Default: `"src"`.
    pub input_dir: Option<String>,

    /// Output directory the generated `main` fields point into. Default: `"lib"`.
    pub cjs_dir: Option<String>,

    /// Output directory the generated `module` fields point into. Default: `"es"`.
    pub es_dir: Option<String>,

    /// Output directory for type declarations. When set, every descriptor
    /// gets a `types` field pointing into it, whether or not the file exists.
    pub types_dir: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the fields every operation needs.
    pub(crate) fn into_base(self) -> Result<BaseOptions> {
        let cwd = resolve_cwd(self.cwd)?;
        Ok(BaseOptions {
            cwd,
            input_dir: self
                .input_dir
                .unwrap_or_else(|| DEFAULT_INPUT_DIR.to_string()),
        })
    }

    /// Resolve for generate, which also needs the output targets.
    pub(crate) fn into_generate(mut self) -> Result<GenerateOptions> {
        let cjs_dir = self
            .cjs_dir
            .take()
            .unwrap_or_else(|| DEFAULT_CJS_DIR.to_string());
        let es_dir = self
            .es_dir
            .take()
            .unwrap_or_else(|| DEFAULT_ES_DIR.to_string());
        let types_dir = self.types_dir.take();
        Ok(GenerateOptions {
            base: self.into_base()?,
            cjs_dir,
            es_dir,
            types_dir,
        })
    }
}

/// Resolved options common to every operation.
#[derive(Debug, Clone)]
pub(crate) struct BaseOptions {
    pub cwd: PathBuf,
    pub input_dir: String,
}

/// Resolved options for generate.
#[derive(Debug, Clone)]
pub(crate) struct GenerateOptions {
    pub base: BaseOptions,
    pub cjs_dir: String,
    pub es_dir: String,
    pub types_dir: Option<String>,
}

/// Absolutize `cwd` against the process working directory.
///
/// Joining an absolute path replaces the prefix entirely, so an absolute
/// caller value passes through unchanged.
fn resolve_cwd(cwd: Option<PathBuf>) -> Result<PathBuf> {
    let process_cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    Ok(match cwd {
        Some(dir) => process_cwd.join(dir),
        None => process_cwd,
    })
}
