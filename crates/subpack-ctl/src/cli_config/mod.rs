//! CLI configuration for default directories.
//!
//! Lets a project pin its layout in `.subpack.toml` instead of repeating
//! flags on every invocation. Flags always win over the config file.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use serde::Deserialize;

/// Defaults read from `.subpack.toml`, layered beneath CLI flags.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Subdirectory holding the source modules.
    pub input_dir: Option<String>,

    /// Output directory the generated `main` fields point into.
    pub cjs_dir: Option<String>,

    /// Output directory the generated `module` fields point into.
    pub es_dir: Option<String>,

    /// Output directory for type declarations.
    pub types_dir: Option<String>,
}
