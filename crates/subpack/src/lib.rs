//! Proxy package generation for npm subpath imports.
//!
//! An npm package built into `lib/` (CommonJS) and `es/` (ES modules) can let
//! consumers write `require("pkg/foo")` by shipping a tiny `foo/package.json`
//! at its root pointing at the built artifacts. This crate discovers the
//! source modules, generates those proxy directories, and cleans them up
//! again:
//!
//! ```ignore
//! let created = subpack::generate(subpack::Options::default()).await?;
//! let removed = subpack::clean(subpack::Options::default()).await?;
//! ```
//!
//! Both operations discover modules as the `.js`/`.ts` files directly under
//! the input directory (default `src/`, excluding `index.*`), fan the
//! per-module filesystem work out concurrently, and return the processed
//! module names in discovery order.

mod clean;
mod descriptor;
mod discovery;
mod error;
mod generate;
mod manifest;
mod options;

pub use clean::clean;
pub use error::{Error, Result};
pub use generate::generate;
pub use options::Options;
