//! Process-wide metadata handle.
//!
//! The active record is installed once at start-up and then only read.
//! Readers that run before installation (or when nothing is installed) see
//! the built-in [`SEO_CONFIG`].
//!
//! # Usage
//!
//! ```ignore
//! use crate::config::{init_metadata, metadata};
//!
//! init_metadata(loaded);
//! let head = render_head(metadata())?;
//! ```

use super::{SEO_CONFIG, SiteMetadata};
use std::sync::OnceLock;

/// Installed record, set at most once.
static METADATA: OnceLock<SiteMetadata> = OnceLock::new();

/// Fallback with a `'static` address for readers.
static BUILTIN: SiteMetadata = SEO_CONFIG;

/// Install the active record.
///
/// Returns `false` if a record was already installed; the first one stays.
pub fn init_metadata(meta: SiteMetadata) -> bool {
    METADATA.set(meta).is_ok()
}

/// Get the active record. Lock-free after initialization.
#[inline]
pub fn metadata() -> &'static SiteMetadata {
    METADATA.get().unwrap_or(&BUILTIN)
}
