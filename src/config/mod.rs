//! Site SEO metadata.
//!
//! The record is a compile-time constant ([`SEO_CONFIG`]). A TOML file may
//! replace individual values at start-up; every omitted key keeps its
//! built-in value.
//!
//! # Sections
//!
//! | Section       | Purpose                                       |
//! |---------------|-----------------------------------------------|
//! | top level     | Title, description, keywords, attribution     |
//! | `[opengraph]` | `og:title`, `og:type`, `og:image`             |
//! | `[twitter]`   | Twitter card tags (empty unless set)          |
//!
//! # Example
//!
//! ```toml
//! title = "Auditrol"
//! site_name = "auditrol.com"
//!
//! [opengraph]
//! type = "website"
//!
//! [twitter]
//! card = "summary_large_image"
//! ```

pub mod defaults;
mod error;
mod handle;
mod opengraph;
mod twitter;

pub use error::ConfigError;
pub use handle::{init_metadata, metadata};
pub use opengraph::OpenGraph;
pub use twitter::TwitterCard;

use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fs, path::Path};

// ============================================================================
// Built-in Record
// ============================================================================

/// The site's SEO metadata as published.
pub const SEO_CONFIG: SiteMetadata = SiteMetadata {
    title: Cow::Borrowed(defaults::site::TITLE),
    description: Cow::Borrowed(defaults::site::DESCRIPTION),
    keywords: Cow::Borrowed(defaults::site::KEYWORDS),
    opengraph: OpenGraph::BUILTIN,
    twitter: TwitterCard::EMPTY,
    author: Cow::Borrowed(defaults::site::AUTHOR),
    owner: Cow::Borrowed(defaults::site::OWNER),
    site_name: Cow::Borrowed(defaults::site::SITE_NAME),
    public_url: Cow::Borrowed(defaults::site::PUBLIC_URL),
    site_url: Cow::Borrowed(defaults::site::SITE_URL),
    social_image: Cow::Borrowed(defaults::site::SOCIAL_IMAGE),
};

// ============================================================================
// Record Type
// ============================================================================

/// SEO metadata read by page-rendering code.
///
/// Fields are public and never mutated after start-up. `Default` yields
/// [`SEO_CONFIG`].
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteMetadata {
    /// Human-readable site name.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: Cow<'static, str>,

    /// Marketing summary for the `description` meta tag.
    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: Cow<'static, str>,

    /// Comma-separated keyword list. Not split or checked.
    #[serde(default = "defaults::site::keywords")]
    #[educe(Default = defaults::site::keywords())]
    pub keywords: Cow<'static, str>,

    #[serde(default)]
    pub opengraph: OpenGraph,

    #[serde(default)]
    pub twitter: TwitterCard,

    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: Cow<'static, str>,

    #[serde(default = "defaults::site::owner")]
    #[educe(Default = defaults::site::owner())]
    pub owner: Cow<'static, str>,

    /// Display name, emitted as `og:site_name`.
    #[serde(default = "defaults::site::site_name")]
    #[educe(Default = defaults::site::site_name())]
    pub site_name: Cow<'static, str>,

    /// Canonical public URL, emitted as `og:url`.
    #[serde(default = "defaults::site::public_url")]
    #[educe(Default = defaults::site::public_url())]
    pub public_url: Cow<'static, str>,

    /// Canonical site URL, emitted as `<link rel="canonical">`.
    #[serde(default = "defaults::site::site_url")]
    #[educe(Default = defaults::site::site_url())]
    pub site_url: Cow<'static, str>,

    /// Banner image path for social previews.
    #[serde(default = "defaults::site::social_image")]
    #[educe(Default = defaults::site::social_image())]
    pub social_image: Cow<'static, str>,
}

impl SiteMetadata {
    /// Every name accepted by [`SiteMetadata::get`], in declaration order.
    pub const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "keywords",
        "opengraph.title",
        "opengraph.type",
        "opengraph.image",
        "twitter.card",
        "twitter.site",
        "twitter.creator",
        "author",
        "owner",
        "site_name",
        "public_url",
        "site_url",
        "social_image",
    ];

    /// Parse metadata from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let meta: SiteMetadata = toml::from_str(content)?;
        Ok(meta)
    }

    /// Load metadata from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Read a field by name. Nested fields use dotted names (`opengraph.type`).
    ///
    /// Returns `Ok(None)` for a twitter field that is not set.
    pub fn get(&self, name: &str) -> Result<Option<&str>, ConfigError> {
        let value = match name {
            "title" => &self.title,
            "description" => &self.description,
            "keywords" => &self.keywords,
            "opengraph.title" => &self.opengraph.title,
            "opengraph.type" => &self.opengraph.kind,
            "opengraph.image" => &self.opengraph.image,
            "twitter.card" => return Ok(self.twitter.card.as_deref()),
            "twitter.site" => return Ok(self.twitter.site.as_deref()),
            "twitter.creator" => return Ok(self.twitter.creator.as_deref()),
            "author" => &self.author,
            "owner" => &self.owner,
            "site_name" => &self.site_name,
            "public_url" => &self.public_url,
            "site_url" => &self.site_url,
            "social_image" => &self.social_image,
            _ => return Err(ConfigError::UnknownField(name.to_owned())),
        };
        Ok(Some(value.as_ref()))
    }
}

// ============================================================================
// Tests
// ============================================================================
