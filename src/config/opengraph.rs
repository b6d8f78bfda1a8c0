//! `[opengraph]` section.
//!
//! Site-wide Open Graph values used for rich link previews.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// `[opengraph]` section - `og:*` tag values.
///
/// # Example
/// ```toml
/// [opengraph]
/// title = "Auditrol"
/// type = "website"
/// image = "https://auditrol.com/static/og.png"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OpenGraph {
    /// `og:title`.
    #[serde(default = "defaults::opengraph::title")]
    #[educe(Default = defaults::opengraph::title())]
    pub title: Cow<'static, str>,

    /// `og:type`. Named `type` in every serialized form.
    #[serde(rename = "type", default = "defaults::opengraph::kind")]
    #[educe(Default = defaults::opengraph::kind())]
    pub kind: Cow<'static, str>,

    /// `og:image`, an absolute URL.
    #[serde(default = "defaults::opengraph::image")]
    #[educe(Default = defaults::opengraph::image())]
    pub image: Cow<'static, str>,
}

impl OpenGraph {
    /// Compile-time value built from [`defaults::opengraph`].
    pub const BUILTIN: Self = Self {
        title: Cow::Borrowed(defaults::opengraph::TITLE),
        kind: Cow::Borrowed(defaults::opengraph::TYPE),
        image: Cow::Borrowed(defaults::opengraph::IMAGE),
    };
}

#[cfg(test)]
mod tests {
    use super::super::SiteMetadata;
    use super::*;

    #[test]
    fn test_opengraph_builtin_matches_default() {
        assert_eq!(OpenGraph::default(), OpenGraph::BUILTIN);
    }

    #[test]
    fn test_opengraph_type_key() {
        let config = r#"
            [opengraph]
            type = "website"
        "#;
        let meta = SiteMetadata::from_str(config).unwrap();

        assert_eq!(meta.opengraph.kind, "website");
        assert_eq!(meta.opengraph.title, defaults::opengraph::TITLE);
        assert_eq!(meta.opengraph.image, defaults::opengraph::IMAGE);
    }

    #[test]
    fn test_opengraph_kind_is_not_a_key() {
        let config = r#"
            [opengraph]
            kind = "website"
        "#;
        let result = SiteMetadata::from_str(config);

        assert!(result.is_err());
    }

    #[test]
    fn test_opengraph_serializes_type() {
        let value = serde_json::to_value(&OpenGraph::BUILTIN).unwrap();

        assert_eq!(value["type"], "A type.");
        assert!(value.get("kind").is_none());
    }
}
