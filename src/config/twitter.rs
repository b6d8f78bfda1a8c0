//! `[twitter]` section.
//!
//! Empty for the built-in site. The fields are the Twitter card tags a page
//! may opt into; each one is emitted only when set.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// `[twitter]` section - `twitter:*` tag values.
///
/// # Example
/// ```toml
/// [twitter]
/// card = "summary_large_image"
/// site = "@auditrol"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TwitterCard {
    /// `twitter:card`, e.g. `summary` or `summary_large_image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Cow<'static, str>>,

    /// `twitter:site`, the site's @handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<Cow<'static, str>>,

    /// `twitter:creator`, the author's @handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Cow<'static, str>>,
}

impl TwitterCard {
    /// No card tags; the built-in value.
    pub const EMPTY: Self = Self {
        card: None,
        site: None,
        creator: None,
    };

    /// True when no `twitter:*` field is set.
    pub fn is_empty(&self) -> bool {
        self.card.is_none() && self.site.is_none() && self.creator.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteMetadata;
    use super::*;

    #[test]
    fn test_twitter_empty_by_default() {
        assert!(TwitterCard::default().is_empty());
        assert!(TwitterCard::EMPTY.is_empty());
        assert_eq!(TwitterCard::default(), TwitterCard::EMPTY);
    }

    #[test]
    fn test_twitter_serializes_as_empty_object() {
        let value = serde_json::to_value(&TwitterCard::EMPTY).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_twitter_partial() {
        let config = r#"
            [twitter]
            card = "summary"
        "#;
        let meta = SiteMetadata::from_str(config).unwrap();

        assert!(!meta.twitter.is_empty());
        assert_eq!(meta.twitter.card.as_deref(), Some("summary"));
        assert_eq!(meta.twitter.site, None);
        assert_eq!(meta.twitter.creator, None);
    }

    #[test]
    fn test_twitter_unknown_field_rejection() {
        let config = r#"
            [twitter]
            handle = "@auditrol"
        "#;
        let result = SiteMetadata::from_str(config);

        assert!(result.is_err());
    }
}
