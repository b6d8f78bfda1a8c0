//! Built-in metadata values.
//!
//! Each field has a `const` holding the literal and a function returning it
//! as a `Cow`, which serde and educe use as the field default.

use std::borrow::Cow;

// ============================================================================
// Site-level Defaults
// ============================================================================

pub mod site {
    use super::Cow;

    pub const TITLE: &str = "Auditrol";
    pub const DESCRIPTION: &str = "Auditrol revolutionizes risk management with AI, helping financial institutions mitigate regulatory and data risks through automated testing and collaborative workflows.";
    pub const KEYWORDS: &str = "Auditrol, Risk management, AI, Financial institutions, Regulatory risks, Data risks, Automated testing, Collaborative workflows";
    pub const AUTHOR: &str = "Auditrol";
    pub const OWNER: &str = "Auditrol";
    // Leading space is present in the published data; kept as-is.
    pub const SITE_NAME: &str = " auditrol.com";
    pub const PUBLIC_URL: &str = "https://auditrol.com";
    pub const SITE_URL: &str = "https://auditrol.com";
    pub const SOCIAL_IMAGE: &str = "/static/auditrol_banner.png";

    pub fn title() -> Cow<'static, str> {
        Cow::Borrowed(TITLE)
    }

    pub fn description() -> Cow<'static, str> {
        Cow::Borrowed(DESCRIPTION)
    }

    pub fn keywords() -> Cow<'static, str> {
        Cow::Borrowed(KEYWORDS)
    }

    pub fn author() -> Cow<'static, str> {
        Cow::Borrowed(AUTHOR)
    }

    pub fn owner() -> Cow<'static, str> {
        Cow::Borrowed(OWNER)
    }

    pub fn site_name() -> Cow<'static, str> {
        Cow::Borrowed(SITE_NAME)
    }

    pub fn public_url() -> Cow<'static, str> {
        Cow::Borrowed(PUBLIC_URL)
    }

    pub fn site_url() -> Cow<'static, str> {
        Cow::Borrowed(SITE_URL)
    }

    pub fn social_image() -> Cow<'static, str> {
        Cow::Borrowed(SOCIAL_IMAGE)
    }
}

// ============================================================================
// [opengraph] Section Defaults
// ============================================================================

pub mod opengraph {
    use super::Cow;

    pub const TITLE: &str = "A Very Descriptive Title";
    pub const TYPE: &str = "A type.";
    pub const IMAGE: &str = "https://user-images.githubusercontent.com/5182256/131216951-8f74f425-f775-463d-a11b-0e01ad9fce8d.png";

    pub fn title() -> Cow<'static, str> {
        Cow::Borrowed(TITLE)
    }

    pub fn kind() -> Cow<'static, str> {
        Cow::Borrowed(TYPE)
    }

    pub fn image() -> Cow<'static, str> {
        Cow::Borrowed(IMAGE)
    }
}
