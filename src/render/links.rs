//! Safe-link policy for anchors bound to authored link fields.

use serde::Serialize;
use url::Url;

use crate::dom::Element;

const PLACEHOLDER: &str = "#";
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];
const DISABLED_CLASS: &str = "is-disabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledReason {
    Missing,
    Malformed,
    UnsafeScheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Disabled(DisabledReason),
    /// `http`/`https`: opens in a new browsing context.
    External(Url),
    /// `mailto:`/`tel:`: navigates in place.
    Internal(Url),
}

impl LinkTarget {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled(_))
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Disabled(_) => None,
            Self::External(url) | Self::Internal(url) => Some(url.as_str()),
        }
    }

    pub fn disabled_reason(&self) -> Option<DisabledReason> {
        match self {
            Self::Disabled(reason) => Some(*reason),
            _ => None,
        }
    }
}

pub fn classify(raw: Option<&str>) -> LinkTarget {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty() && *raw != PLACEHOLDER)
    else {
        return LinkTarget::Disabled(DisabledReason::Missing);
    };

    let Ok(url) = Url::parse(raw) else {
        return LinkTarget::Disabled(DisabledReason::Malformed);
    };

    match url.scheme() {
        "http" | "https" => LinkTarget::External(url),
        scheme if ALLOWED_SCHEMES.contains(&scheme) => LinkTarget::Internal(url),
        _ => LinkTarget::Disabled(DisabledReason::UnsafeScheme),
    }
}

/// Configures `anchor` for `target`. Disabled anchors lose every navigation
/// attribute and are marked non-interactive.
pub fn apply(anchor: &mut Element, target: &LinkTarget) {
    match target {
        LinkTarget::Disabled(_) => {
            anchor.remove_attr("href");
            anchor.remove_attr("target");
            anchor.remove_attr("rel");
            anchor.set_attr("aria-disabled", "true");
            anchor.set_attr("tabindex", "-1");
            anchor.add_class(DISABLED_CLASS);
        }
        LinkTarget::External(url) => {
            enable(anchor, url);
            anchor.set_attr("target", "_blank");
            anchor.set_attr("rel", "noopener noreferrer");
        }
        LinkTarget::Internal(url) => {
            enable(anchor, url);
            anchor.remove_attr("target");
            anchor.remove_attr("rel");
        }
    }
}

fn enable(anchor: &mut Element, url: &Url) {
    anchor.remove_attr("aria-disabled");
    anchor.remove_attr("tabindex");
    anchor.remove_class(DISABLED_CLASS);
    anchor.set_attr("href", url.as_str());
}

pub fn bind(anchor: &mut Element, raw: Option<&str>) -> LinkTarget {
    let target = classify(raw);
    apply(anchor, &target);
    target
}
