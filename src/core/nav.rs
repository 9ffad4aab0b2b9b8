//! # Active-Link Resolution
//!
//! Decides which navigation link is "current" and which style token it gets.
//! The same two rules back the desktop bar, the mobile menu, and breadcrumbs:
//!
//! 1. A link is active when its path is *exactly* the current location.
//!    No prefix matching, no trailing-slash or case normalization. Callers
//!    hand in canonical paths.
//! 2. The style token is a pure function of `(active, variant)`.
//!
//! ```text
//!                 Desktop            Mobile
//!   active   →   active-desktop     active-mobile
//!   inactive →   inactive-desktop   inactive-mobile
//! ```

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which navigation surface a link is being styled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Desktop,
    Mobile,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Desktop => "desktop",
            Variant::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantError(pub String);

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}' (expected 'desktop' or 'mobile')", self.0)
    }
}

impl std::error::Error for VariantError {}

impl FromStr for Variant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Variant::Desktop),
            "mobile" => Ok(Variant::Mobile),
            other => Err(VariantError(other.to_string())),
        }
    }
}

/// Opaque presentation identifier. The rendering layer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleToken {
    ActiveDesktop,
    InactiveDesktop,
    ActiveMobile,
    InactiveMobile,
}

impl StyleToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleToken::ActiveDesktop => "active-desktop",
            StyleToken::InactiveDesktop => "inactive-desktop",
            StyleToken::ActiveMobile => "active-mobile",
            StyleToken::InactiveMobile => "inactive-mobile",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic marker for assistive tech (`aria-current="page"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaCurrent {
    Page,
}

impl AriaCurrent {
    pub fn for_state(active: bool) -> Option<Self> {
        active.then_some(AriaCurrent::Page)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AriaCurrent::Page => "page",
        }
    }
}

pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == current_path
}

pub fn resolve_visual_state(is_active: bool, variant: Variant) -> StyleToken {
    match (is_active, variant) {
        (true, Variant::Desktop) => StyleToken::ActiveDesktop,
        (false, Variant::Desktop) => StyleToken::InactiveDesktop,
        (true, Variant::Mobile) => StyleToken::ActiveMobile,
        (false, Variant::Mobile) => StyleToken::InactiveMobile,
    }
}

// ============================================================================
// Navigation Items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItemError {
    EmptyPath,
    EmptyLabel,
    MissingSeparator(String),
}

impl fmt::Display for NavItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavItemError::EmptyPath => write!(f, "navigation item has an empty path"),
            NavItemError::EmptyLabel => write!(f, "navigation item has an empty label"),
            NavItemError::MissingSeparator(s) => {
                write!(f, "expected PATH=LABEL, got '{s}'")
            }
        }
    }
}

impl std::error::Error for NavItemError {}

/// A link target and its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    path: String,
    label: String,
}

impl NavigationItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Result<Self, NavItemError> {
        let path = path.into();
        let label = label.into();
        if path.is_empty() {
            return Err(NavItemError::EmptyPath);
        }
        if label.trim().is_empty() {
            return Err(NavItemError::EmptyLabel);
        }
        Ok(Self { path, label })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(&self.path, current_path)
    }

    pub fn resolve(&self, current_path: &str, variant: Variant) -> ResolvedLink {
        let active = self.is_active(current_path);
        ResolvedLink {
            path: self.path.clone(),
            label: self.label.clone(),
            active,
            style: resolve_visual_state(active, variant),
            aria_current: AriaCurrent::for_state(active),
        }
    }
}

/// Parses `PATH=LABEL`. The split is on the first `=`, so labels may contain `=`.
impl FromStr for NavigationItem {
    type Err = NavItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, label) = s
            .split_once('=')
            .ok_or_else(|| NavItemError::MissingSeparator(s.to_string()))?;
        Self::new(path, label)
    }
}

/// A navigation item after resolution against the current location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub path: String,
    pub label: String,
    pub active: bool,
    pub style: StyleToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_current: Option<AriaCurrent>,
}

/// An ordered list of links rendered as a desktop bar or a mobile menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    items: Vec<NavigationItem>,
}

impl NavMenu {
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item whose path is the current location, if any.
    pub fn active_item(&self, current_path: &str) -> Option<&NavigationItem> {
        self.items.iter().find(|item| item.is_active(current_path))
    }

    /// Resolve every item in order. Duplicated paths are all marked active.
    pub fn resolve(&self, current_path: &str, variant: Variant) -> Vec<ResolvedLink> {
        self.items
            .iter()
            .map(|item| item.resolve(current_path, variant))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;

    #[test]
    fn test_is_active_exact_match() {
        assert!(is_active("/projects", "/projects"));
    }

    #[test]
    fn test_is_active_no_prefix_matching() {
        assert!(!is_active("/projects", "/projects/new"));
        assert!(!is_active("/projects/new", "/projects"));
        assert!(!is_active("/", "/projects"));
    }

    #[test]
    fn test_is_active_no_normalization() {
        assert!(!is_active("/projects", "/projects/"));
        assert!(!is_active("/projects", "/Projects"));
        assert!(!is_active("/projects", "/projects?tab=open"));
    }

    #[test]
    fn test_resolve_visual_state_table() {
        assert_eq!(resolve_visual_state(true, Variant::Desktop), StyleToken::ActiveDesktop);
        assert_eq!(resolve_visual_state(false, Variant::Desktop), StyleToken::InactiveDesktop);
        assert_eq!(resolve_visual_state(true, Variant::Mobile), StyleToken::ActiveMobile);
        assert_eq!(resolve_visual_state(false, Variant::Mobile), StyleToken::InactiveMobile);
    }

    #[test]
    fn test_variant_distinguishes_token() {
        for active in [true, false] {
            assert_ne!(
                resolve_visual_state(active, Variant::Desktop),
                resolve_visual_state(active, Variant::Mobile)
            );
        }
    }

    #[test]
    fn test_style_token_strings() {
        assert_eq!(StyleToken::ActiveDesktop.to_string(), "active-desktop");
        assert_eq!(StyleToken::InactiveMobile.to_string(), "inactive-mobile");
        assert_eq!(
            serde_json::to_string(&StyleToken::InactiveDesktop).unwrap(),
            "\"inactive-desktop\""
        );
    }

    #[test]
    fn test_variant_parse_is_strict() {
        assert_eq!("desktop".parse::<Variant>(), Ok(Variant::Desktop));
        assert_eq!("mobile".parse::<Variant>(), Ok(Variant::Mobile));
        assert_eq!(
            "tablet".parse::<Variant>(),
            Err(VariantError("tablet".to_string()))
        );
        assert!("Desktop".parse::<Variant>().is_err());
        assert!("".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_serde() {
        let v: Variant = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(v, Variant::Mobile);
        assert!(serde_json::from_str::<Variant>("\"watch\"").is_err());
    }

    #[test]
    fn test_nav_item_parse() {
        let it: NavigationItem = "/projects=Projects".parse().unwrap();
        assert_eq!(it.path(), "/projects");
        assert_eq!(it.label(), "Projects");

        let it: NavigationItem = "/math=a=b".parse().unwrap();
        assert_eq!(it.label(), "a=b");
    }

    #[test]
    fn test_nav_item_rejects_bad_input() {
        assert_eq!(
            "/projects".parse::<NavigationItem>(),
            Err(NavItemError::MissingSeparator("/projects".to_string()))
        );
        assert_eq!("=Home".parse::<NavigationItem>(), Err(NavItemError::EmptyPath));
        assert_eq!("/=  ".parse::<NavigationItem>(), Err(NavItemError::EmptyLabel));
    }

    #[test]
    fn test_resolved_link_carries_aria_current() {
        let link = item("/docs", "Docs").resolve("/docs", Variant::Mobile);
        assert!(link.active);
        assert_eq!(link.style, StyleToken::ActiveMobile);
        assert_eq!(link.aria_current, Some(AriaCurrent::Page));

        let link = item("/docs", "Docs").resolve("/blog", Variant::Mobile);
        assert!(!link.active);
        assert_eq!(link.aria_current, None);
    }

    #[test]
    fn test_menu_resolve_preserves_order() {
        let menu = NavMenu::new(vec![
            item("/", "Home"),
            item("/projects", "Projects"),
            item("/settings", "Settings"),
        ]);
        let links = menu.resolve("/projects", Variant::Desktop);
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Projects", "Settings"]);
        let active: Vec<_> = links.iter().map(|l| l.active).collect();
        assert_eq!(active, [false, true, false]);
    }

    #[test]
    fn test_menu_no_active_item_for_unknown_location() {
        let menu = NavMenu::new(vec![item("/", "Home"), item("/projects", "Projects")]);
        assert!(menu.active_item("/projects/new").is_none());
        assert!(menu
            .resolve("/projects/new", Variant::Desktop)
            .iter()
            .all(|l| l.style == StyleToken::InactiveDesktop));
    }

    #[test]
    fn test_menu_duplicate_paths_all_active() {
        let menu = NavMenu::new(vec![item("/a", "First"), item("/a", "Second")]);
        assert!(menu.resolve("/a", Variant::Desktop).iter().all(|l| l.active));
        assert_eq!(menu.active_item("/a").map(|i| i.label()), Some("First"));
    }

    #[test]
    fn test_resolved_link_json_omits_inactive_aria() {
        let link = item("/a", "A").resolve("/b", Variant::Desktop);
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["style"], "inactive-desktop");
        assert!(json.get("aria_current").is_none());
    }
}
