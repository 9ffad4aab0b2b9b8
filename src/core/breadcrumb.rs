//! # Breadcrumb Trail
//!
//! An ordered trail of links, root first. Each crumb is active under the same
//! exact-match rule as the navigation menu; breadcrumbs have no desktop/mobile
//! split, so they carry no style token.

use serde::Serialize;

use crate::core::nav::{AriaCurrent, NavigationItem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCrumb {
    pub path: String,
    pub label: String,
    pub active: bool,
    /// Separators go between crumbs, never after this one.
    pub is_last: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_current: Option<AriaCurrent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumbs {
    trail: Vec<NavigationItem>,
}

impl Breadcrumbs {
    pub fn new(trail: Vec<NavigationItem>) -> Self {
        Self { trail }
    }

    pub fn trail(&self) -> &[NavigationItem] {
        &self.trail
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    pub fn resolve(&self, current_path: &str) -> Vec<ResolvedCrumb> {
        let last = self.trail.len().saturating_sub(1);
        self.trail
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let active = item.is_active(current_path);
                ResolvedCrumb {
                    path: item.path().to_string(),
                    label: item.label().to_string(),
                    active,
                    is_last: i == last,
                    aria_current: AriaCurrent::for_state(active),
                }
            })
            .collect()
    }
}
