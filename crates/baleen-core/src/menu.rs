//! Navigation menu tree of the admin dashboard and its resolver.
//!
//! The tree is authored once ([`menu_items`]) and never mutated. Lookups are
//! depth-first over the forest: each root is checked, then its subtree, before
//! the next root. Keys are unique across the whole tree, so at most one entry
//! matches a key.
//!
//! `parent_key` is a back-reference by key, not ownership. A cycle in those
//! references makes [`find_all_parents`] loop forever; menus must not be
//! built that way. [`validate_menu`] checks key uniqueness and that every
//! parent reference resolves, but does not look for cycles.

use std::collections::HashSet;
use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Route the router falls back to for the root path and unknown paths.
pub const DEFAULT_ROUTE: &str = "/dashboard";

/// Small label rendered next to a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuBadge {
    pub variant: String,
    pub text: String,
}

/// One node of the sidebar navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuEntry {
    pub key: String,
    pub label: String,
    /// Section header rather than a link.
    #[serde(default)]
    pub is_title: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<MenuBadge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    /// Link target (e.g. `_blank`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            is_title: false,
            icon: None,
            url: None,
            badge: None,
            parent_key: None,
            target: None,
            children: Vec::new(),
        }
    }

    /// Section header entry.
    #[must_use]
    pub fn title(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            is_title: true,
            ..Self::new(key, label)
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_badge(mut self, variant: impl Into<String>, text: impl Into<String>) -> Self {
        self.badge = Some(MenuBadge {
            variant: variant.into(),
            text: text.into(),
        });
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }
}

/// The built-in admin dashboard menu.
pub fn menu_items() -> &'static [MenuEntry] {
    static MENU_ITEMS: OnceLock<Vec<MenuEntry>> = OnceLock::new();
    MENU_ITEMS.get_or_init(|| {
        vec![
            MenuEntry::new("dashboards", "Dashboard")
                .with_icon("home")
                .with_url(DEFAULT_ROUTE),
            MenuEntry::title("apps", "Apps"),
            MenuEntry::new("apps-vocab", "Vocabulary")
                .with_icon("book")
                .with_url("/vocabulary"),
            MenuEntry::new("apps-topic", "Topic")
                .with_icon("message-square")
                .with_url("/topics"),
        ]
    })
}

fn find_by<'a, F>(tree: &'a [MenuEntry], predicate: &F) -> Option<&'a MenuEntry>
where
    F: Fn(&MenuEntry) -> bool,
{
    for entry in tree {
        if predicate(entry) {
            return Some(entry);
        }
        if let Some(found) = find_by(&entry.children, predicate) {
            return Some(found);
        }
    }
    None
}

/// Find the entry whose key equals `key`.
///
/// Returns `None` for an empty key, an empty tree, or an unknown key.
#[must_use]
pub fn find_menu_item<'a>(tree: &'a [MenuEntry], key: &str) -> Option<&'a MenuEntry> {
    if key.is_empty() {
        return None;
    }
    find_by(tree, &|entry| entry.key == key)
}

/// Find the entry whose `url` equals `url`.
#[must_use]
pub fn find_menu_item_by_url<'a>(tree: &'a [MenuEntry], url: &str) -> Option<&'a MenuEntry> {
    if url.is_empty() {
        return None;
    }
    find_by(tree, &|entry| entry.url.as_deref() == Some(url))
}

/// Keys of every ancestor of `entry`, nearest parent first.
///
/// Stops at the first entry without a `parent_key` or whose parent cannot be
/// found in `tree`.
#[must_use]
pub fn find_all_parents(tree: &[MenuEntry], entry: &MenuEntry) -> Vec<String> {
    let mut parents = Vec::new();
    let mut current = entry;
    while let Some(parent_key) = current.parent_key.as_deref() {
        let Some(parent) = find_menu_item(tree, parent_key) else {
            break;
        };
        parents.push(parent.key.clone());
        current = parent;
    }
    parents
}

/// The sidebar entry to highlight for a route, and the groups to expand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActiveMenu {
    pub key: String,
    pub url: String,
    /// Ancestor keys, nearest first.
    pub expanded: Vec<String>,
}

/// Resolve the active menu entry for a route path.
///
/// The root path and paths no entry links to fall back to
/// [`DEFAULT_ROUTE`], mirroring the router's redirects. Returns `None` only
/// when the tree has no entry for the fallback either.
#[must_use]
pub fn resolve_active(tree: &[MenuEntry], path: &str) -> Option<ActiveMenu> {
    let path = normalize_path(path);
    let entry = find_menu_item_by_url(tree, &path)
        .or_else(|| find_menu_item_by_url(tree, DEFAULT_ROUTE))?;

    Some(ActiveMenu {
        key: entry.key.clone(),
        url: entry.url.clone().unwrap_or_default(),
        expanded: find_all_parents(tree, entry),
    })
}

fn normalize_path(path: &str) -> String {
    let path = path
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    if path.is_empty() {
        DEFAULT_ROUTE.to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Check that keys are unique and every `parent_key` names an existing entry.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the first offending key.
pub fn validate_menu(tree: &[MenuEntry]) -> Result<(), CoreError> {
    let rows = flatten(tree);

    let mut keys = HashSet::with_capacity(rows.len());
    for row in &rows {
        if !keys.insert(row.key.as_str()) {
            return Err(CoreError::Validation(format!(
                "duplicate menu key '{}'",
                row.key
            )));
        }
    }

    for row in &rows {
        if let Some(parent_key) = row.parent_key.as_deref()
            && !keys.contains(parent_key)
        {
            return Err(CoreError::Validation(format!(
                "menu entry '{}' references unknown parent '{parent_key}'",
                row.key
            )));
        }
    }

    Ok(())
}

/// A menu entry without its children, annotated with its depth in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuRow {
    pub key: String,
    pub label: String,
    pub depth: usize,
    pub is_title: bool,
    pub url: Option<String>,
    pub parent_key: Option<String>,
}

/// Pre-order listing of the whole tree.
#[must_use]
pub fn flatten(tree: &[MenuEntry]) -> Vec<MenuRow> {
    fn walk(entries: &[MenuEntry], depth: usize, rows: &mut Vec<MenuRow>) {
        for entry in entries {
            rows.push(MenuRow {
                key: entry.key.clone(),
                label: entry.label.clone(),
                depth,
                is_title: entry.is_title,
                url: entry.url.clone(),
                parent_key: entry.parent_key.clone(),
            });
            walk(&entry.children, depth + 1, rows);
        }
    }

    let mut rows = Vec::new();
    walk(tree, 0, &mut rows);
    rows
}
