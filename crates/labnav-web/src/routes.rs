//! Route table — the static path → page mapping behind the dashboard nav.
//!
//! Built once at startup and shared read-only. Lookups are exact-match; there
//! are no wildcard or parameterised routes.

use std::collections::HashSet;

use serde::Serialize;

use labnav_common::error::{NavigatorError, Result};

/// Identifies which page component renders a route's content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageId {
    Home,
    Upload,
    Analytics,
    SearchQuality,
    Security,
}

/// Container width class for a page's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageWidth {
    Narrow,
    Wide,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub page_id: PageId,
    /// Subtitle under the site title on this page.
    pub tagline: &'static str,
    pub width: PageWidth,
}

impl RouteEntry {
    pub const fn new(
        path: &'static str,
        label: &'static str,
        page_id: PageId,
        tagline: &'static str,
        width: PageWidth,
    ) -> Self {
        Self { path, label, page_id, tagline, width }
    }
}

pub const HOME_PATH: &str = "/";

static STANDARD_ROUTES: [RouteEntry; 5] = [
    RouteEntry::new("/", "Home", PageId::Home,
        "Your AI assistant for lab protocols, papers, and theses", PageWidth::Narrow),
    RouteEntry::new("/upload", "Upload Protocol", PageId::Upload,
        "Upload Protocol Documents", PageWidth::Narrow),
    RouteEntry::new("/analytics", "Feedback Analytics", PageId::Analytics,
        "Feedback Analytics Dashboard", PageWidth::Wide),
    RouteEntry::new("/search-quality", "Search Quality", PageId::SearchQuality,
        "Search Quality Dashboard", PageWidth::Wide),
    RouteEntry::new("/security", "Security Audit", PageId::Security,
        "Security Audit Dashboard", PageWidth::Full),
];

/// Immutable, validated set of routes in nav order.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Paths must start with `/`, be unique, and exactly one must be `/`.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(NavigatorError::InvalidRouteTable(format!(
                    "path {:?} has no leading slash",
                    entry.path
                )));
            }
            if !seen.insert(entry.path) {
                return Err(NavigatorError::InvalidRouteTable(format!(
                    "duplicate path {:?}",
                    entry.path
                )));
            }
        }
        if !seen.contains(HOME_PATH) {
            return Err(NavigatorError::InvalidRouteTable("no entry for \"/\"".into()));
        }
        Ok(Self { entries })
    }

    /// The five dashboard routes.
    pub fn standard() -> Self {
        Self { entries: STANDARD_ROUTES.to_vec() }
    }

    pub fn resolve(&self, path: &str) -> Result<&RouteEntry> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .ok_or_else(|| NavigatorError::NotFound(path.to_string()))
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn home(&self) -> &RouteEntry {
        // `new` and `standard` both guarantee a "/" entry
        self.entries
            .iter()
            .find(|e| e.path == HOME_PATH)
            .unwrap_or(&STANDARD_ROUTES[0])
    }

    pub fn by_page(&self, page_id: PageId) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.page_id == page_id)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: [&str; 5] = ["/", "/upload", "/analytics", "/search-quality", "/security"];

    #[test]
    fn test_resolve_every_standard_path() {
        let table = RouteTable::standard();
        for path in PATHS {
            assert_eq!(table.resolve(path).unwrap().path, path);
        }
    }

    #[test]
    fn test_resolve_unknown_path_is_not_found() {
        let table = RouteTable::standard();
        for path in ["/nonexistent", "", "/upload/", "/UPLOAD", "upload"] {
            let err = table.resolve(path).unwrap_err();
            assert!(err.is_not_found(), "expected NotFound for {:?}", path);
        }
    }

    #[test]
    fn test_standard_table_passes_validation() {
        assert!(RouteTable::new(RouteTable::standard().entries().to_vec()).is_ok());
    }

    #[test]
    fn test_page_lookup() {
        let table = RouteTable::standard();
        assert_eq!(table.by_page(PageId::Security).unwrap().path, "/security");
        assert_eq!(table.home().page_id, PageId::Home);
        assert_eq!(table.by_page(PageId::SearchQuality).unwrap().width, PageWidth::Wide);
    }

    #[test]
    fn test_rejects_duplicate_paths() {
        let mut entries = STANDARD_ROUTES.to_vec();
        entries.push(RouteEntry::new("/upload", "Again", PageId::Upload, "", PageWidth::Narrow));
        let err = RouteTable::new(entries).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_missing_home() {
        let entries = STANDARD_ROUTES[1..].to_vec();
        assert!(RouteTable::new(entries).is_err());
    }

    #[test]
    fn test_rejects_relative_path() {
        let entries = vec![
            STANDARD_ROUTES[0].clone(),
            RouteEntry::new("upload", "Upload", PageId::Upload, "", PageWidth::Narrow),
        ];
        assert!(RouteTable::new(entries).is_err());
    }
}
