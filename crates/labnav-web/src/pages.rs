//! Page components — what fills the content region of each route.
//!
//! The dashboards themselves are client-side bundles. A page component only
//! decides which of them to mount and with which props.

use serde::Serialize;
use serde_json::Value;

use labnav_common::error::Result;
use labnav_common::{DocType, DocTypeAllowList};

use crate::filter::FilterState;
use crate::routes::{PageId, HOME_PATH};

/// Per-request input to a page component. `doc_type` has already passed the
/// allow-list check.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub doc_type: Option<DocType>,
}

/// An external component and the props it is mounted with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MountPoint {
    pub component: &'static str,
    pub props: Value,
}

impl MountPoint {
    pub fn new<P: Serialize>(component: &'static str, props: &P) -> Result<Self> {
        Ok(Self {
            component,
            props: serde_json::to_value(props)?,
        })
    }

    /// A self-contained component that takes no props.
    pub fn bare(component: &'static str) -> Self {
        Self {
            component,
            props: Value::Object(Default::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentRegion {
    Mounts { mounts: Vec<MountPoint> },
    Fallback { requested_path: String, home_path: &'static str },
}

impl ContentRegion {
    pub fn fallback(requested_path: impl Into<String>) -> Self {
        ContentRegion::Fallback {
            requested_path: requested_path.into(),
            home_path: HOME_PATH,
        }
    }

    pub fn mounts(&self) -> &[MountPoint] {
        match self {
            ContentRegion::Mounts { mounts } => mounts,
            ContentRegion::Fallback { .. } => &[],
        }
    }

    pub fn mount(&self, component: &str) -> Option<&MountPoint> {
        self.mounts().iter().find(|m| m.component == component)
    }
}

/// Renders the content region for one page id.
pub trait PageComponent: Send + Sync {
    fn page_id(&self) -> PageId;

    fn content(&self, request: &PageRequest) -> Result<ContentRegion>;
}

// ─────────────────────────────────────────────
//  Home
// ─────────────────────────────────────────────

pub const FILTER_CHIPS: &str = "FilterChips";
pub const SEARCH_BOX: &str = "AdvancedSearchBox";

/// Search page. Owns a fresh [`FilterState`] per render, so the filter is
/// never carried across navigation.
pub struct HomePage {
    doc_types: DocTypeAllowList,
}

impl HomePage {
    pub fn new(doc_types: DocTypeAllowList) -> Self {
        Self { doc_types }
    }
}

impl PageComponent for HomePage {
    fn page_id(&self) -> PageId {
        PageId::Home
    }

    fn content(&self, request: &PageRequest) -> Result<ContentRegion> {
        let mut filter = FilterState::with_options(self.doc_types.clone());
        if let Some(doc_type) = &request.doc_type {
            filter.set_doc_type(doc_type.as_str());
        }

        Ok(ContentRegion::Mounts {
            mounts: vec![
                MountPoint::new(FILTER_CHIPS, &filter.chip_props())?,
                MountPoint::new(SEARCH_BOX, &filter.search_props())?,
            ],
        })
    }
}

// ─────────────────────────────────────────────
//  Self-contained dashboards
// ─────────────────────────────────────────────

/// A page whose whole body is one prop-less component.
pub struct DashboardPage {
    page_id: PageId,
    component: &'static str,
}

impl DashboardPage {
    pub fn uploader() -> Self {
        Self { page_id: PageId::Upload, component: "ProtocolUploader" }
    }

    pub fn feedback_analytics() -> Self {
        Self { page_id: PageId::Analytics, component: "FeedbackAnalyticsDashboard" }
    }

    pub fn search_quality() -> Self {
        Self { page_id: PageId::SearchQuality, component: "SearchQualityDashboard" }
    }

    pub fn security_audit() -> Self {
        Self { page_id: PageId::Security, component: "SecurityAuditDashboard" }
    }
}

impl PageComponent for DashboardPage {
    fn page_id(&self) -> PageId {
        self.page_id
    }

    fn content(&self, _request: &PageRequest) -> Result<ContentRegion> {
        Ok(ContentRegion::Mounts {
            mounts: vec![MountPoint::bare(self.component)],
        })
    }
}
