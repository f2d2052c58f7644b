//! Shared application state for the web server.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{info, warn};

use labnav_common::{DocType, DocTypeAllowList};
use labnav_config::Config;

use crate::backend::BackendClient;
use crate::composer::PageComposer;
use crate::error::WebError;
use crate::navigation::NavigationState;
use crate::routes::RouteTable;

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// The shell moved to a page (or re-entered the current one)
    Navigated { previous: String, current: String, changed: bool },
    /// Result of the latest backend health probe
    BackendStatus { reachable: bool, message: String },
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub routes: Arc<RouteTable>,
    pub nav: Mutex<NavigationState>,
    pub composer: PageComposer,
    pub doc_types: DocTypeAllowList,
    pub backend: BackendClient,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, WebError> {
        let (event_tx, _) = broadcast::channel(256);
        let routes = Arc::new(RouteTable::standard());
        let doc_types = DocTypeAllowList::with_extra(&config.filters.extra_doc_types);

        let mut nav = NavigationState::new(Arc::clone(&routes));
        let tx = event_tx.clone();
        nav.subscribe(move |change| {
            if change.changed {
                info!(from = change.previous, to = change.current, "Page changed");
            }
            // no receivers is fine
            let _ = tx.send(AppEvent::Navigated {
                previous: change.previous.to_string(),
                current: change.current.to_string(),
                changed: change.changed,
            });
        });

        let composer = PageComposer::standard(config.branding.clone(), doc_types.clone())?;
        let backend = BackendClient::new(&config.backend)?;

        Ok(Self {
            config,
            routes,
            nav: Mutex::new(nav),
            composer,
            doc_types,
            backend,
            event_tx,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    pub fn publish(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }

    pub fn lock_nav(&self) -> Result<MutexGuard<'_, NavigationState>, WebError> {
        self.nav.lock().map_err(|_| WebError::StatePoisoned)
    }

    /// Allow-list check for a `doc_type` on a page request. Unknown values
    /// are dropped so the page falls back to the default filter.
    pub fn page_doc_type(&self, raw: Option<&str>) -> Option<DocType> {
        let raw = raw?;
        match self.doc_types.parse(raw) {
            Ok(doc_type) => Some(doc_type),
            Err(_) => {
                warn!(doc_type = raw, "Ignoring unknown document type");
                None
            }
        }
    }
}

pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navigation_is_broadcast() {
        let state = AppState::new(Config::default()).unwrap();
        let mut rx = state.subscribe();

        state.lock_nav().unwrap().navigate("/upload").unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            AppEvent::Navigated {
                previous: "/".into(),
                current: "/upload".into(),
                changed: true,
            }
        );
    }

    #[test]
    fn test_page_doc_type_filters_unknown_values() {
        let mut config = Config::default();
        config.filters.extra_doc_types = vec!["poster".into()];
        let state = AppState::new(config).unwrap();

        assert_eq!(state.page_doc_type(Some("Paper")).unwrap().as_str(), "paper");
        assert_eq!(state.page_doc_type(Some("poster")).unwrap().as_str(), "poster");
        assert!(state.page_doc_type(Some("memo")).is_none());
        assert!(state.page_doc_type(None).is_none());
    }

    #[test]
    fn test_event_json_shape() {
        let event = AppEvent::BackendStatus { reachable: false, message: "down".into() };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "backend_status");
    }
}
