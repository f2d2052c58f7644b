//! Navigation state — the single record of which page the shell is on.
//!
//! Every nav link asks [`NavigationState::is_active`] for its highlight, and
//! the composer reads [`NavigationState::active_entry`] to pick the page
//! body. Listeners registered with [`NavigationState::subscribe`] run
//! synchronously after each successful [`NavigationState::navigate`].

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use labnav_common::error::Result;

use crate::routes::{PageId, RouteEntry, RouteTable};

/// Delivered to listeners after every successful navigation, including
/// navigation to the page that is already current (`changed == false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationChange {
    pub previous: &'static str,
    pub current: &'static str,
    pub page_id: PageId,
    pub changed: bool,
}

/// Handle returned by [`NavigationState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&NavigationChange) + Send>;

pub struct NavigationState {
    routes: Arc<RouteTable>,
    current_path: &'static str,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

impl NavigationState {
    /// Starts on the home route.
    pub fn new(routes: Arc<RouteTable>) -> Self {
        let current_path = routes.home().path;
        Self {
            routes,
            current_path,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Moves to `path`. Unknown paths fail with `NotFound` and leave the
    /// state untouched.
    pub fn navigate(&mut self, path: &str) -> Result<&RouteEntry> {
        let entry = self.routes.resolve(path)?;
        let change = NavigationChange {
            previous: self.current_path,
            current: entry.path,
            page_id: entry.page_id,
            changed: self.current_path != entry.path,
        };
        debug!(from = change.previous, to = change.current, changed = change.changed, "navigate");

        self.current_path = entry.path;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
        Ok(entry)
    }

    pub fn is_active(&self, candidate: &str) -> bool {
        self.current_path == candidate
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&NavigationChange) + Send + 'static,
    {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the handle was already detached.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn current_path(&self) -> &'static str {
        self.current_path
    }

    pub fn active_entry(&self) -> &RouteEntry {
        // current_path only ever holds a resolved path
        self.routes
            .resolve(self.current_path)
            .unwrap_or_else(|_| self.routes.home())
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Arc::new(RouteTable::standard()))
    }
}

impl fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("current_path", &self.current_path)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
