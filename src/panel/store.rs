//! Registry of live panels.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::state::{ChatPanel, OverlapPolicy};
use super::submit::SharedPanel;

/// How new panels are initialized.
#[derive(Debug, Clone)]
pub struct PanelSettings {
    pub greeting: String,
    pub policy: OverlapPolicy,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            greeting: crate::config::DEFAULT_GREETING.to_string(),
            policy: OverlapPolicy::default(),
        }
    }
}

#[derive(Debug)]
struct Entry {
    panel: SharedPanel,
    last_activity: DateTime<Utc>,
}

/// Thread-safe store of panels keyed by id.
///
/// Each page load gets its own panel, so a panel lives as long as the page
/// that shows it stays active.
#[derive(Debug, Clone)]
pub struct PanelStore {
    inner: Arc<PanelStoreInner>,
}

#[derive(Debug)]
struct PanelStoreInner {
    settings: PanelSettings,
    panels: RwLock<HashMap<String, Entry>>,
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new(PanelSettings::default())
    }
}

impl PanelStore {
    #[must_use]
    pub fn new(settings: PanelSettings) -> Self {
        Self {
            inner: Arc::new(PanelStoreInner {
                settings,
                panels: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new panel and return its id with the panel.
    #[must_use]
    pub fn create(&self) -> (String, SharedPanel) {
        let id = Uuid::new_v4().to_string();
        let settings = &self.inner.settings;
        let panel = Arc::new(Mutex::new(ChatPanel::with_greeting(
            settings.policy,
            &settings.greeting,
        )));

        self.write().insert(
            id.clone(),
            Entry {
                panel: Arc::clone(&panel),
                last_activity: Utc::now(),
            },
        );
        (id, panel)
    }

    /// Get a panel by id and mark it active.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<SharedPanel> {
        let mut guard = self.write();
        let entry = guard.get_mut(id)?;
        entry.last_activity = Utc::now();
        Some(Arc::clone(&entry.panel))
    }

    /// Remove a panel by id.
    pub fn remove(&self, id: &str) -> Option<SharedPanel> {
        self.write().remove(id).map(|entry| entry.panel)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove panels that have been inactive longer than `timeout`.
    ///
    /// Returns the number of panels removed.
    pub fn cleanup_expired(&self, timeout: Duration) -> usize {
        let now = Utc::now();
        let mut guard = self.write();
        let before = guard.len();
        guard.retain(|_, entry| {
            // Negative means clock skew; keep the panel.
            (now - entry.last_activity)
                .to_std()
                .map_or(true, |idle| idle <= timeout)
        });
        before - guard.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.inner
            .panels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.inner
            .panels
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
