//! Chat panel: Axum + Leptos + HTMX
//!
//! A chat widget that keeps a conversation in memory, relays the user's text
//! to an external responder and renders the replies, including an optional
//! header image the responder may supply.
//!
//! # Architecture
//!
//! - **Panel**: state container with pure transitions and the async submit flow
//! - **Responder**: `POST /process` client behind the [`responder::Responder`] trait
//! - **UI**: Leptos SSR components, refreshed in the browser by HTMX
//! - **Server**: Axum routes that own one panel per page load
//!
//! # Modules
//!
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`panel`]: conversation state and submission
//! - [`responder`]: responder client and wire types
//! - [`server`]: HTTP surface
//! - [`ui`]: HTML rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::match_same_arms)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod panel;
pub mod responder;
pub mod server;
pub mod ui;

use crate::config::AppConfig;

use panel::{PanelSettings, PanelStore};
use responder::Responder;
use std::fmt;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live panels, one per page load.
    pub panels: PanelStore,
    /// Where user input is sent.
    pub responder: Arc<dyn Responder>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("panels", &self.panels.len())
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, responder: Arc<dyn Responder>) -> Self {
        let panels = PanelStore::new(PanelSettings {
            greeting: config.panel.greeting.clone(),
            policy: config.panel.overlap_policy,
        });
        Self {
            panels,
            responder,
            config,
        }
    }
}
