//! Leptos SSR rendering of the chat panel.
//!
//! # Structure
//!
//! - [`app`]: page shell
//! - [`components`]: ShadCN-style building blocks
//! - [`chat`]: panel, conversation and compose form
//!
//! The `render_*` functions turn a [`PanelSnapshot`] into HTML strings for
//! the server's handlers. All text is HTML-escaped by the renderer.

pub mod app;
pub mod chat;
pub mod components;

use leptos::prelude::*;

use crate::panel::PanelSnapshot;
use app::App;
use chat::{ChatPanelView, Conversation};

/// Render with a fresh reactive owner so every render is self-contained.
fn render<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    Owner::new().with(|| build().to_html())
}

/// Full HTML page for a panel.
#[must_use]
pub fn render_page(panel_id: &str, snapshot: PanelSnapshot) -> String {
    let panel_id = panel_id.to_owned();
    let body = render(move || view! { <App panel_id=panel_id snapshot=snapshot /> });
    format!("<!DOCTYPE html>{body}")
}

/// The `#chat-panel` fragment.
#[must_use]
pub fn render_panel(panel_id: &str, snapshot: PanelSnapshot) -> String {
    let panel_id = panel_id.to_owned();
    render(move || view! { <ChatPanelView panel_id=panel_id snapshot=snapshot /> })
}

/// The `#chat-conversation` fragment.
#[must_use]
pub fn render_conversation(panel_id: &str, snapshot: PanelSnapshot) -> String {
    let panel_id = panel_id.to_owned();
    render(move || view! { <Conversation panel_id=panel_id snapshot=snapshot /> })
}
