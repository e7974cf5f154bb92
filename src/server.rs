use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::panel::{PanelSnapshot, PanelStore, SharedPanel, spawn_delivery};
use crate::responder::HttpResponder;
use crate::ui;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let responder = HttpResponder::from_config(&config.responder)?;
    info!(
        name: "responder.config.loaded",
        endpoint = %responder.endpoint(),
        timeout_secs = ?config.responder.timeout_secs,
        "Responder configured"
    );

    let state = AppState::new(Arc::clone(&config), Arc::new(responder));
    spawn_idle_sweeper(
        state.panels.clone(),
        Duration::from_secs(config.panel.idle_timeout_secs),
    );

    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the router for the chat panel.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // HTML
        .route("/", get(index_handler))
        .route("/panel/{id}", get(panel_handler))
        .route("/panel/{id}/conversation", get(conversation_handler))
        .route("/panel/{id}/messages", post(submit_handler))
        // JSON
        .route("/api/panels/{id}", get(api_get_panel))
        .route("/health", get(|| async { "ok" }))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically drop panels whose page has gone quiet.
fn spawn_idle_sweeper(panels: PanelStore, idle_timeout: Duration) {
    let period = (idle_timeout / 4).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = panels.cleanup_expired(idle_timeout);
            if removed > 0 {
                info!(name: "panel.store.swept", removed, remaining = panels.len(), "Idle panels removed");
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - One new panel per page load.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let (id, panel) = state.panels.create();
    debug!(name: "panel.created", panel_id = %id, "Panel created");

    let snapshot = panel.lock().await.snapshot();
    Html(ui::render_page(&id, snapshot))
}

/// GET /panel/:id - The panel fragment for HTMX, the full page otherwise.
async fn panel_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Html<String>, StatusCode> {
    let snapshot = snapshot_of(&lookup(&state, &id)?).await;
    if is_htmx(&headers) {
        Ok(Html(ui::render_panel(&id, snapshot)))
    } else {
        Ok(Html(ui::render_page(&id, snapshot)))
    }
}

/// GET /panel/:id/conversation - Header image and messages.
async fn conversation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let snapshot = snapshot_of(&lookup(&state, &id)?).await;
    Ok(Html(ui::render_conversation(&id, snapshot)))
}

/// Form body posted by the compose form.
#[derive(Debug, Deserialize)]
struct DraftForm {
    #[serde(default)]
    draft: String,
}

/// POST /panel/:id/messages - Submit the draft.
///
/// The user's message is appended before this returns; the reply is
/// fetched in the background and shows up through the conversation poll.
/// A plain form POST is answered with 303 to the panel page.
async fn submit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<DraftForm>,
) -> Result<Response, StatusCode> {
    let panel = lookup(&state, &id)?;

    let snapshot = {
        let mut guard = panel.lock().await;
        guard.set_draft(form.draft);
        match guard.begin_submit() {
            Ok(pending) => {
                info!(
                    name: "panel.submit.accepted",
                    panel_id = %id,
                    ticket = pending.ticket,
                    awaiting = guard.awaiting_replies(),
                    "Sending request to responder"
                );
                spawn_delivery(Arc::clone(&panel), Arc::clone(&state.responder), pending);
            }
            Err(reason) => {
                debug!(name: "panel.submit.ignored", panel_id = %id, %reason, "Submit ignored");
            }
        }
        guard.snapshot()
    };

    if is_htmx(&headers) {
        Ok(Html(ui::render_panel(&id, snapshot)).into_response())
    } else {
        Ok(Redirect::to(&format!("/panel/{id}")).into_response())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/panels/:id - Panel state as JSON.
async fn api_get_panel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PanelSnapshot>, StatusCode> {
    let panel = lookup(&state, &id)?;
    Ok(Json(snapshot_of(&panel).await))
}

/// HTMX marks every request it issues with `HX-Request`.
fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

fn lookup(state: &AppState, id: &str) -> Result<SharedPanel, StatusCode> {
    state.panels.get(id).ok_or(StatusCode::NOT_FOUND)
}

async fn snapshot_of(panel: &SharedPanel) -> PanelSnapshot {
    panel.lock().await.snapshot()
}
