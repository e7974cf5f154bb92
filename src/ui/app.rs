//! Full HTML document around a panel.

use leptos::prelude::*;

use crate::panel::PanelSnapshot;
use crate::ui::chat::ChatPanelView;

/// Script tag source for the HTMX bundle, served from `/static`.
pub const HTMX_SRC: &str = "/static/vendor/htmx-2.0.8.min.js";

/// Seconds between full-page reloads while a reply is pending.
///
/// Only pages reached through the plain form POST are ever pending on load;
/// with HTMX the conversation polls itself instead.
pub const PENDING_REFRESH: &str = "1";

/// Page shell hosting a single chat panel.
#[component]
pub fn App(
    #[prop(into)]
    panel_id: String,
    snapshot: PanelSnapshot,
) -> impl IntoView {
    let awaiting = snapshot.is_awaiting();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Chatbot"</title>
                {awaiting.then(|| view! { <meta http-equiv="refresh" content=PENDING_REFRESH /> })}
                // Local assets only, no CDN
                <script src=HTMX_SRC></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>
            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <main class="container mx-auto px-4 py-6">
                    <ChatPanelView panel_id=panel_id snapshot=snapshot />
                </main>
            </body>
        </html>
    }
}
