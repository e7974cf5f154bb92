//! Header image plus message list, the region that refreshes on its own.

use leptos::prelude::*;

use super::{HeaderImage, MessageList, POLL_TRIGGER, conversation_url};
use crate::panel::PanelSnapshot;
use crate::ui::components::{CardContent, ScrollArea};

/// Conversation region of the panel.
///
/// While replies are outstanding the region re-fetches itself; the first
/// render without pending replies drops the trigger and polling stops.
#[component]
pub fn Conversation(
    #[prop(into)]
    panel_id: String,
    snapshot: PanelSnapshot,
) -> impl IntoView {
    let awaiting = snapshot.is_awaiting();
    let poll_url = awaiting.then(|| conversation_url(&panel_id));
    let poll_trigger = awaiting.then_some(POLL_TRIGGER);
    let swap = awaiting.then_some("outerHTML");

    view! {
        <div
            id="chat-conversation"
            hx-get=poll_url
            hx-trigger=poll_trigger
            hx-swap=swap
            aria-busy=awaiting.to_string()
        >
            <HeaderImage url=snapshot.header_image />
            <CardContent class="p-4">
                <ScrollArea class="h-[400px] pr-4">
                    <MessageList messages=snapshot.messages />
                </ScrollArea>
            </CardContent>
        </div>
    }
}
