//! The chat panel card.

use leptos::prelude::*;

use super::{ComposeForm, Conversation};
use crate::panel::PanelSnapshot;
use crate::ui::components::Card;

/// Complete chat panel: header image, conversation and compose form.
///
/// # Example
///
/// ```rust,ignore
/// view! { <ChatPanelView panel_id=id snapshot=panel.snapshot() /> }
/// ```
#[component]
pub fn ChatPanelView(
    #[prop(into)]
    panel_id: String,
    snapshot: PanelSnapshot,
) -> impl IntoView {
    let draft = snapshot.draft.clone();
    let accepts_submit = snapshot.accepts_submit;
    let attr_id = panel_id.clone();
    let conv_id = panel_id.clone();

    view! {
        <div id="chat-panel" data-panel-id=attr_id>
            <Card class="w-full max-w-md mx-auto">
                <Conversation panel_id=conv_id snapshot=snapshot />
                <ComposeForm panel_id=panel_id draft=draft accepts_submit=accepts_submit />
            </Card>
        </div>
    }
}
