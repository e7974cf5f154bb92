//! Header image area.

use leptos::prelude::*;

use crate::ui::components::CardHeader;

/// Image supplied by the responder, shown above the conversation.
///
/// Until a reply carries an image the area shows an empty backdrop.
#[component]
pub fn HeaderImage(
    /// Image URL; may be empty.
    #[prop(into)]
    url: String,
) -> impl IntoView {
    view! {
        <CardHeader class="p-0">
            <div class="relative h-48 overflow-hidden rounded-t-lg bg-muted">
                {(!url.is_empty()).then(|| view! {
                    <img src=url alt="Chatbot header image" class="w-full h-full object-cover" />
                })}
            </div>
        </CardHeader>
    }
}
