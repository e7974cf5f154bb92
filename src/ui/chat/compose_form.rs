//! Draft input and send button.

use leptos::prelude::*;

use super::submit_url;
use crate::ui::components::{Button, ButtonSize, CardFooter, Input, SendIcon};

/// Form that posts the draft; Enter in the input submits it.
///
/// With HTMX the server answers with the whole panel, so the input comes
/// back empty after a send and untouched after a blank submit. Without it
/// the form falls back to a plain POST and the server redirects to the
/// panel page.
#[component]
pub fn ComposeForm(
    #[prop(into)]
    panel_id: String,
    /// Current draft.
    #[prop(into)]
    draft: String,
    /// Disables the send button while a submit would be refused.
    #[prop(default = true)]
    accepts_submit: bool,
) -> impl IntoView {
    let url = submit_url(&panel_id);

    view! {
        <CardFooter class="p-4 pt-0">
            <form
                class="flex w-full items-center space-x-2"
                method="post"
                action=url.clone()
                hx-post=url
                hx-target="#chat-panel"
                hx-swap="outerHTML"
            >
                <Input
                    name="draft"
                    value=draft
                    placeholder="Type your message..."
                    autofocus=true
                />
                <Button button_type="submit" size=ButtonSize::Icon disabled=!accepts_submit>
                    <SendIcon />
                    <span class="sr-only">"Send"</span>
                </Button>
            </form>
        </CardFooter>
    }
}
