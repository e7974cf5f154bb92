//! Message bubbles.

use leptos::prelude::*;

use crate::panel::{Message, Sender};
use crate::ui::components::Avatar;

/// All messages in display order.
#[component]
pub fn MessageList(messages: Vec<Message>) -> impl IntoView {
    view! {
        <ul class="space-y-4">
            {messages
                .into_iter()
                .map(|message| view! { <MessageRow message=message /> })
                .collect_view()}
        </ul>
    }
}

/// One message: user messages on the right, bot messages on the left.
#[component]
pub fn MessageRow(message: Message) -> impl IntoView {
    let is_user = message.sender == Sender::User;
    let (justify, bubble, sender) = if is_user {
        ("justify-end", "bg-primary text-primary-foreground", "user")
    } else {
        ("justify-start", "bg-muted", "bot")
    };
    let row_classes = format!("flex {justify} mb-4");
    let bubble_classes = format!("rounded-lg p-3 max-w-[70%] whitespace-pre-wrap {bubble}");

    view! {
        <li class=row_classes data-message-id=message.id.to_string() data-sender=sender>
            {(!is_user).then(|| view! { <Avatar fallback="Bot" alt="Bot Avatar" class="mr-2" /> })}
            <div class=bubble_classes>{message.content}</div>
            {is_user.then(|| view! { <Avatar fallback="You" alt="User Avatar" class="ml-2" /> })}
        </li>
    }
}
