//! Chat panel components.
//!
//! The panel is split into two swap targets so the browser can refresh the
//! conversation while the user keeps typing:
//!
//! - `#chat-panel`: the whole card, replaced after a submit
//! - `#chat-conversation`: header image and messages, polled while replies are pending

mod compose_form;
mod conversation;
mod header_image;
mod message_list;
mod panel;

pub use compose_form::ComposeForm;
pub use conversation::Conversation;
pub use header_image::HeaderImage;
pub use message_list::{MessageList, MessageRow};
pub use panel::ChatPanelView;

/// How often the conversation refreshes while replies are pending.
pub const POLL_TRIGGER: &str = "every 1s";

/// URL the compose form posts drafts to.
#[must_use]
pub fn submit_url(panel_id: &str) -> String {
    format!("/panel/{panel_id}/messages")
}

/// URL of the conversation fragment.
#[must_use]
pub fn conversation_url(panel_id: &str) -> String {
    format!("/panel/{panel_id}/conversation")
}
