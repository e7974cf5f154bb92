//! Chat panel state.
//!
//! A panel holds the conversation, the user's draft and the header image.
//! Submitting is split in two halves so the page can be re-rendered while a
//! reply is still on its way:
//!
//! 1. [`ChatPanel::begin_submit`] appends the user's message, clears the
//!    draft and hands back a [`PendingSubmission`].
//! 2. [`deliver`] sends the payload to a [`Responder`](crate::responder::Responder)
//!    and applies the reply (or the failure) to the panel.
//!
//! # Example
//!
//! ```rust
//! use chat_panel::panel::{ChatPanel, OverlapPolicy};
//! use chat_panel::responder::BotReply;
//!
//! let mut panel = ChatPanel::new(OverlapPolicy::Allow);
//! panel.set_draft("show me a cat");
//!
//! let pending = panel.begin_submit().unwrap();
//! assert_eq!(panel.messages().len(), 1);
//! assert_eq!(panel.draft(), "");
//!
//! panel
//!     .complete_submission(pending.ticket, Ok(BotReply::with_image("Here", "http://x/cat.png")))
//!     .unwrap();
//! assert_eq!(panel.header_image(), "http://x/cat.png");
//! ```

mod message;
mod state;
mod store;
mod submit;

pub use message::{Message, MessageId, MessageIdGenerator, Sender};
pub use state::{ChatPanel, Delivered, OverlapPolicy, PanelSnapshot, PendingSubmission, SubmitError};
pub use store::{PanelSettings, PanelStore};
pub use submit::{SharedPanel, deliver, spawn_delivery, submit};
