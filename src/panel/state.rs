//! The panel state container and its transitions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::message::{Message, MessageId, MessageIdGenerator, Sender};
use crate::responder::{BotReply, ResponderError};

/// How the panel treats a submit while earlier replies are outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Overlapping submissions are accepted; replies land in arrival order.
    #[default]
    Allow,
    /// A new submission is refused until every outstanding reply arrived.
    Serialize,
}

/// Why a submission produced no bot message.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The draft was empty after trimming. Nothing changed.
    #[error("draft is empty")]
    EmptyDraft,

    /// A reply is still outstanding under [`OverlapPolicy::Serialize`].
    #[error("a reply is still pending")]
    Busy,

    /// The ticket is not outstanding: never issued or already completed.
    #[error("no outstanding submission with ticket {0}")]
    UnknownTicket(u64),

    /// The request was sent but failed. The user's message stays.
    #[error(transparent)]
    Responder(#[from] ResponderError),
}

/// Outstanding request created by [`ChatPanel::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    /// Per-panel sequence number, starting at 1.
    pub ticket: u64,
    /// The user message appended for this submission.
    pub user_message: MessageId,
    /// Trimmed text to send to the responder.
    pub payload: String,
}

/// Result of a successful round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub ticket: u64,
    pub bot_message: MessageId,
    pub reply: BotReply,
}

/// Render-ready copy of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub messages: Vec<Message>,
    pub draft: String,
    pub header_image: String,
    pub awaiting_replies: usize,
    /// False while the panel would refuse a submit with [`SubmitError::Busy`].
    pub accepts_submit: bool,
}

impl PanelSnapshot {
    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        self.awaiting_replies > 0
    }
}

/// State of one chat panel: conversation, draft and header image.
///
/// Every method is a plain state transition; no I/O happens here. The
/// asynchronous half of a submission is [`deliver`](super::deliver).
#[derive(Debug)]
pub struct ChatPanel {
    messages: Vec<Message>,
    draft: String,
    header_image: String,
    ids: MessageIdGenerator,
    policy: OverlapPolicy,
    next_ticket: u64,
    in_flight: BTreeSet<u64>,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new(OverlapPolicy::default())
    }
}

impl ChatPanel {
    /// Create an empty panel.
    #[must_use]
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            header_image: String::new(),
            ids: MessageIdGenerator::new(),
            policy,
            next_ticket: 1,
            in_flight: BTreeSet::new(),
        }
    }

    /// Create a panel that opens with a bot greeting. An empty greeting is skipped.
    #[must_use]
    pub fn with_greeting(policy: OverlapPolicy, greeting: &str) -> Self {
        let mut panel = Self::new(policy);
        if !greeting.is_empty() {
            panel.append_bot_message(greeting);
        }
        panel
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn header_image(&self) -> &str {
        &self.header_image
    }

    #[must_use]
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Number of submissions still waiting for a reply.
    #[must_use]
    pub fn awaiting_replies(&self) -> usize {
        self.in_flight.len()
    }

    /// Whether a non-blank draft would be accepted right now.
    #[must_use]
    pub fn accepts_submit(&self) -> bool {
        self.policy == OverlapPolicy::Allow || self.in_flight.is_empty()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub fn append_user_message(&mut self, content: impl Into<String>) -> MessageId {
        self.append(content.into(), Sender::User)
    }

    pub fn append_bot_message(&mut self, content: impl Into<String>) -> MessageId {
        self.append(content.into(), Sender::Bot)
    }

    pub fn set_header_image(&mut self, url: impl Into<String>) {
        self.header_image = url.into();
    }

    fn append(&mut self, content: String, sender: Sender) -> MessageId {
        let id = self.ids.next_id();
        self.messages.push(Message {
            id,
            content,
            sender,
        });
        id
    }

    /// Synchronous half of submit.
    ///
    /// Appends the draft as a user message, clears the draft and registers
    /// an outstanding request. On error nothing is modified.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        let payload = self.draft.trim();
        if payload.is_empty() {
            return Err(SubmitError::EmptyDraft);
        }
        if !self.accepts_submit() {
            return Err(SubmitError::Busy);
        }

        let payload = payload.to_owned();
        let content = self.draft.clone();
        let user_message = self.append_user_message(content);
        self.clear_draft();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.insert(ticket);

        Ok(PendingSubmission {
            ticket,
            user_message,
            payload,
        })
    }

    /// Apply the outcome of the request registered under `ticket`.
    ///
    /// A reply sets the header image when it flags one and appends the bot
    /// message. A failure only retires the ticket. A ticket that is not
    /// outstanding is refused and the panel is left as it was.
    pub fn complete_submission(
        &mut self,
        ticket: u64,
        outcome: Result<BotReply, ResponderError>,
    ) -> Result<Delivered, SubmitError> {
        if !self.in_flight.remove(&ticket) {
            return Err(SubmitError::UnknownTicket(ticket));
        }
        let reply = outcome?;

        if let Some(url) = reply.header_image() {
            self.set_header_image(url);
        }
        let bot_message = self.append_bot_message(reply.message.clone());

        Ok(Delivered {
            ticket,
            bot_message,
            reply,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            messages: self.messages.clone(),
            draft: self.draft.clone(),
            header_image: self.header_image.clone(),
            awaiting_replies: self.awaiting_replies(),
            accepts_submit: self.accepts_submit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error() -> ResponderError {
        ResponderError::Status {
            status: 500,
            body: "boom".into(),
        }
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_draft() {
        let mut panel = ChatPanel::default();
        panel.set_draft("  show me a cat ");

        let pending = panel.begin_submit().unwrap();

        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].sender, Sender::User);
        assert_eq!(panel.messages()[0].content, "  show me a cat ");
        assert_eq!(pending.payload, "show me a cat");
        assert_eq!(pending.user_message, panel.messages()[0].id);
        assert_eq!(panel.draft(), "");
        assert_eq!(panel.awaiting_replies(), 1);
    }

    #[test]
    fn test_blank_drafts_are_a_no_op() {
        for draft in ["", " ", "\t\n  "] {
            let mut panel = ChatPanel::default();
            panel.set_draft(draft);

            assert!(matches!(panel.begin_submit(), Err(SubmitError::EmptyDraft)));
            assert!(panel.messages().is_empty());
            assert_eq!(panel.draft(), draft);
            assert_eq!(panel.awaiting_replies(), 0);
        }
    }

    #[test]
    fn test_text_reply_keeps_header_image() {
        let mut panel = ChatPanel::default();
        panel.set_header_image("http://x/old.png");
        panel.set_draft("hello");
        let pending = panel.begin_submit().unwrap();

        let delivered = panel
            .complete_submission(pending.ticket, Ok(BotReply::text("Hi")))
            .unwrap();

        assert_eq!(panel.messages().len(), 2);
        let bot = &panel.messages()[1];
        assert_eq!(bot.sender, Sender::Bot);
        assert_eq!(bot.content, "Hi");
        assert_eq!(bot.id, delivered.bot_message);
        assert_eq!(panel.header_image(), "http://x/old.png");
        assert_eq!(panel.awaiting_replies(), 0);
    }

    #[test]
    fn test_image_reply_sets_header_image() {
        let mut panel = ChatPanel::default();
        panel.set_draft("cat please");
        let pending = panel.begin_submit().unwrap();

        panel
            .complete_submission(
                pending.ticket,
                Ok(BotReply::with_image("Here", "http://x/img.png")),
            )
            .unwrap();

        assert_eq!(panel.header_image(), "http://x/img.png");
        assert_eq!(panel.messages().last().unwrap().content, "Here");
    }

    #[test]
    fn test_image_flag_without_url_keeps_header_image() {
        let mut panel = ChatPanel::default();
        panel.set_header_image("http://x/old.png");
        panel.set_draft("cat please");
        let pending = panel.begin_submit().unwrap();

        let reply = BotReply {
            message: "No picture today".into(),
            has_image: true,
            image_url: None,
        };
        panel.complete_submission(pending.ticket, Ok(reply)).unwrap();

        assert_eq!(panel.header_image(), "http://x/old.png");
        assert_eq!(panel.messages().last().unwrap().content, "No picture today");
    }

    #[test]
    fn test_stale_ticket_is_refused() {
        let mut panel = ChatPanel::default();
        panel.set_draft("hello");
        let pending = panel.begin_submit().unwrap();
        panel
            .complete_submission(pending.ticket, Ok(BotReply::text("Hi")))
            .unwrap();

        let again = panel.complete_submission(pending.ticket, Ok(BotReply::text("Hi again")));
        assert!(matches!(again, Err(SubmitError::UnknownTicket(t)) if t == pending.ticket));

        let never_issued = panel.complete_submission(99, Ok(BotReply::with_image("x", "http://x/y.png")));
        assert!(matches!(never_issued, Err(SubmitError::UnknownTicket(99))));

        assert_eq!(panel.messages().len(), 2);
        assert_eq!(panel.header_image(), "");
        assert_eq!(panel.awaiting_replies(), 0);
    }

    #[test]
    fn test_failure_keeps_user_message_only() {
        let mut panel = ChatPanel::default();
        panel.set_draft("hello");
        let pending = panel.begin_submit().unwrap();

        let result = panel.complete_submission(pending.ticket, Err(status_error()));

        assert!(matches!(result, Err(SubmitError::Responder(_))));
        assert_eq!(panel.messages().len(), 1);
        assert!(panel.messages()[0].is_user());
        assert_eq!(panel.awaiting_replies(), 0);
    }

    #[test]
    fn test_overlapping_replies_append_in_arrival_order() {
        let mut panel = ChatPanel::new(OverlapPolicy::Allow);
        panel.set_draft("first");
        let first = panel.begin_submit().unwrap();
        panel.set_draft("second");
        let second = panel.begin_submit().unwrap();
        assert_eq!(panel.awaiting_replies(), 2);
        assert!(second.ticket > first.ticket);

        panel
            .complete_submission(second.ticket, Ok(BotReply::text("reply to second")))
            .unwrap();
        panel
            .complete_submission(first.ticket, Ok(BotReply::text("reply to first")))
            .unwrap();

        let contents: Vec<_> = panel.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            ["first", "second", "reply to second", "reply to first"]
        );
    }

    #[test]
    fn test_serialize_policy_refuses_while_awaiting() {
        let mut panel = ChatPanel::new(OverlapPolicy::Serialize);
        panel.set_draft("first");
        let first = panel.begin_submit().unwrap();

        panel.set_draft("second");
        assert!(!panel.accepts_submit());
        assert!(!panel.snapshot().accepts_submit);
        assert!(matches!(panel.begin_submit(), Err(SubmitError::Busy)));
        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.draft(), "second");

        panel
            .complete_submission(first.ticket, Err(status_error()))
            .unwrap_err();
        assert!(panel.accepts_submit());
        assert!(panel.begin_submit().is_ok());
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut panel = ChatPanel::with_greeting(OverlapPolicy::Allow, "hello");
        for i in 0..50 {
            panel.append_user_message(format!("m{i}"));
            panel.append_bot_message(format!("r{i}"));
        }

        let ids: Vec<_> = panel.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_greeting() {
        let panel = ChatPanel::with_greeting(OverlapPolicy::Allow, "Hello!");
        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].sender, Sender::Bot);

        let silent = ChatPanel::with_greeting(OverlapPolicy::Allow, "");
        assert!(silent.messages().is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut panel = ChatPanel::default();
        panel.set_draft("typing");
        let snapshot = panel.snapshot();

        assert_eq!(snapshot.draft, "typing");
        assert!(!snapshot.is_awaiting());
        assert!(snapshot.accepts_submit);
    }
}
