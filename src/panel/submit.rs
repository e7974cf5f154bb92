//! The asynchronous half of a submission.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::state::{ChatPanel, Delivered, PendingSubmission, SubmitError};
use crate::responder::Responder;

/// A panel shared between request handlers and in-flight submissions.
///
/// The lock is only held for state transitions, never across a responder call.
pub type SharedPanel = Arc<Mutex<ChatPanel>>;

/// Submit `draft` and wait for the reply.
pub async fn submit(
    panel: &SharedPanel,
    responder: &dyn Responder,
    draft: impl Into<String>,
) -> Result<Delivered, SubmitError> {
    let pending = {
        let mut guard = panel.lock().await;
        guard.set_draft(draft);
        guard.begin_submit()?
    };
    deliver(panel, responder, pending).await
}

/// Send an already registered submission and apply its outcome.
pub async fn deliver(
    panel: &SharedPanel,
    responder: &dyn Responder,
    pending: PendingSubmission,
) -> Result<Delivered, SubmitError> {
    let outcome = responder.process(&pending.payload).await;
    let result = panel.lock().await.complete_submission(pending.ticket, outcome);

    match &result {
        Ok(delivered) => info!(
            name: "panel.reply.received",
            ticket = delivered.ticket,
            has_image = delivered.reply.header_image().is_some(),
            "Bot reply appended"
        ),
        Err(SubmitError::Responder(err)) => warn!(
            name: "responder.request.failed",
            ticket = pending.ticket,
            kind = err.kind(),
            error = %err,
            "Error sending message"
        ),
        Err(SubmitError::UnknownTicket(ticket)) => warn!(
            name: "panel.ticket.unknown",
            ticket,
            "Reply for a submission that is not outstanding"
        ),
        Err(_) => {}
    }

    result
}

/// Fire-and-forget [`deliver`]: the UI's policy of logging failures and
/// showing nothing to the user.
pub fn spawn_delivery(
    panel: SharedPanel,
    responder: Arc<dyn Responder>,
    pending: PendingSubmission,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        // Already logged inside `deliver`.
        let _ = deliver(&panel, responder.as_ref(), pending).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{OverlapPolicy, Sender};
    use crate::responder::{BotReply, ResponderError};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    struct Scripted(BotReply);

    #[async_trait]
    impl Responder for Scripted {
        async fn process(&self, _input: &str) -> Result<BotReply, ResponderError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl Responder for Failing {
        async fn process(&self, _input: &str) -> Result<BotReply, ResponderError> {
            Err(ResponderError::Status {
                status: 502,
                body: String::new(),
            })
        }
    }

    /// Echoes the input once released.
    struct Gated(Arc<Notify>);

    #[async_trait]
    impl Responder for Gated {
        async fn process(&self, input: &str) -> Result<BotReply, ResponderError> {
            self.0.notified().await;
            Ok(BotReply::text(format!("echo: {input}")))
        }
    }

    fn shared() -> SharedPanel {
        Arc::new(Mutex::new(ChatPanel::new(OverlapPolicy::Allow)))
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let panel = shared();
        let responder = Scripted(BotReply::with_image("Here", "http://x/img.png"));

        let delivered = submit(&panel, &responder, "cat").await.unwrap();

        let guard = panel.lock().await;
        assert_eq!(guard.messages().len(), 2);
        assert_eq!(guard.messages()[1].id, delivered.bot_message);
        assert_eq!(guard.header_image(), "http://x/img.png");
    }

    #[tokio::test]
    async fn test_submit_failure_is_returned_not_raised() {
        let panel = shared();

        let result = submit(&panel, &Failing, "hello").await;

        assert!(matches!(result, Err(SubmitError::Responder(_))));
        let guard = panel.lock().await;
        assert_eq!(guard.messages().len(), 1);
        assert_eq!(guard.messages()[0].sender, Sender::User);
    }

    #[tokio::test]
    async fn test_submit_blank_sends_nothing() {
        let panel = shared();
        let result = submit(&panel, &Failing, "   ").await;

        assert!(matches!(result, Err(SubmitError::EmptyDraft)));
        assert!(panel.lock().await.messages().is_empty());
    }

    #[tokio::test]
    async fn test_user_message_visible_before_reply() {
        let panel = shared();
        let gate = Arc::new(Notify::new());
        let responder: Arc<dyn Responder> = Arc::new(Gated(Arc::clone(&gate)));

        let pending = {
            let mut guard = panel.lock().await;
            guard.set_draft("ping");
            guard.begin_submit().unwrap()
        };
        let handle = spawn_delivery(Arc::clone(&panel), responder, pending);

        {
            let guard = panel.lock().await;
            assert_eq!(guard.messages().len(), 1);
            assert_eq!(guard.awaiting_replies(), 1);
            assert_eq!(guard.draft(), "");
        }

        gate.notify_one();
        handle.await.unwrap();

        let guard = panel.lock().await;
        assert_eq!(guard.messages().len(), 2);
        assert_eq!(guard.messages()[1].content, "echo: ping");
        assert_eq!(guard.awaiting_replies(), 0);
    }
}
