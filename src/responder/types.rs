//! Wire types for the `/process` exchange.

use serde::{Deserialize, Serialize};

/// Request body sent to the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Trimmed user text.
    pub input: String,
}

/// Success body returned by the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// The bot's reply.
    pub response: BotReply,
}

/// A single bot reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    /// Text to append to the conversation.
    pub message: String,
    /// Whether `image_url` should replace the header image.
    #[serde(default)]
    pub has_image: bool,
    /// Image to show in the panel header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl BotReply {
    /// Plain text reply without an image.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            has_image: false,
            image_url: None,
        }
    }

    /// Reply that carries a header image.
    pub fn with_image(message: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            has_image: true,
            image_url: Some(image_url.into()),
        }
    }

    /// The header image to apply, if the reply flags one.
    ///
    /// A reply that sets `has_image` without a URL leaves the header alone.
    #[must_use]
    pub fn header_image(&self) -> Option<&str> {
        if self.has_image {
            self.image_url.as_deref()
        } else {
            None
        }
    }
}
