//! Client side of the external responder.
//!
//! The responder receives the user's trimmed text and answers with a
//! [`BotReply`]. The [`Responder`] trait is the seam between the panel and
//! the transport; [`HttpResponder`] is the production implementation.
//!
//! # Wire format
//!
//! ```text
//! POST /process   {"input": "show me a cat"}
//! 200 OK          {"response": {"message": "...", "has_image": true, "image_url": "https://..."}}
//! ```

mod error;
mod http;
mod types;

use async_trait::async_trait;

pub use error::ResponderError;
pub use http::HttpResponder;
pub use types::{BotReply, ProcessRequest, ProcessResponse};

/// Something that turns user input into a bot reply.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Send one input and wait for its reply.
    async fn process(&self, input: &str) -> Result<BotReply, ResponderError>;
}
