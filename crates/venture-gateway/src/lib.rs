//! # venture-gateway
//!
//! Prompt/response gateway between Venture's forms and the OpenRouter
//! chat-completions API.
//!
//! - [`Gateway::generate_ideas`]: criteria in, [`StartupIdea`] records out
//! - [`Gateway::validate_idea`]: idea in, [`ValidationReport`] out
//!
//! Each operation builds a fixed-shape prompt, performs exactly one HTTP
//! request and decodes the reply text with serde. Failures are classified by
//! [`ErrorKind`]: configuration (no credential, nothing sent), transport
//! (network or non-success status) and format (reply not decodable).
//!
//! The HTTP exchange sits behind [`Transport`] so callers and tests can swap
//! in their own implementation.
//!
//! [`StartupIdea`]: venture_core::StartupIdea
//! [`ValidationReport`]: venture_core::ValidationReport

mod client;
mod error;
mod http;
pub mod parse;
pub mod prompt;
pub mod transport;
pub mod wire;

pub use client::Gateway;
pub use error::{ErrorKind, GatewayError};
pub use prompt::{IdeaCriteria, IdeaSubmission};
pub use transport::{CompletionCall, HttpTransport, Transport};
