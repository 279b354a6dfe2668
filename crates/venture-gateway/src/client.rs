use std::time::{Duration, Instant};

use venture_config::{GatewayConfig, OpenRouterConfig, VentureConfig};
use venture_core::{IdeaBatch, StartupIdea, ValidationAnalysis, ValidationReport};

use crate::error::GatewayError;
use crate::http::{check_response, completion_text};
use crate::parse::{decode_reply, excerpt};
use crate::prompt::{IDEA_COUNT, IdeaCriteria, IdeaSubmission, idea_prompt, validation_prompt};
use crate::transport::{CompletionCall, HttpTransport, Transport};
use crate::wire::{ChatMessage, ChatRequest};

/// Mediates between structured form input and the completion endpoint.
///
/// Every call is a single attempt: no retry, no caching of earlier replies.
pub struct Gateway<T = HttpTransport> {
    transport: T,
    openrouter: OpenRouterConfig,
    params: GatewayConfig,
}

impl Gateway<HttpTransport> {
    /// Build a gateway with a real HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &VentureConfig) -> Result<Self, GatewayError> {
        let timeout = config.gateway.request_timeout_secs.map(Duration::from_secs);
        Ok(Self::with_transport(
            HttpTransport::new(timeout)?,
            config.openrouter.clone(),
            config.gateway.clone(),
        ))
    }
}

impl<T: Transport> Gateway<T> {
    #[must_use]
    pub fn with_transport(
        transport: T,
        openrouter: OpenRouterConfig,
        params: GatewayConfig,
    ) -> Self {
        Self {
            transport,
            openrouter,
            params,
        }
    }

    /// Whether a credential is available. Actions fail fast when it is not.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.openrouter.is_configured()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.openrouter.model
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask the model for startup ideas matching `criteria`.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::NotConfigured`] before any request when the key is missing
    /// - [`GatewayError::Http`] / [`GatewayError::Api`] on transport failure
    /// - [`GatewayError::Format`] when the reply is not an idea batch, or holds no ideas
    pub async fn generate_ideas(
        &self,
        criteria: &IdeaCriteria,
    ) -> Result<Vec<StartupIdea>, GatewayError> {
        let reply = self
            .complete("generate_ideas", idea_prompt(criteria), self.params.idea_max_tokens)
            .await?;
        let batch: IdeaBatch = decode_reply(&reply)?;

        if batch.ideas.is_empty() {
            return Err(GatewayError::Format {
                reason: "response contained no ideas".to_string(),
                raw: excerpt(&reply),
            });
        }
        if batch.ideas.len() != IDEA_COUNT {
            tracing::warn!(
                expected = IDEA_COUNT,
                received = batch.ideas.len(),
                "model returned an unexpected number of ideas"
            );
        }
        Ok(batch.ideas)
    }

    /// Ask the model for a market validation report on `idea`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_ideas`], with [`GatewayError::Format`] raised
    /// when the reply is not a complete validation analysis.
    pub async fn validate_idea(
        &self,
        idea: &IdeaSubmission,
    ) -> Result<ValidationReport, GatewayError> {
        let reply = self
            .complete(
                "validate_idea",
                validation_prompt(idea),
                self.params.validation_max_tokens,
            )
            .await?;
        let analysis: ValidationAnalysis = decode_reply(&reply)?;
        Ok(analysis.into_report(idea.name.clone()))
    }

    /// Send one prompt and return the assistant's reply text.
    async fn complete(
        &self,
        operation: &'static str,
        prompt: String,
        max_tokens: u32,
    ) -> Result<String, GatewayError> {
        if !self.is_configured() {
            tracing::warn!(operation, "no OpenRouter API key configured; request not sent");
            return Err(GatewayError::NotConfigured);
        }

        let body = ChatRequest {
            model: self.openrouter.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens,
            temperature: self.params.temperature,
        };
        let call = CompletionCall {
            endpoint: &self.openrouter.api_url,
            api_key: self.openrouter.api_key.trim(),
            app_title: &self.openrouter.app_title,
            body: &body,
        };

        tracing::debug!(operation, model = %body.model, max_tokens, "sending completion request");
        let started = Instant::now();

        let result: Result<String, GatewayError> = async {
            let resp = check_response(self.transport.send(call).await?).await?;
            completion_text(resp).await
        }
        .await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(reply) => {
                tracing::info!(operation, elapsed_ms, reply_len = reply.len(), "completion received");
            }
            Err(error) => {
                tracing::warn!(operation, elapsed_ms, status = ?error.status(), %error, "completion failed");
            }
        }
        result
    }
}
