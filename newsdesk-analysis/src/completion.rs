//! Groq chat completion client
//!
//! Groq exposes an OpenAI-compatible endpoint, so the client is driven
//! through async-openai with a custom api base. One request per call:
//! single user message, fixed sampling, non-streaming. Provider failures
//! come back as a [`CompletionOutcome`] variant, never as an `Err`.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use tracing::{instrument, warn};

use newsdesk_core::{CompletionOutcome, NewsdeskError};

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Chat completion client for the analysis stage
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl CompletionClient {
    /// Create a client from the environment
    ///
    /// Requires `GROQ_API_KEY`; fails with a configuration error otherwise.
    /// `GROQ_MODEL` overrides the default model identifier.
    pub fn new() -> Result<Self, NewsdeskError> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| NewsdeskError::config("GROQ_API_KEY environment variable not set"))?;

        let client = Self::with_api_key(api_key);
        match std::env::var("GROQ_MODEL") {
            Ok(model) if !model.is_empty() => Ok(client.with_model(&model)),
            _ => Ok(client),
        }
    }

    /// Create a client with an explicit credential
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(GROQ_API_BASE);

        Self {
            client: Client::with_config(config),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Model identifier this client sends
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one completion request for the prompt
    ///
    /// The prompt goes out as a single user-role message with temperature
    /// 0.7 and a 1024-token output cap. No retry, no truncation of an
    /// oversized prompt; whatever the endpoint reports on failure is
    /// embedded in the returned outcome.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn complete(&self, prompt: &str) -> CompletionOutcome {
        let message = match ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
        {
            Ok(message) => message,
            Err(e) => return CompletionOutcome::ProviderError(e.to_string()),
        };

        let request = match CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([message.into()])
            .temperature(TEMPERATURE)
            .max_tokens(MAX_OUTPUT_TOKENS)
            .build()
        {
            Ok(request) => request,
            Err(e) => return CompletionOutcome::ProviderError(e.to_string()),
        };

        match self.client.chat().create(request).await {
            Ok(response) => match response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
            {
                Some(text) => CompletionOutcome::Report(text),
                None => CompletionOutcome::NoResponse,
            },
            Err(e) => {
                warn!("Completion request failed: {}", e);
                CompletionOutcome::ProviderError(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let client = CompletionClient::with_api_key("test-key");
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_model_override() {
        let client = CompletionClient::with_api_key("test-key").with_model("llama-3.1-8b-instant");
        assert_eq!(client.model(), "llama-3.1-8b-instant");
    }
}
