/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct and its
 * implementation, which submits chunk text to the configured AI provider.
 */

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use url::Url;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::{ProviderError, TranslationError};
use crate::language_utils;
use crate::providers::gemini::{Gemini, GeminiRequest};
use crate::providers::ollama::{Ollama, GenerationRequest};
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use super::prompts::PromptTemplate;

/// Upper bound on completion size for providers that require one
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Parse an endpoint string into host and port
fn parse_endpoint(endpoint: &str) -> Result<(String, u16)> {
    if endpoint.is_empty() {
        return Err(anyhow!("Endpoint cannot be empty"));
    }

    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("http://{}", endpoint))?
    };

    let host = url.host_str()
        .ok_or_else(|| anyhow!("Invalid host in endpoint: {}", endpoint))?
        .to_string();

    let port = url.port().unwrap_or(if url.scheme() == "https" { 443 } else { 80 });

    Ok((host, port))
}

/// Translation provider implementation variants
enum TranslationProviderImpl {
    /// Google Gemini API service
    Gemini {
        /// Client instance
        client: Gemini,
    },

    /// Ollama LLM service
    Ollama {
        /// Client instance
        client: Ollama,
    },

    /// Anthropic API service
    Anthropic {
        /// Client instance
        client: Anthropic,
    },
}

/// Main translation service for document translation
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: TranslationConfig,

    /// Rendered translation instruction sent with every chunk
    instruction: String,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    ///
    /// The instruction template is rendered once, with full language names
    /// where the codes are known (e.g. "en" becomes "English").
    pub fn new(
        config: TranslationConfig,
        source_language: &str,
        target_language: &str,
    ) -> Result<Self> {
        let provider = match config.provider {
            ConfigTranslationProvider::Gemini => TranslationProviderImpl::Gemini {
                client: Gemini::new(config.get_api_key(), config.get_endpoint()),
            },
            ConfigTranslationProvider::Ollama => {
                let (host, port) = parse_endpoint(&config.get_endpoint())?;
                TranslationProviderImpl::Ollama {
                    client: Ollama::new(host, port),
                }
            },
            ConfigTranslationProvider::Anthropic => TranslationProviderImpl::Anthropic {
                client: Anthropic::new(config.get_api_key(), config.get_endpoint()),
            },
        };

        let source_name = language_utils::get_language_name(source_language)
            .unwrap_or_else(|_| source_language.to_string());
        let target_name = language_utils::get_language_name(target_language)
            .unwrap_or_else(|_| target_language.to_string());
        let instruction =
            PromptTemplate::new(&config.common.system_prompt).render(&source_name, &target_name);

        Ok(Self {
            provider,
            config,
            instruction,
        })
    }

    /// The rendered instruction used for every request
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Test the connection to the translation provider
    pub async fn test_connection(&self) -> Result<()> {
        match &self.provider {
            TranslationProviderImpl::Gemini { client } => {
                client.test_connection(&self.config.get_model()).await
            },
            TranslationProviderImpl::Ollama { client } => {
                client.version().await.map(|_| ())
            },
            TranslationProviderImpl::Anthropic { client } => {
                client.test_connection(&self.config.get_model()).await
            },
        }
    }

    /// Translate a single text string using the configured provider
    ///
    /// One request per call; a failure is returned to the caller without
    /// retrying.
    pub async fn translate_text(&self, text: &str) -> Result<String, TranslationError> {
        // Skip empty text
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let temperature = self.config.common.temperature;

        let translated = match &self.provider {
            TranslationProviderImpl::Gemini { client } => {
                let prompt = format!("{}\n\n{}", self.instruction, text);
                let request = GeminiRequest::new(self.config.get_model(), prompt)
                    .temperature(temperature);

                let response = client.complete(request).await
                    .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

                Gemini::extract_text_from_response(&response)
            },
            TranslationProviderImpl::Ollama { client } => {
                let request = GenerationRequest::new(self.config.get_model(), text)
                    .system(&self.instruction)
                    .temperature(temperature);

                let response = client.generate(request).await
                    .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

                response.response
            },
            TranslationProviderImpl::Anthropic { client } => {
                let request = AnthropicRequest::new(self.config.get_model(), DEFAULT_MAX_TOKENS)
                    .system(&self.instruction)
                    .add_message("user", text)
                    .temperature(temperature);

                let response = client.complete(request).await
                    .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

                Anthropic::extract_text_from_response(&response)
            },
        };

        Ok(translated.trim().to_string())
    }
}

#[async_trait]
impl super::pipeline::ChunkTranslator for TranslationService {
    async fn translate_chunk(&self, text: &str) -> Result<String, TranslationError> {
        self.translate_text(text).await
    }
}
