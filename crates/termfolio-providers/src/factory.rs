//! Provider factory — selects and constructs the right adapter from
//! configuration.

use tracing::debug;

use termfolio_core::ChatConfig;

use crate::anthropic::AnthropicProvider;
use crate::error::ProviderError;
use crate::gemini::GeminiProvider;
use crate::openai::OpenAiProvider;
use crate::traits::ChatProvider;

/// Create a provider instance from chat settings.
///
/// Provider names match case-insensitively. Construction is pure — no
/// network I/O until the first `chat` call.
pub fn create_provider(config: &ChatConfig) -> Result<Box<dyn ChatProvider>, ProviderError> {
    if config.provider.is_empty() {
        return Err(ProviderError::Configuration("provider"));
    }
    if config.api_key.is_empty() {
        return Err(ProviderError::Configuration("api key"));
    }
    if config.model.is_empty() {
        return Err(ProviderError::Configuration("model"));
    }

    debug!(
        provider = %config.provider,
        model = %config.model,
        base_url = config.base_url.as_deref().unwrap_or("default"),
        "creating chat provider"
    );

    match config.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiProvider::new(config))),
        "openai" => Ok(Box::new(OpenAiProvider::new(config))),
        "anthropic" => Ok(Box::new(AnthropicProvider::new(config))),
        _ => Err(ProviderError::Unsupported {
            provider: config.provider.clone(),
        }),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
