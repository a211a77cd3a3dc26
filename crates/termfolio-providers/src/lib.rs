//! AI provider layer for termfolio.
//!
//! A uniform client over three incompatible chat-completion protocols.
//!
//! # Architecture
//!
//! - [`traits::ChatProvider`] — trait that all providers implement
//! - [`openai::OpenAiProvider`] — OpenAI `/v1/chat/completions` (and any
//!   compatible relay/proxy)
//! - [`gemini::GeminiProvider`] — Google `generateContent` API
//! - [`anthropic::AnthropicProvider`] — Anthropic Messages API
//! - [`factory::create_provider`] — builder from a [`ChatConfig`]
//!
//! [`ChatConfig`]: termfolio_core::ChatConfig

pub mod anthropic;
pub mod error;
pub mod factory;
pub mod gemini;
pub mod openai;
pub mod traits;

// Re-export main types for convenience
pub use anthropic::AnthropicProvider;
pub use error::ProviderError;
pub use factory::create_provider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use traits::ChatProvider;
