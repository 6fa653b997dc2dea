pub mod anthropic;

use anyhow::Result;
use async_trait::async_trait;

pub use anthropic::AnthropicService;

/// A single, non-streaming text completion.
///
/// The handler only sees this trait, so tests can swap in a mock and the
/// process can wire in whichever upstream it was configured with.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String>;
}
