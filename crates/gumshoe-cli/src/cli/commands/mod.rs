//! Command handlers.

pub mod ask;
pub mod config;
pub mod stream;

use anyhow::Result;
use gumshoe_core::config::Config;
use gumshoe_core::providers::groq::{GroqClient, GroqConfig};

/// Joins prompt arguments with single spaces, as the shell supplied them.
pub(crate) fn join_prompt(args: &[String]) -> String {
    args.join(" ")
}

/// Builds a client from config plus environment. The credential is resolved
/// here and handed to the client; nothing reads the environment afterwards.
pub(crate) fn build_client(config: &Config) -> Result<GroqClient> {
    let groq = GroqConfig::from_env(
        config.model.clone(),
        config.providers.groq.base_url.as_deref(),
        config.providers.groq.api_key.as_deref(),
    )?;
    Ok(GroqClient::new(groq))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prompt text equals the arguments joined by single spaces.
    #[test]
    fn test_join_prompt() {
        let args = vec!["what".to_string(), "is".to_string(), "rust?".to_string()];
        assert_eq!(join_prompt(&args), "what is rust?");
        assert_eq!(join_prompt(&[]), "");
    }
}
