//! Stream command handler (streaming relay).

use std::io::{self, Write};

use anyhow::{Context, Result};
use futures_util::StreamExt;
use gumshoe_core::config::Config;
use gumshoe_core::providers::{ChatMessage, StreamEvent};

use super::{build_client, join_prompt};

/// Prompt used when no arguments are given.
const DEFAULT_PROMPT: &str = "Hello";

pub async fn run(prompt_args: &[String], config: &Config) -> Result<()> {
    let joined = join_prompt(prompt_args);
    let prompt = if joined.trim().is_empty() {
        DEFAULT_PROMPT.to_string()
    } else {
        joined
    };

    let client = build_client(config)?;
    let messages = vec![ChatMessage::user(prompt)];
    let mut stream = client
        .complete_stream(&messages, &config.stream_params())
        .await
        .context("start streaming completion")?;

    // Relay fragments as they arrive: write, flush, never buffer. Output is
    // exactly the fragment concatenation, no trailing newline. Reasoning tags
    // are not stripped here; a span may split across fragment boundaries.
    let mut stdout = io::stdout();
    while let Some(event) = stream.next().await {
        match event.context("read stream")? {
            StreamEvent::TextDelta { text } => {
                stdout
                    .write_all(text.as_bytes())
                    .context("write fragment")?;
                stdout.flush().context("flush stdout")?;
            }
            StreamEvent::Completed { finish_reason } => {
                tracing::debug!(?finish_reason, "stream completed");
                break;
            }
            StreamEvent::Error {
                error_type,
                message,
            } => {
                return Err(gumshoe_core::providers::ProviderError::api_error(
                    &error_type,
                    &message,
                )
                .into());
            }
        }
    }

    Ok(())
}
