//! Ask command handler (batch relay).

use anyhow::{Context, Result};
use gumshoe_core::config::Config;
use gumshoe_core::providers::ChatMessage;
use gumshoe_core::providers::thinking::strip_reasoning;

use super::{build_client, join_prompt};

pub async fn run(prompt_args: &[String], config: &Config, show_reasoning: bool) -> Result<()> {
    let prompt = join_prompt(prompt_args);
    // Usage check comes before credential resolution: no prompt, no network.
    if prompt.trim().is_empty() {
        anyhow::bail!("no prompt provided");
    }

    let client = build_client(config)?;
    let messages = vec![ChatMessage::user(prompt)];
    let response = client
        .complete(&messages, &config.ask_params())
        .await
        .context("chat completion")?;

    let output = if show_reasoning {
        response.trim().to_string()
    } else {
        strip_reasoning(&response)
    };
    println!("{output}");

    Ok(())
}
