// logsift/src/commands/probe.rs
//! Network diagnostics: endpoint reachability and a one-shot chat
//! completion against the configured gateway.
//!
//! Nothing in the analysis pipeline consumes probe output; these commands
//! exist to tell apart "the capture shows connection errors" from "the
//! network is down right now". Transport failures are recoverable, logged
//! conditions, never process aborts.

use std::time::Duration;

use anyhow::{Context, Result};
use log::warn;
use reqwest::blocking::Client;
use serde_json::json;

use crate::cli::ChatProbeCommand;

/// Endpoints checked by the connectivity probe. Fixed at design time, like
/// the critical-keyword set: general reachability, the default gateway
/// host, and a secondary API host.
pub const CONNECTIVITY_ENDPOINTS: [&str; 3] = [
    "https://www.google.com",
    "https://ark.cn-beijing.volces.com",
    "https://api.openai.com",
];

const CONNECTIVITY_TIMEOUT: Duration = Duration::from_secs(10);
const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Checks each well-known endpoint and prints one status line per host.
/// An unreachable host is reported and the sweep continues.
pub fn run_connectivity_probe() -> Result<()> {
    let client = Client::builder()
        .timeout(CONNECTIVITY_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    println!("Checking network connectivity...");
    for url in CONNECTIVITY_ENDPOINTS {
        match client.get(url).send() {
            Ok(response) => println!("  {}: {}", url, response.status()),
            Err(e) => {
                warn!("Connectivity check failed for {url}: {e}");
                println!("  {}: unreachable ({})", url, e);
            }
        }
    }
    Ok(())
}

/// Sends a minimal one-message chat completion and prints the outcome.
///
/// The Authorization header is attached only when a credential was
/// supplied; everything else about the request is fixed.
pub fn run_chat_probe(cmd: &ChatProbeCommand) -> Result<()> {
    let endpoint = chat_endpoint(&cmd.base_url);

    println!("Probing chat completion endpoint...");
    println!("  URL: {}", endpoint);
    println!("  Model: {}", cmd.model);

    let client = Client::builder()
        .timeout(CHAT_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let mut request = client.post(&endpoint).json(&chat_payload(&cmd.model));
    if let Some(key) = &cmd.api_key {
        request = request.bearer_auth(key);
    }

    match request.send() {
        Ok(response) => {
            let status = response.status();
            println!("  Status: {}", status);
            let body = response.text().unwrap_or_default();
            if status.is_success() {
                println!("  Response: {}", body);
            } else {
                println!("  Request failed: {}", body);
            }
        }
        Err(e) => {
            warn!("Chat probe transport failure: {e}");
            println!("  Request failed: {}", e);
        }
    }
    Ok(())
}

/// Joins the base URL with the chat-completions path, tolerating a
/// trailing slash.
fn chat_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

fn chat_payload(model: &str) -> serde_json::Value {
    json!({
        "model": model,
        "messages": [
            {"role": "user", "content": "Hello, how are you?"}
        ],
        "max_tokens": 100,
        "temperature": 0.7,
    })
}
