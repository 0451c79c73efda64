use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::Result;

/// Returned without any network call when no API credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
	"I apologize, but the chatbot is not properly configured. Please contact the administrator.";

/// Returned when the endpoint answers successfully but without extractable
/// message content.
pub const EMPTY_COMPLETION_MESSAGE: &str = "I couldn't generate a response. Please try again.";

/// One system+user exchange against an OpenAI-compatible chat-completions
/// endpoint. A single attempt per invocation; retries belong to the caller.
/// The client is shared and injected so connections are reused across calls;
/// the per-request timeout comes from config.
pub async fn complete(
	client: &Client,
	cfg: &hearth_config::ChatProviderConfig,
	system_prompt: &str,
	user_message: &str,
) -> Result<String> {
	if cfg.api_key.is_empty() {
		return Ok(NOT_CONFIGURED_MESSAGE.to_string());
	}

	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"messages": [
			{ "role": "system", "content": system_prompt },
			{ "role": "user", "content": user_message },
		],
		"temperature": cfg.temperature,
		"max_tokens": cfg.max_tokens,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.timeout(Duration::from_millis(cfg.timeout_ms))
		.json(&body)
		.send()
		.await?;
	let status = res.status();

	if !status.is_success() {
		let body = res.text().await.unwrap_or_default();

		return Err(crate::Error::Generation { status: status.as_u16(), body });
	}

	let json: Value = res.json().await?;

	Ok(parse_chat_response(&json))
}

fn parse_chat_response(json: &Value) -> String {
	json.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|content| content.as_str())
		.map(|content| content.to_string())
		.unwrap_or_else(|| EMPTY_COMPLETION_MESSAGE.to_string())
}
