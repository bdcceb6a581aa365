//! Response fixtures for integration tests.

#![allow(dead_code)]

use serde_json::json;
use wiremock::ResponseTemplate;

/// Builds a non-streaming chat completion body with the given content.
pub fn completion_json(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "deepseek-r1-distill-llama-70b",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12}
    })
}

/// Builds an SSE body delivering the given fragments in order, then a
/// finish_reason chunk and the `[DONE]` marker.
pub fn chat_sse(fragments: &[&str]) -> String {
    let mut body = String::new();
    for fragment in fragments {
        let chunk = json!({
            "choices": [{"index": 0, "delta": {"content": fragment}}]
        });
        body.push_str(&format!("data: {chunk}\n\n"));
    }
    let finish = json!({
        "choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}]
    });
    body.push_str(&format!("data: {finish}\n\n"));
    body.push_str("data: [DONE]\n\n");
    body
}

/// Builds an SSE body ending in a provider error event.
pub fn chat_sse_error(error_type: &str, message: &str) -> String {
    let chunk = json!({"error": {"type": error_type, "message": message}});
    format!("data: {chunk}\n\n")
}

/// Wraps an SSE body string in a ResponseTemplate.
pub fn sse_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/event-stream")
        .set_body_string(body.to_string())
}

/// Non-streaming completion wrapped in a ResponseTemplate.
pub fn completion_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(completion_json(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_sse_layout() {
        let body = chat_sse(&["Hel", "lo"]);
        assert!(body.contains(r#""content":"Hel""#));
        assert!(body.contains(r#""content":"lo""#));
        assert!(body.contains(r#""finish_reason":"stop""#));
        assert!(body.ends_with("data: [DONE]\n\n"));
    }

    #[test]
    fn test_completion_json_shape() {
        let body = completion_json("hi");
        assert_eq!(body["choices"][0]["message"]["content"], "hi");
    }
}
