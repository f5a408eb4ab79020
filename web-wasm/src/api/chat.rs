//! `/chat` endpoint client

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Request body for `POST /chat`
#[derive(Serialize)]
struct ChatRequest {
    message: String,
}

/// Response body from `POST /chat`; fields other than `response` are ignored
#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// POST the user's message to the chat endpoint and return the reply.
pub async fn send_message(chat_url: &str, message: &str) -> Result<String, JsValue> {
    let body = serde_json::to_string(&ChatRequest {
        message: message.to_string(),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(chat_url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Chat request failed: {}",
            resp.status()
        )));
    }

    let text_value = JsFuture::from(resp.text()?).await?;
    let text = text_value
        .as_string()
        .ok_or_else(|| JsValue::from_str("Non-text response body"))?;

    let response: ChatResponse =
        serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(response.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialize() {
        let request = ChatRequest {
            message: "Who wrote Adoro Te Devote?".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(json, r#"{"message":"Who wrote Adoro Te Devote?"}"#);
    }

    #[test]
    fn test_chat_response_deserialize() {
        let json = r#"{"response": "It is attributed to Thomas Aquinas."}"#;
        let response: ChatResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.response, "It is attributed to Thomas Aquinas.");
    }

    #[test]
    fn test_chat_response_ignores_unknown_fields() {
        let json = r#"{"response": "ok", "sources": ["hymnal"], "latency_ms": 12}"#;
        let response: ChatResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.response, "ok");
    }

    #[test]
    fn test_chat_response_rejects_missing_field() {
        let json = r#"{"reply": "wrong shape"}"#;
        assert!(serde_json::from_str::<ChatResponse>(json).is_err());
    }
}
