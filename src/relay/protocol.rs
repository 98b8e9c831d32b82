use serde::{Deserialize, Serialize};

use crate::common::Role;

/// One history entry, sent verbatim as request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ApiMessage>,
    pub stream: bool,
}

/// One decoded stream chunk. Only the delta path is consumed; everything
/// else the endpoint sends (ids, usage, finish reasons) is ignored.
#[derive(Debug, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extracts `choices[0].delta.content` from a raw `data:` payload.
/// `Ok(None)` means a well-formed chunk without text (role prelude,
/// finish marker); `Err` means the payload is not chunk JSON at all.
pub fn delta_content(payload: &str) -> Result<Option<String>, serde_json::Error> {
    let chunk: StreamChunk = serde_json::from_str(payload)?;
    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_delta_text() {
        let payload = r#"{"choices":[{"delta":{"content":"Hi"}}]}"#;
        assert_eq!(delta_content(payload).unwrap(), Some("Hi".to_string()));
    }

    #[test]
    fn tolerates_missing_delta_content() {
        // Role-only prelude chunk, as OpenAI-compatible servers send first.
        let payload = r#"{"choices":[{"delta":{"role":"assistant"}}]}"#;
        assert_eq!(delta_content(payload).unwrap(), None);
    }

    #[test]
    fn tolerates_empty_choices() {
        assert_eq!(delta_content(r#"{"choices":[]}"#).unwrap(), None);
        assert_eq!(delta_content(r#"{}"#).unwrap(), None);
    }

    #[test]
    fn rejects_non_json_payload() {
        assert!(delta_content("not json").is_err());
    }

    #[test]
    fn request_serializes_lowercase_roles() {
        let request = CompletionRequest {
            model: "ChatGLM3-6B".to_string(),
            messages: vec![ApiMessage {
                role: Role::User,
                content: "hello".to_string(),
            }],
            stream: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["stream"], true);
    }
}
