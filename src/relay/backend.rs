use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::BoxStream;

use super::error::RelayError;
use super::protocol::CompletionRequest;

/// Raw body chunks as they come off the wire.
pub type ByteStream = BoxStream<'static, Result<Vec<u8>, RelayError>>;

/// Seam between the relay loop and the transport, so tests can script
/// the byte stream without a live endpoint.
pub trait CompletionBackend: Send {
    fn open_stream<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> BoxFuture<'a, Result<ByteStream, RelayError>>;
}

/// Production transport: one streaming POST per turn against an
/// OpenAI-compatible chat-completions endpoint.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpBackend {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl CompletionBackend for HttpBackend {
    fn open_stream<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> BoxFuture<'a, Result<ByteStream, RelayError>> {
        Box::pin(async move {
            let response = self
                .http
                .post(self.completions_url())
                .bearer_auth(&self.api_key)
                .json(request)
                .send()
                .await
                .map_err(|err| RelayError::Connect(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RelayError::Status(status.as_u16()));
            }

            let stream = response
                .bytes_stream()
                .map(|chunk| match chunk {
                    Ok(bytes) => Ok(bytes.to_vec()),
                    Err(err) => Err(RelayError::Interrupted(err.to_string())),
                })
                .boxed();
            Ok(stream)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let backend = HttpBackend::new("http://server-llm-dev:8000/v1/".to_string(), "EMPTY".to_string());
        assert_eq!(
            backend.completions_url(),
            "http://server-llm-dev:8000/v1/chat/completions"
        );
    }
}
