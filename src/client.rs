use log::{debug, trace, error};

use crate::buffer::ResponseBuffer;
use crate::error::Error;
use crate::request::ChatRequest;

/// Fixed production endpoint base
pub const GPT_API_BASE: &str = "https://api.openai.com/v1";

/// HTTP transport for one chat-completion call
pub struct GptClient
{   api_key: String
  , http_client: reqwest::Client
}

impl GptClient
{   pub fn new(api_key: String) -> Self
    {   debug!("Creating GptClient");
        // No timeout configured: a hung connection hangs the
        // whole process
        GptClient
        {   api_key
          , http_client: reqwest::Client::new()
        }
    }

    /// POST the request and stream the full response body into a
    /// buffer before returning
    /// `api_base` is parameterized so tests can point at a stub
    pub async fn post_chat(
      &self
    , api_base: &str
    , request: &ChatRequest
    ) -> Result<ResponseBuffer, Error>
    {   debug!(
          "POST {}/chat/completions for model: {}",
          api_base, request.model
        );

        let mut response = self.http_client
          .post(format!("{}/chat/completions", api_base))
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("API error: {}", error_text);
            return Err(Error::ApiError(
              format!("{}: {}", status, error_text)
            ));
        }

        let mut buffer = ResponseBuffer::new();
        while let Some(chunk) = response.chunk().await
          .map_err(|e| {
            error!("Read error mid-body: {}", e);
            Error::HttpError(e.to_string())
          })?
        {   let consumed = buffer.append(&chunk);
            trace!("Consumed {} byte chunk", consumed);
        }

        debug!("Received {} byte response body", buffer.len());
        Ok(buffer)
    }
}
