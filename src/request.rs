//! Chat-completion request payload

use serde::{Deserialize, Serialize};

/// Fixed system message sent ahead of every prompt
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Sampling temperature, fixed per call
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f64
}

impl ChatRequest
{   /// Build the two-message payload for one prompt
    /// Messages are always system-then-user; the prompt is assumed
    /// to be pre-sanitized
    pub fn new(model: &str, prompt: &str) -> Self
    {   ChatRequest
        {   model: model.to_string()
          , messages: vec![
              ChatMessage
              {   role: "system".to_string()
                , content: SYSTEM_PROMPT.to_string()
              }
            , ChatMessage
              {   role: "user".to_string()
                , content: prompt.to_string()
              }
            ]
          , temperature: TEMPERATURE
        }
    }
}
