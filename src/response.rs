//! Chat-completion response parsing and reply extraction

use log::{debug, error};
use serde::Deserialize;

use crate::buffer::ResponseBuffer;
use crate::error::Error;

/// Top-level response shape; anything without a "choices" array
/// is a decode error
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<serde_json::Value>
}

/// Parse the accumulated body and extract the first reply, if any
///
/// Choices are walked in order; an entry whose "message" object
/// carries a textual "content" field is the reply. Malformed or
/// absent fields within a choice are skipped, not fatal. Zero
/// matches is not an error: there is nothing to print or log.
pub fn decode(buffer: &ResponseBuffer)
  -> Result<Option<String>, Error>
{   let parsed: ChatResponse
      = serde_json::from_slice(buffer.as_bytes())
        .map_err(|e| {
          error!("Response parse failed: {}", e);
          Error::ParseError(e.to_string())
        })?;

    debug!("Response has {} choices", parsed.choices.len());

    for (index, choice) in parsed.choices.iter().enumerate()
    {   match choice
          .get("message")
          .and_then(|m| m.get("content"))
          .and_then(|c| c.as_str())
        {   Some(content) => {
              debug!("Reply taken from choice {}", index);
              return Ok(Some(content.to_string()));
            }
          , None => {
              debug!(
                "Choice {} has no textual content, skipping",
                index
              );
            }
        }
    }

    Ok(None)
}
