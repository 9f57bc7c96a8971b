use std::fmt;

/// Custom error type for gptcom operations
/// Every variant is terminal for the single-shot process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Required environment variable is unset or empty
    ConfigMissing(String)
  , /// Prompt shorter than the minimum length
    PromptTooShort(usize)
  , /// External prompt editor could not be run
    EditorFailure(String)
  , /// HTTP request error
    HttpError(String)
  , /// API returned an error response
    ApiError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// Transcript log could not be opened or written
    LogWriteFailure(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::ConfigMissing(var) => {
              write!(f,
                "Missing required environment variable: {}",
                var
              )
            }
          , Error::PromptTooShort(len) => {
              write!(f,
                "Prompt too short: {} characters",
                len
              )
            }
          , Error::EditorFailure(msg) => {
              write!(f, "Prompt editor failed: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::LogWriteFailure(msg) => {
              write!(f, "Log write failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
