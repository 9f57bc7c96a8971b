pub mod error;
pub mod config;
pub mod cli;
pub mod prompt;
pub mod buffer;
pub mod request;
pub mod client;
pub mod response;
pub mod transcript;

use std::path::Path;
use log::{debug, info};

/*

gptcom sends one user prompt to a chat-completion API and
prints/logs the reply. One request per invocation, synchronous
end-to-end, no retry and no conversation state.

gptcom/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Module exports and the run pipeline
│   ├── error.rs        # Custom error types
│   ├── config.rs       # Environment-variable configuration
│   ├── cli.rs          # Argument parsing
│   ├── prompt.rs       # Prompt sources and sanitization
│   ├── buffer.rs       # Growable response-body accumulator
│   ├── request.rs      # Request payload types
│   ├── client.rs       # HTTP transport
│   ├── response.rs     # Response parsing and reply extraction
│   └── transcript.rs   # Stdout + transcript-log sink
└── tests/              # Integration tests

*/

/// Run the whole pipeline for one invocation:
/// obtain prompt -> validate -> sanitize -> encode -> post ->
/// decode -> print and log
/// `out` is the stream the prompt echo and reply are printed to,
/// stdout in production
pub async fn run<W: std::io::Write>(
  args: Vec<String>
, config: &config::Config
, api_base: &str
, log_path: &Path
, out: &mut W
) -> Result<(), error::Error>
{   let source = prompt::PromptSource::from_args(args);
    let raw = source.obtain()?;
    prompt::validate(&raw)?;
    let prompt_text = prompt::sanitize(&raw);

    // Output failure is not a pipeline error
    let _ = write!(out, "\nprompt:\n{}\n", prompt_text);

    let request
      = request::ChatRequest::new(&config.model, &prompt_text);
    let gpt_client
      = client::GptClient::new(config.api_key.clone());
    let buffer
      = gpt_client.post_chat(api_base, &request).await?;

    match response::decode(&buffer)?
    {   Some(reply) => {
          transcript::emit(
            out,
            log_path,
            &config.model,
            &prompt_text,
            &reply
          )?;
          info!("Reply printed and logged");
        }
      , None => {
          debug!(
            "Response carried no reply, nothing to print or log"
          );
        }
    }

    Ok(())
}
