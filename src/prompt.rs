//! Prompt acquisition and sanitization

use log::{debug, error};

use crate::error::Error;

/// Prompts shorter than this fail before any network activity
pub const MIN_PROMPT_LEN: usize = 4;

const EDITOR_PROGRAM: &str = "zenity";
const EDITOR_TITLE: &str = "GptCom Prompt Edit";

/// Where the prompt text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource
{   /// Command-line arguments, joined with single spaces
    Args(Vec<String>)
  , /// External interactive editor
    Editor
}

impl PromptSource
{   /// Select a source by presence or absence of arguments
    pub fn from_args(args: Vec<String>) -> Self
    {   if args.is_empty()
        {   debug!("No arguments, prompting via editor");
            PromptSource::Editor
        } else
        {   PromptSource::Args(args)
        }
    }

    /// Obtain the raw prompt text
    pub fn obtain(self) -> Result<String, Error>
    {   match self
        {   PromptSource::Args(args) => Ok(args.join(" "))
          , PromptSource::Editor => capture_editor()
        }
    }
}

/// Launch the external editor and capture its output as the prompt
fn capture_editor() -> Result<String, Error>
{   debug!("Launching {} for prompt entry", EDITOR_PROGRAM);
    let output = std::process::Command::new(EDITOR_PROGRAM)
      .arg("--text-info")
      .arg(format!("--title={}", EDITOR_TITLE))
      .arg("--editable")
      .output()
      .map_err(|e| {
        error!("Failed to launch {}: {}", EDITOR_PROGRAM, e);
        Error::EditorFailure(e.to_string())
      })?;

    if !output.status.success()
    {   error!(
          "{} exited with {}",
          EDITOR_PROGRAM, output.status
        );
        return Err(Error::EditorFailure(format!(
          "{} exited with {}",
          EDITOR_PROGRAM, output.status
        )));
    }

    String::from_utf8(output.stdout)
      .map_err(|e| {
        error!("Editor output was not valid UTF-8: {}", e);
        Error::EditorFailure(e.to_string())
      })
}

/// Enforce the minimum prompt length
pub fn validate(prompt: &str) -> Result<(), Error>
{   let len = prompt.chars().count();
    if len < MIN_PROMPT_LEN
    {   error!(
          "Prompt has {} characters, minimum is {}",
          len, MIN_PROMPT_LEN
        );
        Err(Error::PromptTooShort(len))
    } else
    {   Ok(())
    }
}

/// Rewrite double quotes to single quotes so the prompt cannot
/// break the request payload
pub fn sanitize(prompt: &str) -> String
{   prompt.replace('"', "'")
}
