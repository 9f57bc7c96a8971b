//! Command-line surface

use clap::Parser;

/// Send one prompt to a chat-completion endpoint, print the reply
/// and append it to the per-user transcript log
#[derive(Debug, Parser)]
#[command(name = "gptcom", version)]
pub struct Cli
{   /// Prompt text, joined with single spaces; with no text an
    /// external editor is opened for prompt entry
    pub text: Vec<String>
}
