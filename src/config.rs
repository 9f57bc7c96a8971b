//! Environment-variable configuration for gptcom

use std::path::PathBuf;
use log::{debug, error};

use crate::error::Error;

/// Environment variable holding the API bearer credential
pub const KEY_VAR: &str = "GPTKEY";
/// Environment variable holding the model identifier
pub const MODEL_VAR: &str = "GPTMOD";
/// Environment variable holding the invoking user's name
pub const USER_VAR: &str = "GPTUSER";

const LOG_FILE_NAME: &str = "gptcom.log";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config
{   /// Bearer credential for the chat-completion API
    pub api_key: String
  , /// Model identifier sent with every request
    pub model: String
  , /// Invoking user's name, used to build the log path
    pub user: String
}

impl Config
{   /// Read and validate all required variables from the process
    /// environment
    pub fn from_env() -> Result<Config, Error>
    {   debug!("Reading configuration from environment");
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a lookup function, so tests can
    /// supply values without touching process-global state
    /// An unset or empty variable is a startup error, never an
    /// empty string on the wire
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
      where F: Fn(&str) -> Option<String>
    {   Ok(Config
        {   api_key: required(KEY_VAR, &lookup)?
          , model: required(MODEL_VAR, &lookup)?
          , user: required(USER_VAR, &lookup)?
        })
    }
}

fn required<F>(var: &str, lookup: &F) -> Result<String, Error>
  where F: Fn(&str) -> Option<String>
{   match lookup(var)
    {   Some(value) if !value.trim().is_empty() => Ok(value)
      , _ => {
          error!("Required variable {} is unset or empty", var);
          Err(Error::ConfigMissing(var.to_string()))
        }
    }
}

/// Per-user transcript log path: ~/.config/gptcom.log
pub fn log_path(user: &str) -> PathBuf
{   PathBuf::from(format!(
      "/home/{}/.config/{}",
      user, LOG_FILE_NAME
    ))
}
