//! Result sink: output stream plus the append-only transcript log

use std::io::Write;
use std::path::Path;
use chrono::Local;
use log::{debug, error};

use crate::error::Error;

const SEPARATOR: &str
  = "----------------------------------------";

/// Print the reply and append one timestamped record to the log
/// Log failure is fatal even though the API call already
/// succeeded; losing the round trip is the accepted consequence
/// of this ordering
pub fn emit<W: Write>(
  out: &mut W
, log_path: &Path
, model: &str
, prompt: &str
, reply: &str
) -> Result<(), Error>
{   // Output failure is not a pipeline error
    let _ = write!(out, "\n\nresponse: {}\n", reply);

    let timestamp = Local::now()
      .format("%Y-%m-%d %H:%M:%S")
      .to_string();
    append_record(log_path, &timestamp, model, prompt, reply)
}

/// Append a single self-delimited record, opening in append mode
pub fn append_record(
  log_path: &Path
, timestamp: &str
, model: &str
, prompt: &str
, reply: &str
) -> Result<(), Error>
{   debug!(
      "Appending transcript record to {}",
      log_path.display()
    );

    let mut file = std::fs::OpenOptions::new()
      .create(true)
      .append(true)
      .open(log_path)
      .map_err(|e| {
        error!(
          "Cannot open log file {}: {}",
          log_path.display(), e
        );
        Error::LogWriteFailure(e.to_string())
      })?;

    let record = format!(
      "{}\n{}\nmodel: {}\nprompt: {}\n{}\n",
      SEPARATOR, timestamp, model, prompt, reply
    );

    file.write_all(record.as_bytes())
      .map_err(|e| {
        error!("Log write failed: {}", e);
        Error::LogWriteFailure(e.to_string())
      })
}
