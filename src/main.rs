use std::process::ExitCode;
use clap::Parser;
use log::error;

use gptcom::cli::Cli;
use gptcom::client::GPT_API_BASE;
use gptcom::config::{self, Config};

#[tokio::main]
async fn main() -> ExitCode
{   env_logger::init();
    let cli = Cli::parse();

    let config = match Config::from_env()
    {   Ok(c) => c
      , Err(e) => {
          error!("Configuration error: {}", e);
          eprintln!("gptcom: {}", e);
          return ExitCode::FAILURE;
        }
    };

    let log_path = config::log_path(&config.user);

    match gptcom::run(
      cli.text,
      &config,
      GPT_API_BASE,
      &log_path,
      &mut std::io::stdout()
    ).await
    {   Ok(()) => ExitCode::SUCCESS
      , Err(e) => {
          error!("Run failed: {}", e);
          eprintln!("gptcom: {}", e);
          ExitCode::FAILURE
        }
    }
}
