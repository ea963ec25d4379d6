use clap::Parser;
use tokio::runtime::Runtime;

use telegram_notify::cli::{Cli, Commands, SendArgs};
use telegram_notify::config::{Config, RawInputs};
use telegram_notify::github;
use telegram_notify::notifier::notify;
use telegram_notify::telegram::{HttpApi, SendMessageRequest};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rt = Runtime::new()?;
    rt.block_on(async {
        match cli.command {
            Commands::Send(args) => {
                if let Err(err) = run_send(args, cli.verbose).await {
                    github::set_failed(&format!("Action failed with error: {err}"));
                    std::process::exit(1);
                }
            }
            Commands::Version { json } => {
                if json {
                    let info = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                        "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    println!(
                        "telegram-notify {} (commit: {}, built: {})",
                        env!("CARGO_PKG_VERSION"),
                        option_env!("GIT_SHA").unwrap_or("unknown"),
                        option_env!("BUILD_DATE").unwrap_or("unknown"),
                    );
                }
            }
        }
        Ok(())
    })
}

async fn run_send(args: SendArgs, verbose: u8) -> anyhow::Result<()> {
    let config = Config::from_inputs(RawInputs::from_env().merge_cli(&args))?;

    if verbose > 0 {
        let request = SendMessageRequest::from(&config);
        println!("{}", serde_json::to_string_pretty(&request)?);
    }

    let api = HttpApi::new();
    let delivery = notify(&config, &api).await?;

    github::set_output("message-id", &delivery.message_id.to_string())?;
    github::set_output("success", "true")?;
    Ok(())
}
