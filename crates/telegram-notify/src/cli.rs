use clap::{Args, Parser, Subcommand};

/// Telegram Notify – CI notification step for Telegram chats
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send the notification message
    Send(SendArgs),
    /// Print build information
    Version {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Overrides for the pipeline-provided inputs, for runs outside a CI runner.
#[derive(Args, Debug, Default)]
pub struct SendArgs {
    /// Bot token (overrides the `telegram-token` input)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Destination chat identifier (overrides the `telegram-chat-id` input)
    #[arg(long, value_name = "CHAT_ID")]
    pub chat_id: Option<String>,

    /// Message text (overrides the `message` input)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Formatting dialect Telegram applies to the text (overrides `parse-mode`)
    #[arg(long, value_name = "MODE")]
    pub parse_mode: Option<String>,

    /// Deliver silently, without a client-side notification sound
    #[arg(long)]
    pub disable_notification: bool,

    /// Suppress link previews in the sent message
    #[arg(long)]
    pub disable_web_preview: bool,
}
