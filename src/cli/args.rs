use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lingome")]
#[command(about = "Interactive AI-powered translation chat")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub chat: ChatArgs,

    /// Increase log verbosity (-v warn, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by the default mode and `lingome chat`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Source language code (e.g., en, hi, ta)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., hi, bn, en)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Provider name (as defined in config.toml)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Seconds to wait for a translation before giving up (0 waits forever)
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode for translation (default)
    Chat(ChatArgs),
    /// List supported language codes
    Languages,
}
