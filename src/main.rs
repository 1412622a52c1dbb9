use anyhow::Result;
use clap::Parser;

use lingome::cli::commands::chat;
use lingome::cli::{Args, Command};
use lingome::logging;
use lingome::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Chat(chat_args)) => {
            chat::run_chat(chat_args).await?;
        }
        None => {
            chat::run_chat(args.chat).await?;
        }
    }

    Ok(())
}
