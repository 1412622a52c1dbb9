use anyhow::Result;

use crate::chat::ChatSession;
use crate::cli::ChatArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let config = load_session_config(args)?;
    let mut session = ChatSession::new(config)?;
    session.run().await
}

fn load_session_config(args: ChatArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load()?;

    let options = ResolveOptions {
        from: args.from,
        to: args.to,
        provider: args.provider,
        model: args.model,
        timeout_secs: args.timeout,
    };

    resolve_config(&options, &file_config)
}
