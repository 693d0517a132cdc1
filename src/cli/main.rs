mod commands;
mod menu;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use bank_ledger::Session;
use commands::{Args, Parser};
use menu::Menu;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Logs go to stderr with a default level of warn (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 1. Initialize the Session
    let config = args.ledger_config();
    log::info!("Starting session with {config:?}");
    let mut session = Session::new(config);

    // 2. Run the menu over the script file or stdin
    let stdout = io::stdout();
    match &args.script {
        Some(path) => {
            log::info!("Reading menu input from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open script file: {}", path.display()))?;
            Menu::new(BufReader::new(file), stdout.lock(), &mut session)
                .run()
                .context("Failed to run menu")?;
        }
        None => {
            Menu::new(io::stdin().lock(), stdout.lock(), &mut session)
                .run()
                .context("Failed to run menu")?;
        }
    }

    // 3. Optionally export the accounts
    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        session
            .export_accounts(file)
            .context("Failed to export accounts")?;
        log::info!("Exported {} accounts to {}", session.accounts().len(), path.display());
    }

    Ok(())
}
