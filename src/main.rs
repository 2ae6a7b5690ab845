//! meeting-scheduler - Entry point for the attendee picker

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use meeting_scheduler::config::Settings;
use meeting_scheduler::providers::directory::StaticDirectory;
use meeting_scheduler::providers::prompt::{ChoicePrompt, NonInteractivePrompt, TerminalPrompt};
use meeting_scheduler::services::AccountSelector;
use meeting_scheduler::Scheduler;

/// CLI arguments for meeting-scheduler
#[derive(Parser, Debug)]
#[command(name = "meeting-scheduler")]
#[command(author, version, about = "Pick an account and list who you can invite")]
struct Cli {
    /// JSON directory snapshot with accounts and contacts
    #[arg(short, long, value_name = "PATH")]
    directory: PathBuf,

    /// Account type to list (overrides settings)
    #[arg(long, value_name = "TYPE")]
    account_type: Option<String>,

    /// Account to use if several exist (overrides the remembered one)
    #[arg(short, long, value_name = "NAME")]
    account: Option<String>,

    /// Never prompt; an ambiguous account aborts the run
    #[arg(long)]
    non_interactive: bool,

    /// Print attendees as JSON
    #[arg(long)]
    json: bool,

    /// Forget the remembered account before selecting
    #[arg(long)]
    forget_account: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().await.context("Failed to load settings")?;

    let directive = settings
        .logging
        .level
        .parse::<Directive>()
        .unwrap_or_else(|_| tracing::Level::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting meeting-scheduler");

    if cli.forget_account {
        settings.accounts.last_account = None;
        settings.save().await.context("Failed to save settings")?;
        tracing::info!("Forgot remembered account");
    }
    if let Some(account_type) = &cli.account_type {
        settings.accounts.account_type = account_type.clone();
    }
    if let Some(account) = &cli.account {
        settings.accounts.last_account = Some(account.clone());
    }

    let directory = StaticDirectory::load(&cli.directory)
        .await
        .with_context(|| format!("Failed to load directory {}", cli.directory.display()))?;

    if cli.non_interactive {
        run(NonInteractivePrompt, directory, settings, cli.json).await
    } else {
        run(TerminalPrompt::stdio(), directory, settings, cli.json).await
    }
}

async fn run<P: ChoicePrompt>(
    prompt: P,
    directory: StaticDirectory,
    mut settings: Settings,
    json: bool,
) -> Result<()> {
    let scheduler = Scheduler::new(
        Arc::new(AccountSelector::new(prompt)),
        Arc::new(directory),
        &settings,
    );

    let account = scheduler.active_account().await?;
    let attendees = scheduler.possible_attendees(&account).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&attendees)?);
    } else {
        println!("Scheduling as {}", account.name);
        for attendee in &attendees {
            let mark = if attendee.is_selected() { "x" } else { " " };
            println!("[{}] {}", mark, attendee.display_label());
        }
    }

    if settings.accounts.last_account.as_deref() != Some(account.name.as_str()) {
        settings.accounts.last_account = Some(account.name);
        settings.save().await.context("Failed to save settings")?;
    }

    Ok(())
}
