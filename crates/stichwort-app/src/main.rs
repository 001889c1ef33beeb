use clap::{Parser, Subcommand};
use stichwort_config::Config;
use tracing_subscriber::EnvFilter;

use self::commands::examples::ExamplesArgs;
use self::commands::ipa::IpaArgs;
use self::commands::lookup::LookupArgs;

mod clipboard;
mod commands;
mod corpus;
mod report;

#[derive(Parser)]
#[command(name = "stichwort", version)]
#[command(about = "Dictionary lookups and ebook usage examples from the command line")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    lookup: LookupArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Search the ebook corpus for usage examples, without a lookup
    Examples(ExamplesArgs),
    /// Transcribe every word of a text into IPA
    Ipa(IpaArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::new();
    if !config.images.available() {
        tracing::info!("image search disabled: GOOGLE_API_KEY/GOOGLE_CX not set");
    }

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Examples(args)) => commands::examples::run(&config, args),
        Some(Command::Ipa(args)) => commands::ipa::run(&config, args).await,
        None => commands::lookup::run(&config, cli.lookup).await,
    }
}
