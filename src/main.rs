use clap::{Parser, Subcommand};
use log::debug;
use std::error::Error;
use std::io::IsTerminal;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use video_recipe_import::clipboard::SystemClipboard;
use video_recipe_import::session::prevalidate;
use video_recipe_import::{
    server, AppConfig, ExtractionSession, HttpBackend, RecipeBackend, RecipeExtractor,
    SessionState,
};

#[derive(Parser)]
#[command(name = "video-recipe-import", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a recipe from a YouTube, TikTok or Instagram URL
    Extract {
        url: String,
        /// Copy the recipe to the clipboard as plain text
        #[arg(long)]
        copy: bool,
        /// Use a running extraction server instead of extracting locally
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },
    /// Serve the extraction endpoint over HTTP
    Serve {
        /// Address to listen on, overrides server.bind from the configuration
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { url, copy, server } => {
            // Reject foreign URLs before a provider has to be configured
            prevalidate(&url)?;
            match server {
                Some(base_url) => run_session(HttpBackend::new(&base_url), &url, copy).await,
                None => run_session(RecipeExtractor::builder().build()?, &url, copy).await,
            }
        }
        Commands::Serve { bind } => {
            let config = AppConfig::load()?;
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let extractor = RecipeExtractor::builder().config(config).build()?;
            debug!("Using provider {}", extractor.provider_name());
            server::serve(extractor, &bind).await?;
            Ok(())
        }
    }
}

async fn run_session<B: RecipeBackend>(
    backend: B,
    url: &str,
    copy: bool,
) -> Result<(), Box<dyn Error>> {
    let mut session = ExtractionSession::new(backend).on_transition(|state| {
        if let SessionState::Loading { .. } = state {
            eprintln!("Fetching video information...");
        }
    });

    session.submit(url).await;
    loop {
        let message = match session.state() {
            SessionState::Success(recipe) => {
                println!("{}", recipe.to_plain_text());
                break;
            }
            SessionState::Error(message) => message.clone(),
            SessionState::Idle | SessionState::Loading { .. } => break,
        };

        eprintln!("{}", message);
        if !ask_retry().await? {
            return Err(message.into());
        }
        session.retry().await;
    }

    if copy && session.export(&SystemClipboard::new()).await {
        eprintln!("Recipe copied to clipboard");
    }

    Ok(())
}

/// Ask whether to try again; non-interactive runs never retry.
async fn ask_retry() -> Result<bool, Box<dyn Error>> {
    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }

    let mut stderr = tokio::io::stderr();
    stderr.write_all(b"Try again? [y/N] ").await?;
    stderr.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
