mod clock;
mod commands;
mod config;
mod error;
mod i18n;
mod session;
mod text;

use clap::Parser;
use session::Session;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(
    name = "ohce",
    version,
    about = "OHCE — console mirror: greets by time of day, reverses input, spots palindromes"
)]
struct Cli {
    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Language code (fr/en). Skips the startup language prompt.
    #[arg(short, long)]
    lang: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = config::load(&cli.config)?;

    let mut session = Session::new(cfg.ohce.default_language);
    if let Some(lang) = cli.lang {
        session = session.with_language(lang);
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    session.run(stdin, stdout).await?;

    Ok(())
}
