use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use camdict::{fetch, fixture};

#[derive(Parser)]
#[command(name = "camdict", about = "Dictionary page parser and fixture generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download dictionary pages and snapshot them as test fixtures
    Fetch {
        /// Word ids as they appear in the dictionary URL
        #[arg(required = true)]
        words: Vec<String>,
        /// Fixture directory (html/ and json/ are created under it)
        #[arg(long, default_value = "tests/fixtures")]
        path: PathBuf,
    },
    /// Parse a local HTML file and print the exchange-format JSON
    Parse {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch { words, path } => fetch_fixtures(&words, &path).await,
        Commands::Parse { file } => parse_file(&file),
    }
}

async fn fetch_fixtures(words: &[String], path: &Path) -> Result<()> {
    let html_dir = path.join("html");
    let json_dir = path.join("json");
    fs::create_dir_all(&html_dir)?;
    fs::create_dir_all(&json_dir)?;

    let client = fetch::client()?;
    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut saved = 0usize;
    let mut failed = 0usize;
    for word in words {
        pb.set_message(word.clone());
        match snapshot_word(&client, word, &html_dir, &json_dir).await {
            Ok(total) => {
                saved += 1;
                pb.println(format!("{word}: {total} lemmas"));
            }
            Err(e) => {
                failed += 1;
                warn!("skipping {word}: {e:#}");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "Saved {saved} fixtures ({failed} failed) under {}",
        path.display()
    );
    Ok(())
}

/// Snapshot both sides of a fixture pair: the raw page the harness will
/// re-parse, and the expected parse in exchange format.
async fn snapshot_word(
    client: &reqwest::Client,
    word: &str,
    html_dir: &Path,
    json_dir: &Path,
) -> Result<usize> {
    let html = fetch::fetch_page(client, word).await?;
    let lemmas =
        camdict::parse(&html).with_context(|| format!("could not parse page for {word:?}"))?;

    let html_path = html_dir.join(format!("{word}.html"));
    fs::write(&html_path, &html)
        .with_context(|| format!("failed to write {}", html_path.display()))?;
    fixture::write(
        &json_dir.join(format!("{word}.json")),
        &fixture::from_lemmas(&lemmas)?,
    )?;
    Ok(lemmas.len())
}

fn parse_file(file: &Path) -> Result<()> {
    let html =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let lemmas = camdict::parse(&html)?;
    let snapshot = fixture::from_lemmas(&lemmas)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
