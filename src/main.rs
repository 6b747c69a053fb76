use anyhow::Result;
use clap::Parser;
use std::io::Read;
use std::path::Path;

use gvoice::cli::{Cli, Commands};
use gvoice::config::Config;
use gvoice::{DryRun, FeedDecoder};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { file, folder, html } => decode(&file, &folder, html),
        Commands::Validate { file } => validate(&file),
        Commands::Config => show_config(cli.config.as_deref()),
    }
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

/// gvoice decode FILE [--folder NAME] [--html]
fn decode(file: &Path, name: &str, show_html: bool) -> Result<()> {
    let session = DryRun;
    let mut decoder = FeedDecoder::new(&session, name, || read_input(file));
    let folder = decoder.call()?;

    println!("Folder: {} ({} total)", folder.name(), folder.len());
    if let Some(per_page) = folder.results_per_page() {
        println!("  Results per page: {}", per_page);
    }
    for (label, count) in folder.unread_counts() {
        println!("  Unread {}: {}", label, count);
    }
    for message in folder.messages() {
        let message = message?;
        println!(
            "  {}  {}  {}{}",
            message.id(),
            message.display_start_date_time().format("%Y-%m-%d %H:%M"),
            message.phone_number().unwrap_or("-"),
            if message.is_read() { "" } else { "  (unread)" },
        );
    }
    if show_html {
        println!("\n{}", decoder.html());
    }
    Ok(())
}

/// gvoice validate FILE
fn validate(file: &Path) -> Result<()> {
    let body = read_input(file)?;
    gvoice::load_and_validate(body)?;
    println!("ok");
    Ok(())
}

/// gvoice config
fn show_config(path: Option<&Path>) -> Result<()> {
    let config = Config::load(path)?;
    println!("Config: {}", config.path().display());
    let unset = || "(unset)".to_string();
    println!("  email: {}", config.email().unwrap_or_else(unset));
    println!(
        "  forwardingNumber: {}",
        config.forwarding_number().unwrap_or_else(unset)
    );
    println!(
        "  phoneType: {}",
        config
            .phone_type()
            .map(|t| t.to_string())
            .unwrap_or_else(unset)
    );
    Ok(())
}
