//! pagetweak - restyle a page with plain-language commands
//!
//! Main entry point for the pagetweak CLI.

mod cli;
mod page;
mod shell;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pagetweak_classifier::Classifier;
use pagetweak_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use pagetweak_document_memory::Document;
use pagetweak_executor::Executor;

use cli::{Cli, Commands};
use shell::{Shell, StatusMessage, EXAMPLE_COMMANDS};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// `apply` finished but not every command took effect.
#[derive(Debug, thiserror::Error)]
#[error("{failed} of {total} commands did not apply")]
struct ApplyError {
    failed: usize,
    total: usize,
}

fn pagetweak_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pagetweak")
}

fn log_dir(logging: &LoggingConfig) -> PathBuf {
    if logging.directory.trim().is_empty() {
        pagetweak_dir().join("logs")
    } else {
        PathBuf::from(ConfigLoader::expand_path(&logging.directory))
    }
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) -> CliResult {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = if logging.file {
        let dir = log_dir(logging);
        std::fs::create_dir_all(&dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("pagetweak")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Dropping the guard stops the writer thread.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> CliResult {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging, cli.verbose)?;

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in &warnings {
        warn!(field = %warning.path, "{}", warning.message);
    }

    match cli.command {
        Commands::Classify { text } => classify_command(&config, &text)?,
        Commands::Apply {
            document,
            output,
            commands,
        } => apply_commands(&config, &document, output.as_deref(), &commands, cli.verbose).await?,
        Commands::Repl { document } => repl(&config, &document, cli.verbose).await?,
        Commands::Examples => {
            for command in EXAMPLE_COMMANDS {
                println!("{}", command);
            }
        }
    }

    Ok(())
}

fn classify_command(config: &Config, text: &str) -> CliResult {
    let classifier = Classifier::new(config.classifier.clone());
    let instruction = classifier.classify(text);
    println!("{}", serde_json::to_string_pretty(&instruction)?);
    Ok(())
}

fn open_shell(config: &Config, document: &Path) -> Result<Shell, Box<dyn std::error::Error>> {
    let doc = Document::load(document)?;
    info!(path = %document.display(), title = %doc.title(), "Page loaded");

    let (handle, _task) = page::spawn(doc, Executor::new(config.executor.clone()));
    Ok(Shell::new(
        Classifier::new(config.classifier.clone()),
        handle,
    ))
}

fn print_status(status: &StatusMessage, verbose: bool) {
    match (&status.detail, verbose) {
        (Some(detail), true) => println!("{} ({})", status, detail),
        _ => println!("{}", status),
    }
}

async fn apply_commands(
    config: &Config,
    document: &Path,
    output: Option<&Path>,
    commands: &[String],
    verbose: bool,
) -> CliResult {
    let mut shell = open_shell(config, document)?;

    let mut failures = 0;
    for command in commands {
        let status = shell.submit(command).await;
        if !status.is_success() {
            failures += 1;
        }
        print!("{}: ", command);
        print_status(&status, verbose);
    }

    if let Some(path) = output {
        let snapshot = shell.page().snapshot().await?;
        std::fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
        info!(path = %path.display(), "Page state written");
    }

    if failures > 0 {
        warn!(failures, total = commands.len(), "Some commands did not apply");
        return Err(ApplyError {
            failed: failures,
            total: commands.len(),
        }
        .into());
    }
    Ok(())
}

async fn repl(config: &Config, document: &Path, verbose: bool) -> CliResult {
    let mut shell = open_shell(config, document)?;
    println!("Type a command, :state, :reset or :quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            ":quit" | ":q" => break,
            ":state" => {
                let snapshot = shell.page().snapshot().await?;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            ":reset" => print_status(&shell.reset().await, verbose),
            _ => print_status(&shell.submit(&line).await, verbose),
        }
    }

    Ok(())
}
