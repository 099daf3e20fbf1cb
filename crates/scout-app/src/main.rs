//! Scout application binary - composition root.
//!
//! Ties the Scout crates together into a terminal chatbot:
//! 1. Load configuration from TOML
//! 2. Load the event catalog from JSON
//! 3. Run the conversation loop over stdin

use std::io::{BufRead, Write};

use clap::Parser;

use scout_catalog::MemoryCatalog;
use scout_chat::{response, ChatError, ConversationEngine};
use scout_core::ScoutConfig;

mod cli;

use cli::CliArgs;

const RULE_WIDTH: usize = 60;

fn print_banner() {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("        SOCIETY SCOUT - UNSW Event Discovery");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first so tracing can pick up its log level.
    let config_file = args.resolve_config_path();
    let config = ScoutConfig::load_or_default(&config_file);

    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Scout v{}", env!("CARGO_PKG_VERSION"));

    // Catalog.
    let events_file = args.resolve_events_path(&config.catalog.events_file);
    let catalog = match MemoryCatalog::from_path(&events_file) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(path = %events_file.display(), error = %e, "Failed to load events");
            return Err(e.into());
        }
    };
    tracing::info!(
        path = %events_file.display(),
        events = catalog.len(),
        "Event catalog loaded"
    );

    let mut engine = ConversationEngine::new(catalog, config.chat.clone());
    tracing::info!(session = %engine.session_id(), "Session started");

    if config.general.show_banner && !args.no_banner {
        print_banner();
    }

    println!("Chatbot: {}", response::greeting());
    println!();
    println!("(Type 'quit' or 'exit' to end the conversation)");
    println!("{}", "-".repeat(RULE_WIDTH));
    println!();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        print!("You: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF, same as quitting.
            println!();
            println!("Chatbot: {}", response::farewell());
            break;
        }
        let message = line.trim();

        if matches!(message.to_lowercase().as_str(), "quit" | "exit" | "bye") {
            println!();
            println!("Chatbot: {}", response::farewell());
            break;
        }
        if message.is_empty() {
            continue;
        }

        let reply = match engine.process_turn(message) {
            Ok(report) => report.summary,
            Err(ChatError::CatalogUnavailable(msg)) => {
                tracing::warn!(error = %msg, "Catalog unavailable");
                "I'm having trouble reaching the events catalog right now. \
                 Please try again in a moment."
                    .to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Turn rejected");
                format!("Sorry, I can't process that: {}.", e)
            }
        };

        println!();
        println!("Chatbot: {}", reply);
        println!();
        println!("{}", "-".repeat(RULE_WIDTH));
        println!();
    }

    Ok(())
}
