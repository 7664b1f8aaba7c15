// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semroute - a semantic query router.
//!
//! This is the binary entry point for the Semroute CLI.

mod shell;

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

use semroute_catalog::Catalog;
use semroute_config::SemrouteConfig;
use semroute_core::{Confidence, Embedder, SemrouteError};
use semroute_embedding::HashEmbedder;
use semroute_handlers::{register_builtins, HandlerTable};
use semroute_router::{build_index, RoutingDecision, RoutingEngine};

/// Semroute - a semantic query router.
#[derive(Parser, Debug)]
#[command(name = "semroute", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a single query and execute the selected handler.
    Route {
        /// The natural-language query to route.
        query: String,

        /// Emit the decision and response as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Launch an interactive routing REPL.
    Shell,
    /// Print the handler catalog.
    Catalog,
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let config = match semroute_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            semroute_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Route { query, json }) => run_route(&config, &query, json),
        Some(Commands::Shell) => shell::run_shell(&config),
        Some(Commands::Catalog) => run_catalog(&config),
        Some(Commands::Config) => run_config(&config),
        None => {
            println!("semroute: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to
/// stderr so stdout stays clean for decision output.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the routing engine from the configured catalog, restoring the
/// index from the snapshot cache when one is configured and its keys match.
pub(crate) fn build_engine(config: &SemrouteConfig) -> Result<RoutingEngine, SemrouteError> {
    let catalog = Catalog::from_descriptors(config.handlers.clone())?;
    let embedder: Arc<dyn Embedder> = Arc::new(HashEmbedder::new());

    if let Some(cache_path) = &config.index.cache_path {
        let path = Path::new(cache_path);
        let catalog_hash = catalog.content_hash();

        if let Some(index) =
            semroute_index::cache::load(path, embedder.model_version(), &catalog_hash)?
        {
            return RoutingEngine::with_index(catalog, index, embedder, config);
        }

        let index = build_index(&catalog, embedder.as_ref())?;
        semroute_index::cache::save(path, &index, embedder.model_version(), &catalog_hash)?;
        return RoutingEngine::with_index(catalog, index, embedder, config);
    }

    RoutingEngine::new(catalog, embedder, config)
}

/// Build the handler table with the built-in handlers registered.
pub(crate) fn build_handlers() -> Result<HandlerTable, SemrouteError> {
    let mut table = HandlerTable::new();
    register_builtins(&mut table)?;
    Ok(table)
}

/// Print a routing decision as aligned, colored key/value lines.
pub(crate) fn print_decision(decision: &RoutingDecision) {
    let confidence = decision.confidence.to_string();
    let confidence = match decision.confidence {
        Confidence::High => confidence.green(),
        Confidence::Moderate => confidence.yellow(),
        Confidence::Low => confidence.red(),
    };

    println!("{} {}", "query:".dimmed(), decision.query);
    println!("{} {}", "intent:".dimmed(), decision.intent);
    println!("{} {}", "complexity:".dimmed(), decision.complexity);
    println!(
        "{} {}",
        "handler:".dimmed(),
        decision.selected_handler_id.bold().green()
    );
    println!(
        "{} {:.4} ({} confidence)",
        "similarity:".dimmed(),
        decision.similarity_score,
        confidence
    );
    println!("{} {}", "explanation:".dimmed(), decision.explanation);
}

/// Runs `semroute route <query>`: one decision, one handler response.
fn run_route(config: &SemrouteConfig, query: &str, json: bool) -> Result<(), SemrouteError> {
    let engine = build_engine(config)?;
    let handlers = build_handlers()?;

    let decision = engine.route(query)?;
    let response = handlers.execute(&decision.selected_handler_id, query);

    if json {
        let payload = serde_json::json!({
            "decision": decision,
            "response": match &response {
                Ok(text) => serde_json::json!({ "ok": text }),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            },
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| SemrouteError::Internal(format!("failed to encode decision: {e}")))?;
        println!("{rendered}");
        return response.map(|_| ());
    }

    print_decision(&decision);
    let response = response?;
    println!("{}", "response:".dimmed());
    println!("{response}");
    Ok(())
}

/// Runs `semroute catalog`: the configured handlers in registration order.
fn run_catalog(config: &SemrouteConfig) -> Result<(), SemrouteError> {
    let catalog = Catalog::from_descriptors(config.handlers.clone())?;

    for descriptor in catalog.list() {
        println!(
            "{} {} [complexity={} cost={} latency={}]",
            descriptor.id.bold().green(),
            descriptor.name,
            descriptor.complexity,
            descriptor.cost,
            descriptor.latency
        );
        println!("    {}", descriptor.description.dimmed());
    }
    Ok(())
}

/// Runs `semroute config`: the effective configuration after defaults,
/// files, and environment overrides, serialized back to TOML.
fn run_config(config: &SemrouteConfig) -> Result<(), SemrouteError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| SemrouteError::Internal(format!("failed to encode configuration: {e}")))?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use semroute_core::Intent;

    #[test]
    fn empty_toml_yields_a_valid_default_config() {
        let config = semroute_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "semroute");
        assert_eq!(config.handlers.len(), 4);
    }

    #[test]
    fn default_config_builds_a_working_engine() {
        let config = SemrouteConfig::default();
        let engine = build_engine(&config).expect("engine builds");

        let decision = engine.route("2 + 2").expect("routes");
        assert_eq!(decision.intent, Intent::Arithmetic);
        assert!(decision.similarity_score > 0.0 && decision.similarity_score <= 1.0);
    }

    #[test]
    fn builtin_handlers_cover_the_default_catalog() {
        let config = SemrouteConfig::default();
        let handlers = build_handlers().expect("handlers");

        for descriptor in &config.handlers {
            assert!(
                handlers.contains(&descriptor.id),
                "no handler registered for `{}`",
                descriptor.id
            );
        }
    }
}
