// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `semroute shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline history.
//! Every line is routed through the engine and executed by the matching
//! handler; `/catalog` lists the handlers behind the current snapshot.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use semroute_config::SemrouteConfig;
use semroute_core::SemrouteError;

/// Runs the `semroute shell` interactive REPL.
///
/// The engine is built once at startup; routing itself never touches the
/// disk or the network, so each line resolves immediately.
pub fn run_shell(config: &SemrouteConfig) -> Result<(), SemrouteError> {
    let engine = crate::build_engine(config)?;
    let handlers = crate::build_handlers()?;

    let mut rl = DefaultEditor::new()
        .map_err(|e| SemrouteError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "semroute shell".bold().green());
    println!(
        "Routing across {} handlers. Type {} to exit, {} to list handlers.\n",
        engine.snapshot().catalog().len(),
        "/quit".yellow(),
        "/catalog".yellow()
    );

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if trimmed == "/catalog" {
                    print_catalog(&engine);
                    continue;
                }

                match engine.route(trimmed) {
                    Ok(decision) => {
                        crate::print_decision(&decision);
                        match handlers.execute(&decision.selected_handler_id, trimmed) {
                            Ok(response) => {
                                println!("{}", "response:".dimmed());
                                println!("{response}\n");
                            }
                            Err(e) => eprintln!("{}: {e}\n", "error".red()),
                        }
                    }
                    Err(e) => eprintln!("{}: {e}\n", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Lists the handlers behind the engine's current catalog snapshot.
fn print_catalog(engine: &semroute_router::RoutingEngine) {
    let snapshot = engine.snapshot();
    for descriptor in snapshot.catalog().list() {
        println!(
            "{} {} [complexity={} cost={} latency={}]",
            descriptor.id.bold().green(),
            descriptor.name,
            descriptor.complexity,
            descriptor.cost,
            descriptor.latency
        );
    }
    println!();
}
