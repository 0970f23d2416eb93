//! reagent: one-shot agent runner
//!
//! Wires the engine to an Ollama-backed model client and a small set of
//! built-in tools, runs a single task, and prints the final answer.

mod builtin;
mod config;

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reagent_core::{AgentConfig, AgentLoop, Role, ToolRegistry};
use reagent_llm::OllamaClient;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "reagent")]
#[command(about = "Run a tool-using agent on a single task", version)]
struct Cli {
    /// The task to run
    task: Vec<String>,

    /// Model to use (overrides config)
    #[arg(short, long)]
    model: Option<String>,

    /// Maximum model round-trips before the fallback invocation
    #[arg(short = 't', long)]
    max_turns: Option<usize>,

    /// System prompt (replaces the default instructions)
    #[arg(short, long)]
    system: Option<String>,

    /// Ollama base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Run without any tools: a single model invocation
    #[arg(long)]
    no_tools: bool,

    /// Show per-turn history as the run progresses
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let task = cli.task.join(" ");
    if task.trim().is_empty() {
        bail!("no task given; usage: reagent <task...>");
    }

    let file_config = Config::load();
    let model = cli.model.unwrap_or(file_config.model.name);
    let base_url = cli.base_url.unwrap_or(file_config.model.base_url);
    let max_turns = cli.max_turns.unwrap_or(file_config.agent.max_turns);

    let client = OllamaClient::new(base_url.as_str());
    if !client.health_check().await? {
        bail!("Ollama is not reachable at {base_url}");
    }

    let registry = if cli.no_tools {
        ToolRegistry::new()
    } else {
        builtin::create_default_registry()?
    };

    let mut agent_config = AgentConfig::new(model.as_str()).with_max_turns(max_turns);
    if let Some(system) = cli.system {
        agent_config = agent_config.with_system_prompt(system);
    }

    let agent = AgentLoop::new(Arc::new(client), registry, agent_config);
    let state = agent.run(&task).await?;

    if cli.verbose {
        for message in state.history.messages() {
            let tag = match message.role {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            eprintln!("--- {tag} ---\n{}\n", message.content);
        }
        for warning in &state.warnings {
            eprintln!("[parse warning] {warning}");
        }
    }

    match state.final_response {
        Some(response) => println!("{response}"),
        None => eprintln!("(no final response after {} turns)", state.turn),
    }

    Ok(())
}
