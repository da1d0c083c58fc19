//! Vista Action Engine - Command line wrapper
//!
//! Resolves one utterance and prints the plan as indented JSON on stdout.
//! Logs go to stderr; set RUST_LOG to adjust verbosity.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vista_action_engine::core::error::Result;
use vista_action_engine::IntentResolver;

/// Translate natural language into action plans
#[derive(Parser, Debug)]
#[command(name = "vista-action")]
#[command(about = "Translate natural language into action plans.")]
struct Args {
    /// User request for Iris
    #[arg(required = true, num_args = 1..)]
    utterance: Vec<String>,
}

impl Args {
    fn joined(&self) -> String {
        self.utterance.join(" ")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vista_action_engine=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let utterance = args.joined();

    let plan = IntentResolver::new().build_plan(&utterance);
    println!("{}", serde_json::to_string_pretty(&plan.to_value())?);

    Ok(())
}
