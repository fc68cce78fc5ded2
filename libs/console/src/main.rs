use std::{
    io::{self, Write},
    process::ExitCode,
    time::Duration,
};

use clap::{Parser, Subcommand};
use console::{
    form::{options, Field, FormState},
    help::HelpPanel,
    lifecycle::{Controller, RequestState},
    relay::{RelayClient, DEFAULT_RELAY_URL},
    typewriter::Revealer,
};
use entity::prelude::*;
use tracing_subscriber::EnvFilter;

/// Turn a raw product idea into a markdown blueprint
#[derive(Parser)]
#[command(name = "blueprint-console")]
#[command(version, long_about = None)]
struct Cli {
    /// Base URL of the relay
    #[arg(long, env = "BLUEPRINT_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an idea to the relay and reveal the blueprint
    Generate {
        /// The raw concept or problem statement
        #[arg(long)]
        idea: String,

        /// Platform type: Web App, Mobile App, SaaS Platform
        #[arg(long = "type", default_value_t = PlatformType::default().to_string())]
        platform: String,

        /// Analysis depth: Detailed, MVP Only, Technical Spec
        #[arg(long, default_value_t = AnalysisDepth::default().to_string())]
        depth: String,

        /// Target audience: Startups, Enterprise, Developers
        #[arg(long, default_value_t = Audience::default().to_string())]
        audience: String,

        /// Delay between revealed characters; 0 prints at once
        #[arg(long, default_value_t = 5)]
        interval_ms: u64,
    },

    /// Explain what a field means and how to fill it in
    Explain {
        /// One of: type, depth, audience, idea
        field: Option<Field>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = util::load_env() {
        eprintln!("error: {:?}", e);
        return ExitCode::FAILURE;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            idea,
            platform,
            depth,
            audience,
            interval_ms,
        } => {
            let mut form = FormState::default();
            let fields = [
                (Field::Idea, idea),
                (Field::Type, platform),
                (Field::Depth, depth),
                (Field::Audience, audience),
            ];
            for (field, value) in fields {
                if let Err(e) = form.set(field, &value) {
                    eprintln!("error: {}", e);
                    eprintln!("options: {}", options(field).join(", "));
                    return ExitCode::FAILURE;
                }
            }
            generate(&cli.relay_url, form, Duration::from_millis(interval_ms))
                .await
        }
        Commands::Explain { field } => {
            explain(field);
            ExitCode::SUCCESS
        }
    }
}

async fn generate(relay_url: &str, form: FormState, period: Duration) -> ExitCode {
    let controller = Controller::new(RelayClient::new(relay_url));

    eprintln!("Analyzing...");
    let state = match controller.submit(&form).await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (text, code) = match state {
        RequestState::Success(text) => (text, ExitCode::SUCCESS),
        RequestState::Failed(text) => (text, ExitCode::FAILURE),
        RequestState::Idle | RequestState::Loading => return ExitCode::FAILURE,
    };

    let mut revealer = Revealer::new(period);
    let handle = revealer.start(text, |c| {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{}", c);
        let _ = stdout.flush();
    });
    let _ = handle.await;
    println!();

    code
}

fn explain(field: Option<Field>) {
    let mut panel = HelpPanel::default();
    if let Some(field) = field {
        panel.focus(field);
    }
    println!("{}", panel.render());

    if let Some(field) = field {
        let choices = options(field);
        if !choices.is_empty() {
            println!("\nOptions\n  {}", choices.join(", "));
        }
    }
}
