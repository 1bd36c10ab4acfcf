// src/main.rs
// CitiTrack service and command-line entry point

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use cititrack::api::create_router;
use cititrack::chatbot::IntentResponder;
use cititrack::cli::{self, Cli, Commands};
use cititrack::config::{CitiTrackConfig, CONFIG};
use cititrack::priority::PriorityClassifier;
use cititrack::state::AppState;

async fn run_server(mut config: CitiTrackConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    let state = AppState::from_config(&config)?;

    for s in state.classifier.shadowed_keywords() {
        warn!(
            "Priority keyword '{}' is listed under {} but always resolves to {}",
            s.keyword, s.listed_in, s.claimed_by
        );
    }

    let app = create_router(state);
    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("CitiTrack server listening on http://{}", bind_address);
    info!("Chatbot API available at http://{}/api/chatbot", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = CONFIG.clone();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level()?)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        None => run_server(config, None, None).await?,
        Some(Commands::Serve { host, port }) => run_server(config, host, port).await?,
        Some(Commands::Classify { text }) => {
            println!("{}", cli::classify_output(PriorityClassifier::builtin(), &text));
        }
        Some(Commands::Ask { message, show_intent }) => {
            println!("{}", cli::ask_output(IntentResponder::builtin(), &message, show_intent));
        }
        Some(Commands::Rules) => {
            print!("{}", cli::rules_output(PriorityClassifier::builtin()));
        }
    }

    Ok(())
}
