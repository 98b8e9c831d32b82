mod common;
mod config;
mod relay;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use relay::{HttpBackend, StreamRelay};
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "rust_llm_chat",
    version,
    about = "Streaming chat client for OpenAI-compatible endpoints"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the completion endpoint base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Override the model name
    #[arg(long, value_name = "NAME")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    if !std::path::Path::new(&cli.config).exists() {
        if let Err(err) = config::save_config(&cli.config, &config::AppConfig::default()) {
            log::warn!("Could not write default config {}: {err}", cli.config);
        } else {
            log::info!("Wrote default config to {}", cli.config);
        }
    }

    let mut app_config = config::load_config(&cli.config);
    app_config.apply_env_overrides();
    if let Some(base_url) = cli.base_url {
        app_config.base_url = base_url;
    }
    if let Some(model) = cli.model {
        app_config.model = model;
    }

    // UI -> relay
    let (command_tx, command_rx) = mpsc::channel(100);
    // relay -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let backend = HttpBackend::new(app_config.base_url.clone(), app_config.api_key.clone());
    let relay = StreamRelay::new(backend, app_config.model.clone(), event_tx, command_rx);
    tokio::spawn(relay.run());

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "chat-app",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!(
                "Client started against {} (model: {})",
                app_config.base_url,
                app_config.model
            );

            Ok(Box::new(ChatApp::new(
                cc,
                app_config.clone(),
                command_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
