use crate::catalog::{CatalogService, HttpCatalogClient};
use crate::config::BrowserConfig;
use crate::router::handle;
use crate::search::{ListingBrowser, SharedBrowser};
use crate::voice::{CommandRecognizer, SpeechRecognizer, UnavailableRecognizer};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod search;
mod templates;
mod voice;


fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("listing_browser=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn speech_recognizer(cfg: &BrowserConfig) -> Arc<dyn SpeechRecognizer> {
    match cfg.speech_command.as_deref() {
        Some(line) => match CommandRecognizer::from_command_line(line) {
            Ok(recognizer) => {
                tracing::info!(program = recognizer.program(), "voice search enabled");
                Arc::new(recognizer)
            }
            Err(e) => {
                tracing::warn!("voice search disabled: {e}");
                Arc::new(UnavailableRecognizer)
            }
        },
        None => {
            tracing::info!("voice search disabled: LISTINGS_SPEECH_COMMAND not set");
            Arc::new(UnavailableRecognizer)
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = match BrowserConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let catalog: Arc<dyn CatalogService> = match HttpCatalogClient::new(&cfg.api_base) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("catalog client init failed: {e}");
            std::process::exit(1);
        }
    };

    let browser = SharedBrowser::new(
        ListingBrowser::new(cfg.filter_profile),
        catalog,
        speech_recognizer(&cfg),
    );

    // The catalog is fetched once; a failure leaves it empty and shows a notice.
    browser.mount();

    tracing::info!(addr = %cfg.bind_addr, api = %cfg.api_base, "starting listing browser");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &browser) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
