use clap::Parser;
use html_viewer::utils::{logger, validation::Validate};
use html_viewer::{server, CliConfig, FileLoader, IframeRenderer, Viewer, ViewerError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting html-viewer");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ html-viewer failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), ViewerError> {
    config.validate()?;
    let settings = config.settings()?;

    // Nothing is bound until the document has loaded and rendered.
    let viewer = Viewer::new(FileLoader::default(), IframeRenderer::new(settings.title.clone()));
    let page = viewer.run()?;

    server::serve(&settings, page).await
}
