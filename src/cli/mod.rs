pub mod args;

pub use args::Cli;

use crate::analyzer::create_llm_client;
use crate::error::ReviewError;
use crate::server;
use tracing_subscriber::EnvFilter;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// `RUST_LOG` takes precedence over the verbosity flags.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.cli.default_log_filter()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(self.cli.is_debug())
            .try_init();
    }

    pub async fn run(&self) -> Result<(), ReviewError> {
        let config = self.cli.to_config();
        config.validate()?;

        let llm_client = create_llm_client(config.llm.clone())?;

        if self.cli.is_verbose() {
            tracing::info!(
                model = %config.llm.model_name,
                timeout_seconds = config.llm.timeout_seconds,
                max_text_chars = config.limits.max_text_chars,
                max_reviews = config.limits.max_reviews,
                "configuration loaded"
            );
        }

        server::serve(&config, llm_client).await
    }
}
