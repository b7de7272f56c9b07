use review_insight::{
    cli::{Cli, CliHandler},
    error::ReviewError,
};
use std::process;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply
    let _ = dotenvy::dotenv();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(2);
        }
    };

    let handler = CliHandler::new(cli);
    handler.init_logging();

    if let Err(e) = handler.run().await {
        tracing::error!(error = %e, "review service failed");
        eprintln!("❌ {}", e);
        let exit_code = match e {
            ReviewError::Config(_) => 2,
            ReviewError::Io(_) => 3,
            _ => 1,
        };
        process::exit(exit_code);
    }
}
