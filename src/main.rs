use clap::Parser;
use schemeguard::{
    Result,
    cli::{Cli, Commands},
    commands,
    telemetry::{self, LoggingConfig},
};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    telemetry::init_tracing(&logging)?;

    match cli.command {
        Commands::Validate { files } => {
            let cancel = CancellationToken::new();
            let on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("Interrupted, cancelling validation");
                    on_signal.cancel();
                }
            });

            let all_valid =
                tokio::task::block_in_place(|| commands::execute_validate(&files, &cancel))?;
            if !all_valid {
                std::process::exit(1);
            }
        }
        Commands::List { file } => {
            commands::execute_list(&file)?;
        }
        Commands::Preset {
            preset,
            format,
            output,
        } => {
            commands::execute_preset(preset, format, output.as_deref())?;
        }
    }

    Ok(())
}
