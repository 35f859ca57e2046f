//! InstaSaver - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instasaver::{
    cli::Args,
    config::{validate_config, Config},
    download::{DownloadRequest, Downloader},
    error::{exit_codes, Result},
    media::FfmpegExtractor,
    output::{print_banner, print_error, print_info, print_outcome},
    shell::{run_interactive, Shell, ShellState},
    InstagramApi,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let api = InstagramApi::new(config.instagram.clone(), config.options.show_progress)?;
    let extractor = FfmpegExtractor::new(config.ffmpeg.path.clone());
    let downloader = Downloader::new(api, extractor);

    match args.url.clone() {
        Some(url) => {
            let request = DownloadRequest {
                url,
                directory: Some(config.download_directory()),
                extension: args.extension_choice(),
                keep_video: config.options.keep_video,
            };

            let outcome = downloader.download(&request).await?;
            print_outcome(&outcome);
        }
        None => {
            print_banner();
            print_info(&format!(
                "Downloads go to {} unless another directory is entered",
                config.download_directory().display()
            ));

            let shell = Shell::new(downloader, config.options.keep_video);
            let state = ShellState::new(
                Some(config.download_directory()),
                config.options.audio_format,
            );
            run_interactive(&shell, state).await?;
        }
    }

    Ok(())
}
