use clap::Parser;
use plagcheck::{cli, config, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .init();
    }

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(config_path, args).await,
        cli::Commands::Compare(args) => cli::compare::handle_compare(config_path, args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::PlagiarismError> {
    let path = std::path::PathBuf::from(&args.file);
    let config = config::parse_config(&path).await?;
    // Also prove the stopword resource resolves
    config::build_detector(&config.detection())?;
    println!("Configuration is valid: {}", args.file);
    Ok(())
}
