use std::path::PathBuf;

use clap::Parser;
use design_vault::configuration::config::Config;
use design_vault::controller::controller_handler::{Command, Controller};
use log::{error, info};

#[derive(Parser)]
#[command(name = "design-vault")]
#[command(version)]
#[command(about = "Keeps the design history and login of the interior designer")]
struct Args {
    /// TOML configuration file; overrides the flags below
    #[arg(long)]
    config_file: Option<PathBuf>,

    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();

    let config = match args.config_file {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Unable to import configuration from {}: {}", path.display(), e);
            std::process::exit(2);
        }),
        None => args.config,
    };

    let level = config.log_level_filter().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(2);
    });
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_target(false)
        .init();

    info!("Using storage at {}", config.storage_path.display());

    let mut controller = Controller::new(config).unwrap_or_else(|e| {
        error!("Unable to create a controller instance: {}, exiting...", e);
        std::process::exit(1);
    });

    match controller.run(args.command) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
