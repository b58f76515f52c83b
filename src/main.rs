use std::sync::Arc;

use bdash::cli::commands::Cli;
use bdash::data::BdProvider;
use bdash::model::Config;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let start = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let mut config = Config::discover(&start)?;

    // Flags win over config
    if let Some(refresh) = cli.refresh {
        config.dashboard.refresh_secs = refresh;
    }
    if let Some(limit) = cli.limit {
        config.dashboard.limit = limit;
    }

    let provider = Arc::new(BdProvider::new(cli.dir, config.dashboard.limit));
    bdash::tui::run(provider, &config)
}
