mod cli;
mod commands;
mod context;
mod logging;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            template,
            file,
            json,
            registry,
        } => commands::render::run(template, file, json, registry, cli.verbose),
        Commands::Placeholders { json, registry } => {
            commands::placeholders::run(json, registry, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
