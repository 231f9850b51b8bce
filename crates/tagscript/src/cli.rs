//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagscript")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template
    Render {
        /// Template text (read from --file or stdin when omitted)
        template: Option<String>,

        /// Read the template from a file
        #[arg(short, long, value_name = "PATH", conflicts_with = "template")]
        file: Option<PathBuf>,

        /// Print content, extras and tags as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        registry: RegistryArgs,
    },

    /// List registered placeholders
    Placeholders {
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        registry: RegistryArgs,
    },
}

/// Options that decide which placeholders are registered
#[derive(Args, Debug, Clone, Default)]
pub struct RegistryArgs {
    /// Define a variable placeholder (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Configuration file with [engine] and [vars] tables
    #[arg(short, long, value_name = "PATH", env = "TAGSCRIPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Register only variables, without the builtin placeholders
    #[arg(long)]
    pub no_builtins: bool,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("variable name is empty in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}
