//! Registry setup shared by the commands

use crate::cli::RegistryArgs;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use tagscript_core::{
    HandlerDescriptor, InterpolationEngine, builtins,
    config::{Config, EngineConfig},
};

/// Variables and engine settings gathered from the config file and flags
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    pub vars: BTreeMap<String, String>,
    pub engine: EngineConfig,
    pub builtins: bool,
    pub verbose: bool,
}

impl CliContext {
    /// Merge the config file (if any) with `--var` flags; flags win
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read, parsed or
    /// validated.
    pub fn new(args: RegistryArgs, verbose: bool) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        let mut vars = config.vars;
        for (name, value) in args.vars {
            vars.insert(name, value);
        }

        Ok(Self {
            vars,
            engine: config.engine,
            builtins: !args.no_builtins,
            verbose,
        })
    }

    /// Handlers for this invocation: builtins, then one variable per entry
    pub fn handlers(&self) -> Vec<HandlerDescriptor<()>> {
        let mut handlers = if self.builtins {
            builtins::handlers()
        } else {
            Vec::new()
        };

        for (name, value) in &self.vars {
            let value = value.clone();
            handlers.push(HandlerDescriptor::sync_variable(name.clone(), move |_| {
                Ok(Value::String(value.clone()))
            }));
        }

        handlers
    }

    pub fn engine(&self) -> InterpolationEngine<()> {
        InterpolationEngine::with_config(self.handlers(), self.engine)
    }
}
