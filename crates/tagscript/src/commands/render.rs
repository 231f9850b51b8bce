//! Render command - render a template to stdout

use crate::cli::RegistryArgs;
use crate::context::CliContext;
use crate::output::{print_json, print_raw};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Render a template from the argument, `--file` or stdin
///
/// # Exit Code
///
/// Rendering itself never fails; only reading the template or loading the
/// config can produce a non-zero exit.
pub fn run(
    template: Option<String>,
    file: Option<PathBuf>,
    json: bool,
    registry: RegistryArgs,
    verbose: bool,
) -> Result<()> {
    let ctx = CliContext::new(registry, verbose)?;
    let template = read_template(template, file)?;
    let engine = ctx.engine();
    debug!(
        bytes = template.len(),
        max_depth = engine.config().max_depth,
        "rendering template"
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    let result = rt.block_on(engine.render(&template, &()));

    if json {
        print_json(&serde_json::to_string_pretty(&result)?)?;
    } else {
        print_raw(result.content())?;
    }
    Ok(())
}

fn read_template(template: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(template) = template {
        return Ok(template);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read template from stdin")?;
    Ok(buffer)
}
