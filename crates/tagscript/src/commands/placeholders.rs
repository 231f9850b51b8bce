//! Placeholders command - list registered placeholder names

use crate::cli::RegistryArgs;
use crate::context::CliContext;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use tagscript_core::PlaceholderListing;

pub fn run(json: bool, registry: RegistryArgs, verbose: bool) -> Result<()> {
    let ctx = CliContext::new(registry, verbose)?;
    let listing = ctx.engine().introspect();

    if json {
        print_json(&serde_json::to_string_pretty(&listing)?)?;
    } else {
        render_human(&listing, ctx.verbose)?;
    }
    Ok(())
}

fn render_human(listing: &PlaceholderListing, verbose: bool) -> std::io::Result<()> {
    print_section("Variables", &listing.variables, "{", "}")?;
    print_text("")?;
    print_section("Functions", &listing.functions, "{", ":...}")?;

    if verbose {
        print_text("")?;
        print_text(&format!(
            "{} {} variables, {} functions",
            "→".cyan(),
            listing.variables.len(),
            listing.functions.len()
        ))?;
    }
    Ok(())
}

fn print_section(title: &str, names: &[String], open: &str, close: &str) -> std::io::Result<()> {
    print_text(&format!("{}:", title.bold()))?;
    if names.is_empty() {
        print_text(&format!("  {}", "(none)".dimmed()))?;
    }
    for name in names {
        print_text(&format!("  {}{}{}", open, name.green(), close))?;
    }
    Ok(())
}
