//! Perch - keymap validation and inspection tool
//!
//! Loads a keymap configuration file, resolves every combination against
//! the built-in action table, and prints the effective binding table the
//! dispatcher would use. Unparseable combinations surface as warnings,
//! exactly as they would at startup inside a host shell.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use perch::config::KeymapConfig;
use perch::constants::{APP_BINARY_NAME, APP_NAME};
use perch::dispatch::{BindingKind, Dispatcher};

/// Perch - keymap validation and inspection tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a keymap configuration file (TOML or JSON)
    #[arg(value_name = "FILE")]
    config_path: Option<PathBuf>,

    /// Print the default keymap as TOML and exit
    #[arg(long)]
    dump_default: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.dump_default {
        print!("{}", KeymapConfig::default().to_toml()?);
        return Ok(());
    }

    let config = if let Some(path) = &cli.config_path {
        if !path.exists() {
            eprintln!("Error: Keymap config not found: {}", path.display());
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {APP_BINARY_NAME} my-keymaps.toml");
            eprintln!("  {APP_BINARY_NAME} --dump-default > config.toml");
            std::process::exit(1);
        }
        KeymapConfig::load_from(path)?
    } else {
        KeymapConfig::load()?
    };

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Effective keymap bindings");
    println!();

    let dispatcher = Dispatcher::from_config(&config);

    let mut rows: Vec<(String, String)> = dispatcher
        .bindings()
        .map(|(combo, kind)| {
            let target = match kind {
                BindingKind::Builtin(action) => action.id().to_string(),
                BindingKind::Custom(name) => format!("{name} (custom)"),
            };
            (combo.to_string(), target)
        })
        .collect();
    rows.sort();

    for (combo, target) in &rows {
        println!("  {combo:<18} {target}");
    }
    println!();

    let configured = config.bindings().count();
    let bound = rows.len();
    if bound < configured {
        println!(
            "{} of {configured} configured entries were dropped (duplicate or unparseable)",
            configured - bound
        );
    } else {
        println!("{bound} bindings resolved");
    }

    Ok(())
}
