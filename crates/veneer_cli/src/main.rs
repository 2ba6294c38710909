//! Veneer CLI
//!
//! Inspection tool for the Veneer styling stack: list design tokens,
//! classify a viewport and print the classes a component or schema file
//! resolves to.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::Component;
use config::VeneerConfig;

#[derive(Parser)]
#[command(name = "veneer")]
#[command(author, version, about = "Inspect Veneer design tokens, viewports and component styles", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./veneer.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List design tokens
    Tokens {
        /// Only list one group (colors, spacing, radii, typography, shadows, z-index, motion)
        #[arg(long)]
        group: Option<String>,

        /// Read tokens from this TOML table instead of the configured store
        #[arg(long)]
        toml: Option<PathBuf>,

        /// Print CSS custom properties
        #[arg(long)]
        css: bool,
    },

    /// Classify a viewport
    Classify {
        #[command(flatten)]
        media: commands::MediaArgs,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the classes of a built-in component
    Resolve {
        /// Component to resolve
        #[arg(value_enum)]
        component: Component,

        /// Variant value
        #[arg(long)]
        variant: Option<String>,

        /// Size value
        #[arg(long)]
        size: Option<String>,

        /// Extra classes (repeatable)
        #[arg(long = "class")]
        classes: Vec<String>,

        /// Keep conflicting classes instead of replacing them
        #[arg(long)]
        merge: bool,

        #[command(flatten)]
        media: commands::MediaArgs,
    },

    /// Resolve a variant schema file
    Schema {
        /// Schema TOML file
        file: PathBuf,

        /// Axis value as axis=value (repeatable)
        #[arg(long = "set")]
        values: Vec<String>,

        /// Extra classes (repeatable)
        #[arg(long = "class")]
        classes: Vec<String>,

        /// Keep conflicting classes instead of replacing them
        #[arg(long)]
        merge: bool,

        #[command(flatten)]
        media: commands::MediaArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let (config, base) = VeneerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Tokens { group, toml, css } => {
            commands::tokens(&config, &base, group.as_deref(), toml.as_deref(), css)
        }
        Commands::Classify { media, json } => commands::classify(&config, &media, json),
        Commands::Resolve {
            component,
            variant,
            size,
            classes,
            merge,
            media,
        } => commands::resolve_component(
            &config,
            &base,
            component,
            commands::ComponentArgs {
                variant,
                size,
                classes,
                merge,
            },
            &media,
        ),
        Commands::Schema {
            file,
            values,
            classes,
            merge,
            media,
        } => commands::resolve_schema(&config, &base, &file, &values, &classes, merge, &media),
    }
}
