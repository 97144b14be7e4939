//! Cardash CLI
//!
//! Command-line access to the dashboard's building blocks:
//! - List selectable columns
//! - Print a chart's Vega-Lite specification
//! - Render a chart document or the full page to a file
//! - Generate a default config file

use anyhow::Context;
use cardash::chart::{build_chart, ThemeRegistry};
use cardash::config::generate_default_config;
use cardash::dataset::Column;
use cardash::page::{initial_plot, render_page};
use cardash::render::{render, to_vega_lite};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cars dataset dashboard tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List selectable columns
    Columns,

    /// Print the Vega-Lite specification for a chart
    Spec {
        /// X-axis column
        #[arg(short, long, default_value = "Displacement")]
        x: String,
        /// Y-axis column
        #[arg(short, long, default_value = "Cylinders")]
        y: String,
    },

    /// Render a chart as a standalone HTML document
    Render {
        /// X-axis column
        #[arg(short, long, default_value = "Displacement")]
        x: String,
        /// Y-axis column
        #[arg(short, long, default_value = "Cylinders")]
        y: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the dashboard page with the default chart
    Page {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let themes = ThemeRegistry::dashboard();

    match cli.command {
        Commands::Columns => {
            println!("{:<20} TYPE", "COLUMN");
            for column in Column::ALL {
                println!("{:<20} {}", column.name(), column.field_type());
            }
        }

        Commands::Spec { x, y } => {
            let spec = build_chart(&x, &y)?;
            let json: serde_json::Value =
                serde_json::from_str(&to_vega_lite(&spec, themes.active())?)?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }

        Commands::Render { x, y, output } => {
            let spec = build_chart(&x, &y)?;
            write_output(&render(&spec, themes.active())?, output)?;
        }

        Commands::Page { output } => {
            let srcdoc = initial_plot(themes.active())?;
            write_output(&render_page(&srcdoc), output)?;
        }

        Commands::Config { output } => {
            write_output(&generate_default_config(), output)?;
        }
    }

    Ok(())
}

fn write_output(content: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
