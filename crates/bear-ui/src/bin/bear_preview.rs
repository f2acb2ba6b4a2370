//! Preview collection themes from the terminal.

use std::path::PathBuf;

use anyhow::Result;
use bear_ui::preview::{self, Format};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bear-preview", version, about = "Inspect BEAR collection themes")]
struct Cli {
    /// Reject unknown collection identifiers instead of falling back to primal
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved theme for a collection
    Show {
        collection: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the palette with terminal color swatches
    Swatch { collection: String },
    /// Apply selections in order and print the resulting style surface
    Sequence {
        #[arg(required = true)]
        collections: Vec<String>,
    },
    /// Render the style sheet for every collection
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse();

    let out = match cli.command {
        Command::Show { collection, format } => preview::show(&collection, format, cli.strict)?,
        Command::Swatch { collection } => preview::swatches(&collection, cli.strict)?,
        Command::Sequence { collections } => preview::sequence(&collections)?,
        Command::Export { output } => preview::export(output.as_deref())?,
    };
    print!("{}", out);
    Ok(())
}
