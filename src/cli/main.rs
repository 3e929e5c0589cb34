//! Entry point for the registry-to-namelist binary.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use mpas_registry_converter::cli::commands::convert::handle_convert;

/// Convert namelist options from an MPAS-A Registry.xml to a CAM-SIMA
/// namelist_definition.xml.
#[derive(Parser, Debug)]
#[command(name = "registry-to-namelist")]
#[command(version)]
#[command(about, long_about = None)]
struct Args {
    /// Path to the MPAS-A Registry.xml
    registry: PathBuf,

    /// Path to save the namelist definition to
    #[arg(default_value = "namelist_definition.xml")]
    output: PathBuf,

    /// Enable verbose logging output
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install tracing subscriber");
    }

    match handle_convert(&args.registry, &args.output) {
        Ok(count) => {
            println!("Wrote {} entries to {}", count, args.output.display());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    }
}
