use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ephemgen::config::RunConfig;
use ephemgen::output::write_dataset;
use ephemgen::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "ephemgen")]
#[command(about = "Ephemeris reference vector generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run configuration file
    Validate { config: PathBuf },
    /// Run the pipeline and write the output artifact
    Generate {
        config: PathBuf,
        /// Override the output path from the configuration
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => validate(&config),
        Commands::Generate { config, output } => generate(&config, output),
    }
}

fn validate(path: &Path) -> ExitCode {
    let config = match RunConfig::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // from_file already built the grid once, so this cannot fail here.
    let grid = match config.grid() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Configuration is valid ({} bodies, {} samples per body)",
        config.bodies.len(),
        grid.len()
    );
    for body in &config.bodies {
        println!("  {}", body);
    }
    ExitCode::SUCCESS
}

fn generate(path: &Path, output: Option<PathBuf>) -> ExitCode {
    let config = match RunConfig::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pipeline = match Pipeline::from_config(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Setup error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let dataset = match pipeline.run() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Run failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let out_path = output.unwrap_or_else(|| config.output.clone());
    if let Err(e) = write_dataset(&out_path, &dataset) {
        eprintln!("Failed to write {}: {}", out_path.display(), e);
        return ExitCode::FAILURE;
    }

    println!("Wrote {}", out_path.display());
    ExitCode::SUCCESS
}
