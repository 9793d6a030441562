use crate::builder::{generate_client, GenerateOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for clientgen.
#[derive(Parser)]
#[command(name = "clientgen")]
#[command(about = "Generate typed API client libraries from OpenAPI specs", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a client SDK from an OpenAPI spec
    Generate {
        /// Spec location: file path, http(s) URL, or '-' for stdin
        #[arg(short, long)]
        spec: String,

        /// Project name for the generated client
        #[arg(short, long)]
        name: String,

        /// Output directory for the generated files
        #[arg(short, long, default_value = "./generated-client")]
        output: PathBuf,

        /// Target language
        #[arg(short, long, default_value = "typescript")]
        lang: String,
    },
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the spec cannot be acquired or parsed, the requested
/// language has no registered adapter, or any output file cannot be written.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            spec,
            name,
            output,
            lang,
        } => {
            let dir = generate_client(&GenerateOptions {
                spec_source: spec,
                project_name: name,
                output_dir: output,
                language: lang.clone(),
            })?;
            println!("{lang} client generated successfully in {}", dir.display());
            Ok(())
        }
    }
}
