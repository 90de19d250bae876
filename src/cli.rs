use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemeguard")]
#[command(version)]
#[command(about = "OpenAPI security scheme validator", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the security schemes of one or more OpenAPI documents
    Validate {
        /// Paths to OpenAPI documents (YAML or JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the security schemes declared in an OpenAPI document
    List {
        /// Path to OpenAPI document
        file: PathBuf,
    },

    /// Print a preset security scheme
    Preset {
        /// Preset to print
        preset: Preset,

        /// Output format
        #[arg(short, long, default_value = "yaml")]
        format: ExportFormat,

        /// Output file (stdout if not specified)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Preset {
    /// apiKey scheme with the X-XSRF-TOKEN header
    Csrf,
    /// http bearer scheme with JWT tokens
    Jwt,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}
