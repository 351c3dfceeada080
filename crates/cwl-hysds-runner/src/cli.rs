use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cwl-to-hysds")]
#[command(about = "Generate HySDS hysds-io and job-spec files from a CWL document")]
pub struct Cli {
    /// CWL document, as a file:// URI or a filesystem path.
    pub cwl_file: String,
    /// Suffix for both output files.
    pub algorithm_name: String,
    /// Container image URL used when a DockerRequirement has no dockerImport.
    #[arg(long, default_value = "")]
    pub docker_uri: String,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory the two files are written to (default: current directory).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Location of the CWL file as seen by the worker; appended to the job command.
    #[arg(long)]
    pub remote_cwl_uri: Option<String>,
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
