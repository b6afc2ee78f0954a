//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

use crate::launch::LaunchRequest;
use crate::Error;

/// Env file consulted when no `-e` is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Load env files, then replace this process with a command
#[derive(Parser, Debug)]
#[command(
    name = "env-run",
    version,
    long_about = None,
    override_usage = "env-run [-e .env]... [-d ./dir] -- <command> [args...]"
)]
pub struct Cli {
    /// Path to an env file; repeat to layer several (later files win)
    #[arg(short = 'e', long = "env-file", value_name = "FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_files: Vec<PathBuf>,

    /// Working directory for the command (chdir before exec)
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run, followed by its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Splits the parsed command line into env files and a launch request.
    pub fn into_parts(self) -> Result<(Vec<PathBuf>, LaunchRequest), Error> {
        let request = LaunchRequest::new(self.command, self.dir).ok_or(Error::Usage)?;
        Ok((self.env_files, request))
    }
}
