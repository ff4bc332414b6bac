//! Command-line interface for ranking locations against a preference
//! document.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod score;
mod source;

pub use error::CliError;
pub use source::JsonFileHobbySource;

use score::{ScoreArgs, run_score};

pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_LOCATIONS: &str = "locations";
pub(crate) const ARG_HOBBIES: &str = "hobbies";
pub(crate) const ARG_CULTURE_VERSION: &str = "culture-version";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_PREFERENCES: &str = "HARBOUR_CMDS_SCORE_PREFERENCES";
pub(crate) const ENV_LOCATIONS: &str = "HARBOUR_CMDS_SCORE_LOCATIONS";

/// Run the Harbour CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when the ranking cannot be written.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args).await,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "harbour",
    about = "Match retirement preferences against candidate locations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank locations against a preference document.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
