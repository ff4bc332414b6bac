//! Score command implementation for the Harbour CLI.

use std::io::Write;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use harbour_core::{LocationRecord, MatchResult};
use harbour_scorer::{
    CultureVersion, EngineConfig, HobbyCatalogueCache, HobbyDefinitionSource, MatchEngine,
    StaticHobbySource,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::source::JsonFileHobbySource;
use crate::{
    ARG_CULTURE_VERSION, ARG_HOBBIES, ARG_LIMIT, ARG_LOCATIONS, ARG_OUTPUT, ARG_PREFERENCES,
    CliError, ENV_LOCATIONS, ENV_PREFERENCES,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every location in a JSON array against a preference \
                 document and print the ranking, best match first. Hobby \
                 definitions may be supplied as a JSON array; without them only \
                 built-in hobby knowledge is used.",
    about = "Rank locations against retirement preferences"
)]
#[ortho_config(prefix = "HARBOUR")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON preference document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to a JSON array of location records.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
    /// Path to a JSON array of hobby definitions.
    #[arg(long = ARG_HOBBIES, value_name = "path")]
    #[serde(default)]
    pub(crate) hobbies: Option<Utf8PathBuf>,
    /// Culture point table: `v1` (default) or `v2`.
    #[arg(long = ARG_CULTURE_VERSION, value_name = "version")]
    #[serde(default)]
    pub(crate) culture_version: Option<String>,
    /// Print only the best `n` matches.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Write the ranking to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the preference document.
    pub(crate) preferences: Utf8PathBuf,
    /// Path to the location records.
    pub(crate) locations: Utf8PathBuf,
    /// Optional path to hobby definitions.
    pub(crate) hobbies: Option<Utf8PathBuf>,
    /// Culture point table.
    pub(crate) culture_version: CultureVersion,
    /// Maximum number of matches to print.
    pub(crate) limit: Option<usize>,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.preferences, ARG_PREFERENCES)?;
        Self::require_existing(&self.locations, ARG_LOCATIONS)?;
        if let Some(hobbies) = &self.hobbies {
            Self::require_existing(hobbies, ARG_HOBBIES)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        let inspect = |source| CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        };
        if harbour_fs::is_file(path).map_err(inspect)? {
            return Ok(());
        }
        if harbour_fs::exists(path).map_err(inspect)? {
            return Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            });
        }
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }

    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_culture_version(self.culture_version)
    }

    fn hobby_source(&self) -> Arc<dyn HobbyDefinitionSource> {
        let Some(path) = &self.hobbies else {
            return Arc::new(StaticHobbySource::default());
        };
        Arc::new(JsonFileHobbySource::new(path.clone()))
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_PREFERENCES,
        })?;
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_LOCATIONS,
        })?;
        let culture_version = args
            .culture_version
            .map(parse_culture_version)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            preferences,
            locations,
            hobbies: args.hobbies,
            culture_version,
            limit: args.limit,
            output: args.output,
        })
    }
}

fn parse_culture_version(value: String) -> Result<CultureVersion, CliError> {
    value
        .parse()
        .map_err(|_| CliError::InvalidCultureVersion { value })
}

/// One entry in the printed ranking.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RankedMatch {
    /// Display name of the location.
    pub(crate) location: String,
    /// Full match breakdown.
    pub(crate) result: MatchResult,
}

pub(super) async fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let ranking = execute_score(&config).await?;
    let payload = render_ranking(&ranking)?;
    if let Some(path) = &config.output {
        log::info!("writing {} matches to {path}", ranking.len());
        return harbour_fs::write_utf8(path, &payload).map_err(|source| {
            CliError::WriteOutputFile {
                path: path.clone(),
                source,
            }
        });
    }
    let mut stdout = std::io::stdout().lock();
    write_ranking(&mut stdout, &payload)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Score every location and rank the results, best first.
pub(super) async fn execute_score(config: &ScoreConfig) -> Result<Vec<RankedMatch>, CliError> {
    let preferences: serde_json::Value = load_json(&config.preferences, ARG_PREFERENCES)?;
    let locations: Vec<LocationRecord> = load_json(&config.locations, ARG_LOCATIONS)?;
    log::info!(
        "scoring {} locations from {}",
        locations.len(),
        config.locations
    );

    let cache = HobbyCatalogueCache::new(config.hobby_source());
    let engine = MatchEngine::with_config(Arc::new(cache), config.engine_config());
    let results = engine.compute_match_batch(&locations, &preferences).await;
    Ok(rank(&locations, results, config.limit))
}

/// Pair results with their locations, sort best first and apply `limit`.
///
/// Ties keep input order.
pub(super) fn rank(
    locations: &[LocationRecord],
    results: Vec<MatchResult>,
    limit: Option<usize>,
) -> Vec<RankedMatch> {
    let mut ranking: Vec<RankedMatch> = locations
        .iter()
        .zip(results)
        .map(|(location, result)| RankedMatch {
            location: location.label().to_owned(),
            result,
        })
        .collect();
    ranking.sort_by(|left, right| right.result.total_score.cmp(&left.result.total_score));
    if let Some(max) = limit {
        ranking.truncate(max);
    }
    ranking
}

/// Loads and decodes a JSON file, attributing failures to `field`.
pub(super) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let contents = harbour_fs::read_utf8(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn render_ranking(ranking: &[RankedMatch]) -> Result<String, CliError> {
    let mut payload = serde_json::to_string_pretty(ranking).map_err(CliError::SerialiseOutput)?;
    payload.push('\n');
    Ok(payload)
}

pub(super) fn write_ranking(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
