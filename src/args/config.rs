use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::types::{Cli, FileConfig, Report};
use super::validation::check_date;
use crate::controller::stats::{
    DEFAULT_MOVING_AVERAGE_WINDOW, FilterOptions, GoalKpi, GoalTarget, GoalTargets, TrendKpi,
};
use crate::error::StatsError;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub data_json: PathBuf,
    pub report: Report,
    pub filter: FilterOptions,
    pub kpi: String,
    pub window: usize,
    pub round_id: Option<String>,
    pub pretty: bool,
    pub goals: GoalTargets,
}

/// Load config from CLI and optional TOML file. CLI values win, then the
/// file, then defaults.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, if no data
/// file is given, or if a file-supplied date or window is malformed.
pub fn load_config(cli: Cli) -> Result<RunConfig, StatsError> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                StatsError::Config(format!("read config toml {}: {e}", path.display()))
            })?;
            parse_file_config(&contents).map_err(|e| {
                StatsError::Config(format!("parse config toml {}: {e}", path.display()))
            })?
        }
        None => FileConfig::default(),
    };
    merge(cli, file_config)
}

/// # Errors
/// Returns an error if the text is not a valid config table.
pub fn parse_file_config(contents: &str) -> Result<FileConfig, StatsError> {
    Ok(toml::from_str::<FileConfig>(contents)?)
}

fn optional_date(value: Option<String>) -> Result<Option<String>, StatsError> {
    value.map(|d| check_date(&d)).transpose().map_err(StatsError::Config)
}

fn goal_targets(goals: BTreeMap<String, GoalTarget>) -> Result<GoalTargets, StatsError> {
    goals
        .into_iter()
        .map(|(key, target)| Ok((key.parse::<GoalKpi>()?, target)))
        .collect()
}

/// # Errors
/// Returns an error if no data file is given or a file value is malformed.
pub fn merge(cli: Cli, file_config: FileConfig) -> Result<RunConfig, StatsError> {
    let data_json = cli
        .data_json
        .or(file_config.data_json)
        .ok_or_else(|| StatsError::Config("missing --data-json".to_string()))?;

    let window = cli
        .window
        .or(file_config.window)
        .unwrap_or(DEFAULT_MOVING_AVERAGE_WINDOW);
    if window == 0 {
        return Err(StatsError::Config("window must be at least 1".to_string()));
    }

    let filter = FilterOptions {
        start_date: optional_date(cli.start_date.or(file_config.start_date))?,
        end_date: optional_date(cli.end_date.or(file_config.end_date))?,
        count: cli.count.or(file_config.count),
        course_id: cli.course_id.or(file_config.course_id),
        round_type: cli.round_type.or(file_config.round_type),
    };

    let config = RunConfig {
        data_json,
        report: cli.report.or(file_config.report).unwrap_or_default(),
        filter,
        kpi: cli
            .kpi
            .or(file_config.kpi)
            .unwrap_or_else(|| TrendKpi::AvgScore.key().to_string()),
        window,
        round_id: cli.round_id.or(file_config.round_id),
        pretty: cli.pretty || file_config.pretty.unwrap_or(false),
        goals: goal_targets(file_config.goals)?,
    };
    tracing::debug!(report = ?config.report, data = %config.data_json.display(), "resolved config");
    Ok(config)
}
