use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::controller::stats::{GoalTarget, RoundLimit, RoundTypeFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Report {
    /// Filtered stats, handicap, match play and goal statuses.
    #[default]
    Dashboard,
    /// Course rollup for `--course-id`.
    Course,
    /// Per-round series for `--kpi` with a moving average.
    Trend,
    MatchPlay,
    /// Digest of `--round-id`, or of every filtered round.
    Summary,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Golf round statistics from a round tracker export", long_about = None)]
pub struct Cli {
    /// Exported `{ courses, rounds }` json file.
    #[arg(long, value_name = "DATA_JSON", value_parser = crate::args::validation::check_readable_file)]
    pub data_json: Option<PathBuf>,
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub report: Option<Report>,
    /// Inclusive, YYYY-MM-DD.
    #[arg(long, value_parser = crate::args::validation::check_date)]
    pub start_date: Option<String>,
    /// Inclusive, YYYY-MM-DD.
    #[arg(long, value_parser = crate::args::validation::check_date)]
    pub end_date: Option<String>,
    /// Keep only the N most recent rounds, or `all`.
    #[arg(long, value_name = "N|all")]
    pub count: Option<RoundLimit>,
    #[arg(long)]
    pub course_id: Option<String>,
    /// normal, league, match_play, casual, scramble or all.
    #[arg(long)]
    pub round_type: Option<RoundTypeFilter>,
    /// Trend series key, e.g. handicap or puttsPer9.
    #[arg(long)]
    pub kpi: Option<String>,
    #[arg(long, value_parser = crate::args::validation::check_window)]
    pub window: Option<usize>,
    #[arg(long)]
    pub round_id: Option<String>,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub data_json: Option<PathBuf>,
    pub report: Option<Report>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub count: Option<RoundLimit>,
    pub course_id: Option<String>,
    pub round_type: Option<RoundTypeFilter>,
    pub kpi: Option<String>,
    pub window: Option<usize>,
    pub round_id: Option<String>,
    pub pretty: Option<bool>,
    /// Keyed by goal kpi, e.g. `[goals.girPct]`.
    #[serde(default)]
    pub goals: BTreeMap<String, GoalTarget>,
}
