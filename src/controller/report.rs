use serde::Serialize;

use crate::args::{Report, RunConfig};
use crate::controller::stats::{
    ALL, GoalReport, build_round_summary, compute_course_stats, compute_handicap,
    compute_match_play_stats, compute_moving_average, compute_stats, compute_trend_data,
    evaluate_goals, filter_rounds,
};
use crate::error::StatsError;
use crate::model::{AppData, CourseStats, MatchStats, Round, RoundSummary, RoundType, Stats, TrendPoint};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub rounds_used: usize,
    pub stats: Stats,
    /// Index over every rated round, not just the filtered ones.
    pub handicap: Option<f64>,
    pub match_play: MatchStats,
    pub goals: Vec<GoalReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub kpi: String,
    pub window: usize,
    pub series: Vec<TrendPoint>,
    pub moving_average: Vec<TrendPoint>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummaryReport {
    pub id: String,
    pub date: String,
    pub course_name: String,
    pub round_type: RoundType,
    pub total_score: i32,
    #[serde(flatten)]
    pub summary: RoundSummary,
}

impl RoundSummaryReport {
    fn new(round: &Round) -> Self {
        Self {
            id: round.id.clone(),
            date: round.date.clone(),
            course_name: round.course_name.clone(),
            round_type: round.round_type,
            total_score: round.total_score,
            summary: build_round_summary(round),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ReportOutput {
    Dashboard(DashboardReport),
    Course(Box<CourseStats>),
    Trend(TrendReport),
    MatchPlay(MatchStats),
    Summary(Vec<RoundSummaryReport>),
}

/// Builds the report selected in `config` from an already loaded export.
///
/// # Errors
///
/// Will return `Err` if the course report has no course id, or a requested
/// course or round does not exist
pub fn run_report(data: &AppData, config: &RunConfig) -> Result<ReportOutput, StatsError> {
    tracing::info!(report = ?config.report, rounds = data.rounds.len(), "building report");
    let output = match config.report {
        Report::Dashboard => {
            let rounds = filter_rounds(&data.rounds, &config.filter);
            let stats = compute_stats(&rounds);
            let goals = evaluate_goals(&stats, &config.goals);
            ReportOutput::Dashboard(DashboardReport {
                rounds_used: rounds.len(),
                handicap: compute_handicap(&data.rounds),
                match_play: compute_match_play_stats(&rounds),
                stats,
                goals,
            })
        }
        Report::Course => {
            let course_id = config
                .filter
                .course_id
                .as_deref()
                .filter(|id| *id != ALL)
                .ok_or_else(|| StatsError::Config("course report needs --course-id".to_string()))?;
            let course = data.course(course_id)?;
            ReportOutput::Course(Box::new(compute_course_stats(
                course_id,
                &data.rounds,
                course,
            )))
        }
        Report::Trend => {
            let series = compute_trend_data(&data.rounds, &config.kpi);
            let moving_average = compute_moving_average(&series, config.window);
            ReportOutput::Trend(TrendReport {
                kpi: config.kpi.clone(),
                window: config.window,
                series,
                moving_average,
            })
        }
        Report::MatchPlay => {
            let rounds = filter_rounds(&data.rounds, &config.filter);
            ReportOutput::MatchPlay(compute_match_play_stats(&rounds))
        }
        Report::Summary => match config.round_id.as_deref() {
            Some(round_id) => {
                ReportOutput::Summary(vec![RoundSummaryReport::new(data.round(round_id)?)])
            }
            None => ReportOutput::Summary(
                filter_rounds(&data.rounds, &config.filter)
                    .into_iter()
                    .map(RoundSummaryReport::new)
                    .collect(),
            ),
        },
    };
    Ok(output)
}
