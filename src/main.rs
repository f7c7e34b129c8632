use anyhow::{Context, Result};
use rusty_golf_stats::args;
use rusty_golf_stats::controller::report::run_report;
use rusty_golf_stats::model::AppData;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_golf_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = args::args_checks();
    let config = args::load_config(cli).context("load config")?;

    let data = AppData::load(&config.data_json)
        .with_context(|| format!("load export {}", config.data_json.display()))?;
    if data.rounds.is_empty() {
        tracing::warn!(path = %config.data_json.display(), "export has no rounds");
    }
    let output = run_report(&data, &config)
        .with_context(|| format!("build {:?} report", config.report))?;

    let json = if config.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("serialize report")?;
    println!("{json}");
    Ok(())
}
