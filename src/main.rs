use anyhow::Context;
use time_schedules::adapters::json_file::report_input::load_report_input;
use time_schedules::application::report::build::build_report;
use time_schedules::shell::config::ReportConfig;
use time_schedules::shell::logging::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ReportConfig::from_env()?;
    info!(
        input = %config.input_file.display(),
        from = %config.from,
        to = %config.to,
        "building schedule report"
    );

    let input = load_report_input(&config.input_file)?;
    let report = build_report(&input, config.from, config.to);
    let rendered = serde_json::to_string_pretty(&report).context("could not render the report")?;
    println!("{rendered}");
    Ok(())
}
