use chrono::Utc;
use clap::Parser;
use windowcheck_app::cli::CliArgs;
use windowcheck_app::logging::{effective_level, init_logging};
use windowcheck_app::output::ScheduleInfo;
use windowcheck_core::config::load_config;
use windowcheck_service::window::evaluate;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let log = init_logging();

    let config = load_config()?;
    log.apply_level(effective_level(&config.logging.level, args.verbose));

    let request = args.request(&config.schedule.default_timezone);
    let now = args.at.unwrap_or_else(Utc::now);
    tracing::debug!(request = ?request, %now, "Evaluating window");

    let result = evaluate(&request, now)?;

    if args.debug {
        for field in result.trace() {
            eprintln!("{field}");
        }
    }

    let info = ScheduleInfo::from(&result);
    if args.json {
        println!("{}", info.to_json()?);
    } else {
        print!("{}", info.to_text());
    }

    Ok(())
}
