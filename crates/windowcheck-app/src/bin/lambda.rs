use std::sync::Arc;

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use windowcheck_app::event::handle_event;
use windowcheck_app::logging::init_logging;
use windowcheck_app::output::ScheduleInfo;
use windowcheck_core::config::{Settings, load_config};
use windowcheck_service::params::EnvironmentSource;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let log = init_logging();

    let settings = load_config()?;
    log.apply_level(&settings.logging.level);
    let settings = Arc::new(settings);

    tracing::info!("Starting windowcheck event handler");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let settings = Arc::clone(&settings);
        async move { handle(event, &settings) }
    }))
    .await
}

fn handle(event: LambdaEvent<Value>, settings: &Settings) -> Result<ScheduleInfo, Error> {
    let env = EnvironmentSource::from_process();
    tracing::debug!(request_id = %event.context.request_id, "Handling event");

    Ok(handle_event(&env, &event.payload, settings, Utc::now())?)
}
