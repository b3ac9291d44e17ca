use contact_relay_lambda::adapters::ses::SesEmailSender;
use contact_relay_lambda::config::RelayConfig;
use contact_relay_lambda::handlers::relay::handle_relay_event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // CloudWatch stamps each line itself.
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = RelayConfig::from_env()?;
    let sender = SesEmailSender::from_region(&config.region).await;
    info!(region = %config.region, "contact relay ready");

    let route = &config.route;
    let sender = &sender;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(handle_relay_event(event.payload, route, sender))
    }))
    .await
}
