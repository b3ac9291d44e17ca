//! Desktop rendition of the portfolio contact form.

mod app;
mod ui;

use tracing_subscriber::EnvFilter;

use crate::app::ContactApp;

/// Relay endpoint the form posts to.
const ENDPOINT_ENV: &str = "CONTACT_API_URL";
/// Optional address behind the "Or email me" link.
const MAILTO_ENV: &str = "CONTACT_MAILTO";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let endpoint = std::env::var(ENDPOINT_ENV).ok();
    let mailto = std::env::var(MAILTO_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    if endpoint.is_none() {
        tracing::warn!("{ENDPOINT_ENV} is not set; submissions will be refused");
    }

    ui::app_shell::run(ContactApp::new(endpoint, mailto))
}
