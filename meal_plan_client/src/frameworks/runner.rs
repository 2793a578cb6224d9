use crate::domain::{Day, MealTitle};
use crate::frameworks::config;
use crate::interface_adapters::cli::Cli;
use crate::interface_adapters::clients::MealPlanClient;
use crate::interface_adapters::notifier::ConsoleNotifier;
use crate::use_cases::AddToCustomMealPlanUseCase;
use clap::Parser;
use std::sync::Arc;

// Logs go to stderr so stdout only carries alerts.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let base_url = config::resolve_base_url(cli.base_url);
    tracing::debug!(base_url = %base_url, "meal plan client configured.");

    let client = match MealPlanClient::new(&base_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(base_url = %base_url, error = %e, "failed to build meal plan client");
            return;
        }
    };

    let use_case = AddToCustomMealPlanUseCase::new(
        Arc::new(client),
        Arc::new(ConsoleNotifier::stdout()),
    );

    // The task reports its own outcome; wait only so the process outlives it.
    let handle = use_case.spawn(Day::new(cli.day), MealTitle::new(cli.meal_title));
    if let Err(e) = handle.await {
        tracing::error!(error = %e, "meal plan task failed");
    }
}
