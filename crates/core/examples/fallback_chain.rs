//! Fallback chain: try several lookup strategies and report whichever won.
//!
//! Run with `RUST_LOG=debug` to see dispatch decisions.

use railyard_core::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Formats the value that survived the chain.
struct Report;

impl Command for Report {
    type Input = u64;
    type Output = String;

    fn execute(&self, input: Option<u64>) -> String {
        input.map_or_else(
            || "lookup succeeded without a value".to_string(),
            |port| format!("resolved port {port}"),
        )
    }
}

/// Summarises why every strategy failed.
struct Alert;

impl Command for Alert {
    type Input = MetaData;
    type Output = String;

    fn execute(&self, input: Option<MetaData>) -> String {
        let errors = input
            .and_then(|meta| meta.get(railyard_core::ERRORS_KEY).cloned())
            .map_or_else(|| "[]".to_string(), |codes| codes.to_string());
        format!("all lookups failed: {errors}")
    }
}

fn from_env(key: &str) -> Outcome<u64> {
    std::env::var(key)
        .map_err(|e| e.to_string())
        .and_then(|raw| raw.parse::<u64>().map_err(|e| e.to_string()))
        .map_or_else(
            |reason| Outcome::fail_with("ENV_MISSING", MetaData::new().with("reason", reason)),
            |port| Outcome::ok_with(port, MetaData::new().with("source", key)),
        )
}

fn from_config(text: &str) -> Outcome<u64> {
    text.lines()
        .find_map(|line| line.strip_prefix("port="))
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map_or_else(
            || Outcome::fail("CONFIG_MISSING"),
            |port| Outcome::ok_with(port, MetaData::new().with("source", "config")),
        )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    init_tracing();

    for config in ["host=localhost\nport=8080", "host=localhost"] {
        let resolved = Outcome::combine([
            from_env("RAILYARD_DEMO_PORT"),
            from_config(config),
        ]);
        info!(outcome = %serde_json::Value::from(resolved.meta_data().clone()), "chain finished");

        let port = resolved.value().copied();
        let success = port.map_or_else(
            || resolved.execute(&Report).on(Branch::Success),
            |port| resolved.execute(&Report).with_data(port).on(Branch::Success),
        );
        let failure = resolved
            .execute(&Alert)
            .with_data(resolved.meta_data().clone())
            .on(Branch::Fail);

        for line in success.into_iter().chain(failure) {
            println!("{line}");
        }
    }
}
