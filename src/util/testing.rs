//! Shared test setup: one tracing subscriber per test binary.

use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{Folder, OrgId};

static TEST_SETUP: Once = Once::new();

pub const ORG_1: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";
pub const ORG_2: &str = "9b4cdb0a-cfea-4f9d-8a68-24f038fae385";

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    // RUST_LOG wins; otherwise trace our own crate only
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orgtree=trace"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Build folders from `(name, org, path)` triples.
pub fn folders(records: &[(&str, OrgId, &str)]) -> Vec<Folder> {
    records
        .iter()
        .map(|&(name, org, path)| Folder::new(name, org, path))
        .collect()
}

pub fn org(id: &str) -> OrgId {
    id.parse().expect("valid org id")
}
