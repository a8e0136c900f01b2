//! Run one aggregation against the users API and print the result as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use department_stats::domain::DepartmentStatsService;
use department_stats::outbound::users_api::UsersApiSource;
use department_stats::settings::AppSettings;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `aggregate-once` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aggregate-once",
    about = "Fetch every user page once and print per-department statistics",
    version
)]
struct CliArgs {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
    /// Users API base URL. Overrides `DEPARTMENT_STATS_UPSTREAM_URL`.
    #[arg(long = "upstream-url", value_name = "url")]
    upstream_url: Option<String>,
    /// Page size requested from the users API.
    #[arg(long = "page-size", value_name = "count")]
    page_size: Option<u32>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let mut settings = AppSettings::load_from_iter([OsString::from("aggregate-once")])
        .map_err(|e| eyre!("failed to load settings: {e}"))?;
    if args.upstream_url.is_some() {
        settings.upstream_url = args.upstream_url;
    }
    if args.page_size.is_some() {
        settings.page_size = args.page_size;
    }

    let base = settings.upstream_base()?;
    let source = UsersApiSource::new(&base, settings.upstream_timeout())
        .wrap_err("failed to build users API client")?
        .with_page_size(settings.page_size());
    let service = DepartmentStatsService::new(Arc::new(source));

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build Tokio runtime")?;
    let stats = runtime
        .block_on(service.run_aggregation())
        .wrap_err("aggregation failed")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&stats)?
    } else {
        serde_json::to_string(&stats)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
