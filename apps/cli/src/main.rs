use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{
    config::load_settings, fetch_all, DashboardApi, DashboardState, LaunchApiClient,
};
use serde_json::json;
use shared::{domain::FilterField, protocol::PAGE_SIZE};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(about = "Orbital launch dashboard for the terminal")]
struct Args {
    /// Launch API base URL (overrides dashboard.toml and LAUNCH_API_BASE_URL).
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    /// Print raw JSON instead of formatted text.
    #[arg(long, global = true)]
    json: bool,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Attempts count, yearly chart and one page of launches.
    Dashboard(DashboardArgs),
    /// Values accepted by each filter.
    Filters,
    /// Checks that the launch API is reachable.
    Health,
    /// Ingestion metadata.
    Schema,
}

#[derive(ClapArgs, Debug, Default)]
struct DashboardArgs {
    /// Inclusive start date (YYYY-MM-DD).
    #[arg(long)]
    since: Option<String>,
    /// Exclusive end date (YYYY-MM-DD).
    #[arg(long)]
    until: Option<String>,
    #[arg(long)]
    agency: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    lv_type: Option<String>,
    #[arg(long)]
    site: Option<String>,
    /// 1-based page of launches.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

impl DashboardArgs {
    fn filters(&self) -> [(FilterField, Option<&String>); 6] {
        [
            (FilterField::Since, self.since.as_ref()),
            (FilterField::Until, self.until.as_ref()),
            (FilterField::Agency, self.agency.as_ref()),
            (FilterField::State, self.state.as_ref()),
            (FilterField::LvType, self.lv_type.as_ref()),
            (FilterField::Site, self.site.as_ref()),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings()?.with_override(args.api_base_url.clone());
    let client = LaunchApiClient::new(settings.api_base_url.clone())?;
    tracing::debug!(api_base_url = %client.base_url(), "launch api client ready");

    match &args.command {
        Command::Dashboard(dashboard) => run_dashboard(&client, dashboard, args.json).await,
        Command::Filters => {
            let options = client
                .filter_options()
                .await
                .context("failed to fetch filter options")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print!("{}", render::render_filter_options(&options));
            }
            Ok(())
        }
        Command::Health => {
            let health = client.health().await.context("health check failed")?;
            if args.json {
                println!("{}", serde_json::to_string(&health)?);
            } else {
                println!("{}", if health.ok { "ok" } else { "not ok" });
            }
            Ok(())
        }
        Command::Schema => {
            let schema = client
                .schema_meta()
                .await
                .context("failed to fetch schema metadata")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&schema)?);
            } else {
                print!("{}", render::render_schema(&schema));
            }
            Ok(())
        }
    }
}

async fn run_dashboard(
    client: &LaunchApiClient,
    dashboard: &DashboardArgs,
    as_json: bool,
) -> Result<()> {
    let mut state = DashboardState::new();
    for (field, value) in dashboard.filters() {
        if let Some(value) = value {
            state.set_filter(field, value.as_str());
        }
    }
    state.set_offset(dashboard.page.saturating_sub(1).saturating_mul(PAGE_SIZE));

    let requests = state.mount();
    fetch_all(client, &mut state, requests).await;

    if as_json {
        let body = json!({
            "query": state.page_params().to_query_string(),
            "attempts": state.attempts(),
            "attempts_by_year": state.attempts_by_year(),
            "launches": state.launches(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render::render_dashboard(&state));
    }
    Ok(())
}
