mod load;
mod output;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use outlet_core::OutletFilter;
use outlet_events::{ClickOutcome, ClickSite, FilterState};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "outlet-cli")]
#[command(about = "Outlet promotions calendar: load, filter, and resolve events")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List events visible under an outlet/brand filter
    Events {
        /// `ALL`, a Korean outlet label, or an English slug
        #[arg(long, default_value = "ALL")]
        outlet: OutletFilter,

        /// Restrict to events carrying any of these brands (repeatable)
        #[arg(long = "brand")]
        brands: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List brand choices for an outlet
    Brands {
        #[arg(long, default_value = "ALL")]
        outlet: OutletFilter,
    },
    /// Show featured (currently running) events per outlet
    Highlights {
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        #[arg(long)]
        json: bool,
    },
    /// Resolve an event id to its detail page
    Resolve {
        event_id: String,

        /// Synthesize `/pages/event-<shortId>.html` when unmapped
        #[arg(long)]
        lenient: bool,
    },
    /// Print the crawlable link list
    Links,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("outlet-cli: run with --help for available commands");
        return Ok(());
    };

    let config = outlet_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let today = chrono::Local::now().date_naive();
    let session = load::load_session(&config, today).await?;

    match command {
        Commands::Events {
            outlet,
            brands,
            json,
        } => {
            let mut state = FilterState::default();
            state.select_outlet(outlet);
            let unique: BTreeSet<&str> = brands.iter().map(String::as_str).collect();
            for brand in unique {
                state.toggle_brand(brand);
            }
            let view = session.view(&state);
            if json {
                output::print_json(&view.visible)?;
            } else {
                output::print_events(&view.visible);
            }
        }
        Commands::Brands { outlet } => {
            let mut state = FilterState::default();
            let view = outlet_events::filter_events(session.events(), &mut state, outlet);
            output::print_brands(outlet, &view.brands_available);
        }
        Commands::Highlights { today: as_of, json } => {
            let picked = session.highlights(as_of.unwrap_or(today));
            if json {
                output::print_json(&picked)?;
            } else {
                output::print_highlights(&picked);
            }
        }
        Commands::Resolve { event_id, lenient } => {
            let site = if lenient {
                ClickSite::Highlight
            } else {
                ClickSite::Calendar
            };
            match session.click(&event_id, site) {
                ClickOutcome::Open { path } => println!("{path}"),
                ClickOutcome::NotFound { notice } => {
                    println!("{notice}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Links => output::print_links(&session.static_links()),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
