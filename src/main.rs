use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use pagefeed::config::Config;
use pagefeed::controller::ListEventReceiver;
use pagefeed::logging;
use pagefeed::{Filter, ListController, ListEvent, SimulatedGateway};

/// Headless driver for the paginated list.
#[derive(Debug, Parser)]
#[command(name = "pagefeed", version, about)]
struct Cli {
    /// Filter to select (newest, oldest, popular). Defaults to the config value.
    #[arg(long, short)]
    filter: Option<Filter>,

    /// Scroll to the end until this many pages are loaded.
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Tap the like button this many times.
    #[arg(long, default_value_t = 0)]
    like: u32,

    /// Tap the purchase button once.
    #[arg(long)]
    purchase: bool,

    /// Print the final state as JSON.
    #[arg(long)]
    json: bool,

    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the simulated gateway delay.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log to stderr instead of the PAGEFEED_LOG file.
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_stderr_tracing();
    } else {
        logging::init_tracing();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    if let Some(delay_ms) = cli.delay_ms {
        config.gateway.delay_ms = delay_ms;
    }
    config.validate().context("validating configuration")?;

    let gateway = Arc::new(SimulatedGateway::from_config(&config.gateway));
    let filter = cli.filter.unwrap_or(config.list.initial_filter);

    let mut controller = ListController::with_filter(gateway, filter);
    let mut events = controller.subscribe();
    controller.settle().await;
    report_events(&mut events);

    while controller.current_page() < cli.pages {
        let Some(last_row) = controller.items().len().checked_sub(1) else {
            break;
        };
        controller.notify_row_visible(last_row);
        if controller.is_idle() {
            tracing::info!(page = controller.current_page(), "No further page available");
            break;
        }
        controller.settle().await;
        report_events(&mut events);
    }

    for _ in 0..cli.like {
        controller.tap_like();
        controller.settle().await;
        report_events(&mut events);
    }

    if cli.purchase {
        controller.tap_purchase();
        controller.settle().await;
        report_events(&mut events);
    }

    let snapshot = controller.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!(
            "filter: {}  page: {}  items: {}  liked: {}",
            snapshot.filter,
            snapshot.current_page,
            snapshot.items.len(),
            snapshot.liked
        );
        for item in &snapshot.items {
            println!("{:>5}  {:<8} {}", item.value, item.name, item.age);
        }
    }

    Ok(())
}

fn report_events(events: &mut ListEventReceiver) {
    while let Ok(event) = events.try_recv() {
        match event {
            ListEvent::ItemsUpdated => tracing::info!("Items updated"),
            ListEvent::LikeChanged(liked) => tracing::info!(liked, "Like changed"),
            ListEvent::PurchaseSucceeded => tracing::info!("Purchase succeeded"),
            ListEvent::Error(err) => eprintln!("error: {}", err),
        }
    }
}
