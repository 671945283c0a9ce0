use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

use eventix::app::browse_events_use_case::BrowseEventsUseCase;
use eventix::app::event_details_use_case::GetEventDetailsUseCase;
use eventix::app::ports::EventRepository;
use eventix::app::repository::EventRepositoryImpl;
use eventix::config::Config;
use eventix::infra::api_key_provider::StaticApiKeyProvider;
use eventix::infra::http_client::ReqwestDiscoveryClient;
use eventix::logging;
use eventix::presentation::event_details_view_model::EventDetailsViewModel;
use eventix::presentation::events_view_model::EventsViewModel;
use eventix::presentation::ui_state::{EventDetailsScreenState, EventsScreenState};

#[derive(Parser)]
#[command(name = "eventix")]
#[command(about = "Browse upcoming events from the ticketing discovery API")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file (defaults to $EVENTIX_CONFIG or ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming events page by page
    Browse {
        /// Search keyword; blank lists everything
        #[arg(long)]
        keyword: Option<String>,
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show the details of a single event
    Detail {
        /// Event id as shown by `browse`
        event_id: Option<String>,
    },
}

/// Waits for the next state change that leaves the screen settled.
async fn next_settled(rx: &mut watch::Receiver<EventsScreenState>) -> anyhow::Result<EventsScreenState> {
    rx.changed().await?;
    let state = rx.wait_for(|s| s.is_settled()).await?.clone();
    Ok(state)
}

fn print_events(state: &EventsScreenState, printed: usize) -> usize {
    match state {
        EventsScreenState::Success(page) => {
            if page.events.is_empty() {
                println!("No events found.");
            }
            for (index, event) in page.events.iter().enumerate().skip(printed) {
                println!("{:>3}. {} [{}]", index + 1, event.name, event.id);
                println!("     {}", event.date_time);
                println!("     {}", event.location);
            }
            if let Some(err) = &page.pagination_error {
                println!("⚠️  Could not load page {}: {}", page.page + 2, err);
            }
            page.events.len()
        }
        EventsScreenState::Error { message } => {
            println!("❌ {}", message);
            printed
        }
        EventsScreenState::Loading => printed,
    }
}

async fn browse(repository: Arc<dyn EventRepository>, page_size: u32, keyword: Option<String>, pages: u32) -> anyhow::Result<()> {
    let use_case = Arc::new(BrowseEventsUseCase::new(repository, page_size));
    let view_model = EventsViewModel::new(use_case);
    let mut rx = view_model.subscribe();

    // Runs before the driver's first poll on the current-thread runtime
    if let Some(keyword) = &keyword {
        view_model.search(keyword);
    }

    let mut state = rx.wait_for(|s| s.is_settled()).await?.clone();
    let mut printed = print_events(&state, 0);

    for _ in 1..pages {
        match state.as_success() {
            Some(page) if page.pagination_error.is_none() => {}
            _ => break,
        }
        rx.borrow_and_update();
        view_model.load_next_page();
        state = next_settled(&mut rx).await?;
        printed = print_events(&state, printed);
    }

    info!("Browse finished with {} events on screen", printed);
    Ok(())
}

async fn detail(repository: Arc<dyn EventRepository>, event_id: Option<String>) -> anyhow::Result<()> {
    let use_case = Arc::new(GetEventDetailsUseCase::new(repository));
    let view_model = EventDetailsViewModel::new(use_case, event_id);
    let mut rx = view_model.subscribe();

    let state = match view_model.state() {
        EventDetailsScreenState::Loading => rx
            .wait_for(|s| !matches!(s, EventDetailsScreenState::Loading))
            .await?
            .clone(),
        settled => settled,
    };

    match state {
        EventDetailsScreenState::Success(detail) => {
            println!("{}", detail.name);
            println!("  When:   {}", detail.date_time);
            println!("  Where:  {}", detail.location);
            if let Some(price) = &detail.price {
                println!("  Price:  {}", price);
            }
            if let Some(genre) = &detail.genre {
                println!("  Genre:  {}", genre);
            }
            if let Some(limit) = &detail.ticket_limit {
                println!("  Limit:  {}", limit);
            }
            if let Some(age) = &detail.age_restrictions {
                println!("  Age restrictions: {}", age);
            }
            if !detail.products.is_empty() {
                println!("  Extras: {}", detail.products.join(", "));
            }
            if let Some(url) = &detail.ticket_url {
                println!("  Tickets: {}", url);
            }
            if let Some(url) = &detail.seatmap_url {
                println!("  Seat map: {}", url);
            }
            if !detail.image.is_empty() {
                println!("  Image:  {}", detail.image);
            }
            if let Some(info) = &detail.info {
                println!("\n{}", info);
            }
        }
        EventDetailsScreenState::Error { message } => println!("❌ {}", message),
        EventDetailsScreenState::Loading => {}
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if config.discovery.api_key.is_empty() {
        error!("No API key configured; set EVENTIX_API_KEY or discovery.api_key");
    }

    let remote = Arc::new(ReqwestDiscoveryClient::from_config(&config.discovery)?);
    let api_key_provider = Arc::new(StaticApiKeyProvider::from_config(&config.discovery));
    let repository: Arc<dyn EventRepository> = Arc::new(EventRepositoryImpl::new(
        remote,
        api_key_provider,
        config.discovery.query_policy(),
    ));

    match cli.command {
        Commands::Browse { keyword, pages } => {
            browse(repository, config.discovery.page_size, keyword, pages.max(1)).await?;
        }
        Commands::Detail { event_id } => {
            detail(repository, event_id).await?;
        }
    }
    Ok(())
}
